//! SVG path data builder.

use std::fmt::{self, Write};

use crate::geometry::Point;

/// Accumulated SVG path data (the value of a `d` attribute).
///
/// Every coordinate is written with exactly one decimal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path data.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns true if nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends the data of another path.
    pub fn append(&mut self, other: &SvgPath) {
        self.data.push_str(&other.data);
    }

    /// Appends a closed polygon. Empty point lists are ignored.
    pub fn add_polygon(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        // Writing into a String cannot fail.
        let _ = write!(self.data, "M{:.1} {:.1}", first.x, first.y);
        for point in rest {
            let _ = write!(self.data, "L{:.1} {:.1}", point.x, point.y);
        }
        self.data.push('Z');
    }

    /// Appends a circle whose bounding box has its top-left corner at `point`.
    ///
    /// SVG cannot express a full circle as a single arc, so the circle is
    /// drawn as two half-circle arcs travelling in opposite directions.
    pub fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool) {
        let sweep_flag = if counter_clockwise { 0 } else { 1 };
        let radius = diameter / 2.0;

        let _ = write!(
            self.data,
            "M{:.1} {:.1}a{:.1},{:.1} 0 1,{} {:.1},0a{:.1},{:.1} 0 1,{} {:.1},0",
            point.x,
            point.y + radius,
            radius,
            radius,
            sweep_flag,
            diameter,
            radius,
            radius,
            sweep_flag,
            -diameter,
        );
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_data() {
        let mut path = SvgPath::new();
        path.add_polygon(&[
            Point::new(1.0, 2.0),
            Point::new(3.24, 4.0),
            Point::new(5.06, 6.0),
        ]);
        assert_eq!(path.as_str(), "M1.0 2.0L3.2 4.0L5.1 6.0Z");
    }

    #[test]
    fn empty_polygon_is_ignored() {
        let mut path = SvgPath::new();
        path.add_polygon(&[]);
        assert!(path.is_empty());
    }

    #[test]
    fn circle_data() {
        let mut path = SvgPath::new();
        path.add_circle(Point::new(10.0, 20.0), 8.0, false);
        assert_eq!(
            path.as_str(),
            "M10.0 24.0a4.0,4.0 0 1,1 8.0,0a4.0,4.0 0 1,1 -8.0,0"
        );
    }

    #[test]
    fn counter_clockwise_circle_flips_sweep() {
        let mut path = SvgPath::new();
        path.add_circle(Point::new(0.0, 0.0), 2.0, true);
        assert_eq!(path.as_str(), "M0.0 1.0a1.0,1.0 0 1,0 2.0,0a1.0,1.0 0 1,0 -2.0,0");
    }

    #[test]
    fn append_concatenates() {
        let mut a = SvgPath::new();
        a.add_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let mut b = SvgPath::new();
        b.add_polygon(&[Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);

        a.append(&b);
        assert_eq!(a.to_string(), "M0.0 0.0L1.0 1.0ZM2.0 2.0L3.0 3.0Z");
    }
}
