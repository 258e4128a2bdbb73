//! Drawing primitives used by the shape library.
//!
//! [`Graphics`] owns the active [`Transform`] and forwards transformed
//! geometry to a [`Renderer`]. Shapes only ever talk to `Graphics`, so they can
//! be drawn into any sink: the SVG renderer in production, a recorder in tests.

use palette::Srgb;

use crate::geometry::{Point, Transform};

// ============================================================================
// Renderer Trait
// ============================================================================

/// A sink for identicon geometry.
///
/// Geometry arrives already transformed into canvas coordinates. Every shape
/// is bracketed by [`begin_shape`](Self::begin_shape) and
/// [`end_shape`](Self::end_shape) with the fill color of the whole bracket.
pub trait Renderer {
    /// Starts a new shape filled with `color`.
    fn begin_shape(&mut self, color: Srgb<u8>);

    /// Finishes the shape started by the matching `begin_shape`.
    fn end_shape(&mut self, color: Srgb<u8>);

    /// Adds a closed polygon.
    fn add_polygon(&mut self, points: &[Point]);

    /// Adds a circle whose bounding box has its top-left corner at `point`.
    ///
    /// `counter_clockwise` flips the winding so the circle cuts a hole into
    /// previously added geometry of the same shape.
    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool);
}

// ============================================================================
// Graphics
// ============================================================================

/// Shape-local drawing context.
///
/// All coordinates passed to the `add_*` methods are relative to the cell
/// described by [`transform`](Self::transform). The `invert` flag on each
/// method reverses the winding, which is how shapes cut holes into themselves.
pub struct Graphics<'a, R: Renderer> {
    renderer: &'a mut R,

    /// Placement applied to every point. Replaced by the generator before
    /// each cell is drawn.
    pub transform: Transform,
}

impl<'a, R: Renderer> Graphics<'a, R> {
    /// Creates a drawing context with no transform.
    pub fn new(renderer: &'a mut R) -> Self {
        Self {
            renderer,
            transform: Transform::IDENTITY,
        }
    }

    /// Returns the underlying renderer.
    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    /// Adds a polygon from a flat list of `x, y` pairs.
    ///
    /// When `invert` is set the pairs are visited last to first. A trailing
    /// unpaired coordinate is ignored.
    pub fn add_polygon(&mut self, points: &[f32], invert: bool) {
        let transform = self.transform;
        let pairs = points.chunks_exact(2);

        let transformed: Vec<Point> = if invert {
            pairs
                .rev()
                .map(|p| transform.transform_point_xy(p[0], p[1]))
                .collect()
        } else {
            pairs
                .map(|p| transform.transform_point_xy(p[0], p[1]))
                .collect()
        };

        self.renderer.add_polygon(&transformed);
    }

    /// Adds a circle with its bounding box anchored at `(x, y)`.
    pub fn add_circle(&mut self, x: f32, y: f32, diameter: f32, invert: bool) {
        let point = self.transform.transform_point(x, y, diameter, diameter);
        self.renderer.add_circle(point, diameter, invert);
    }

    /// Adds an axis-aligned rectangle.
    pub fn add_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(&[x, y, x + w, y, x + w, y + h, x, y + h], invert);
    }

    /// Adds a right triangle occupying half of the given rectangle.
    ///
    /// The rectangle's corners are listed clockwise starting at the top-right
    /// corner; the corner at index `r mod 4` is dropped.
    pub fn add_triangle(&mut self, x: f32, y: f32, w: f32, h: f32, r: u32, invert: bool) {
        let mut points = vec![x + w, y, x + w, y + h, x, y + h, x, y];
        let start = (r % 4) as usize * 2;
        points.drain(start..start + 2);
        self.add_polygon(&points, invert);
    }

    /// Adds a rhombus touching the middle of each side of the given rectangle.
    pub fn add_rhombus(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(
            &[
                x + w / 2.0,
                y,
                x + w,
                y + h / 2.0,
                x + w / 2.0,
                y + h,
                x,
                y + h / 2.0,
            ],
            invert,
        );
    }
}

// ============================================================================
// Test Support
// ============================================================================

/// A renderer that records everything it receives.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub polygons: Vec<Vec<Point>>,
    pub circles: Vec<(Point, f32, bool)>,
    pub shapes: Vec<Srgb<u8>>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn begin_shape(&mut self, color: Srgb<u8>) {
        self.shapes.push(color);
    }

    fn end_shape(&mut self, _color: Srgb<u8>) {}

    fn add_polygon(&mut self, points: &[Point]) {
        self.polygons.push(points.to_vec());
    }

    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool) {
        self.circles.push((point, diameter, counter_clockwise));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn polygon_is_transformed() {
        let mut recorder = RecordingRenderer::default();
        let mut g = Graphics::new(&mut recorder);
        g.transform = Transform::new(10.0, 20.0, 5.0, 0.0);
        g.add_polygon(&[0.0, 0.0, 5.0, 0.0, 5.0, 5.0], false);

        assert_eq!(
            recorder.polygons,
            vec![points(&[(10.0, 20.0), (15.0, 20.0), (15.0, 25.0)])]
        );
    }

    #[test]
    fn inverted_polygon_is_reversed() {
        let mut recorder = RecordingRenderer::default();
        let mut g = Graphics::new(&mut recorder);
        g.add_polygon(&[0.0, 0.0, 5.0, 0.0, 5.0, 5.0], true);

        assert_eq!(
            recorder.polygons,
            vec![points(&[(5.0, 5.0), (5.0, 0.0), (0.0, 0.0)])]
        );
    }

    #[test]
    fn odd_coordinate_is_ignored() {
        let mut recorder = RecordingRenderer::default();
        let mut g = Graphics::new(&mut recorder);
        g.add_polygon(&[1.0, 2.0, 3.0, 4.0, 5.0], false);

        assert_eq!(recorder.polygons, vec![points(&[(1.0, 2.0), (3.0, 4.0)])]);
    }

    #[test]
    fn triangle_orientations() {
        let expected = [
            points(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
            points(&[(1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]),
            points(&[(1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            points(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        ];

        for r in 0..8 {
            let mut recorder = RecordingRenderer::default();
            let mut g = Graphics::new(&mut recorder);
            g.add_triangle(0.0, 0.0, 1.0, 1.0, r, false);

            assert_eq!(recorder.polygons.len(), 1);
            assert_eq!(recorder.polygons[0].len(), 3);
            assert_eq!(recorder.polygons[0], expected[(r % 4) as usize], "r = {}", r);
        }
    }

    #[test]
    fn rectangle_and_rhombus() {
        let mut recorder = RecordingRenderer::default();
        let mut g = Graphics::new(&mut recorder);
        g.add_rectangle(1.0, 2.0, 4.0, 6.0, false);
        g.add_rhombus(0.0, 0.0, 4.0, 6.0, false);

        assert_eq!(
            recorder.polygons[0],
            points(&[(1.0, 2.0), (5.0, 2.0), (5.0, 8.0), (1.0, 8.0)])
        );
        assert_eq!(
            recorder.polygons[1],
            points(&[(2.0, 0.0), (4.0, 3.0), (2.0, 6.0), (0.0, 3.0)])
        );
    }

    #[test]
    fn circle_uses_diameter_as_bounding_box() {
        let mut recorder = RecordingRenderer::default();
        let mut g = Graphics::new(&mut recorder);
        g.transform = Transform::new(0.0, 0.0, 10.0, 2.0);
        g.add_circle(1.0, 1.0, 4.0, true);

        assert_eq!(recorder.circles, vec![(Point::new(5.0, 5.0), 4.0, true)]);
    }
}
