//! Geometry types for placing shapes on the identicon grid.
//!
//! Shapes are described in cell-local coordinates. A [`Transform`] maps those
//! coordinates onto the canvas, optionally rotating the cell in 90° steps.

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Placement of a single grid cell on the canvas.
///
/// The rotation is applied around the cell's bounding box rather than around a
/// point, so a rotated shape always stays within `size x size`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Left edge of the cell
    pub x: f32,
    /// Top edge of the cell
    pub y: f32,
    /// Side length of the cell
    pub size: f32,
    /// Rotation class: 0, 1, 2 or 3 quarter turns clockwise.
    ///
    /// Any other value is treated as no rotation.
    pub rotation: f32,
}

impl Transform {
    /// A transform that leaves coordinates untouched.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        size: 0.0,
        rotation: 0.0,
    };

    /// Creates a new transform.
    pub fn new(x: f32, y: f32, size: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            size,
            rotation,
        }
    }

    /// Returns the right edge of the cell (x + size).
    pub fn right(&self) -> f32 {
        self.x + self.size
    }

    /// Returns the bottom edge of the cell (y + size).
    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }

    /// Transforms a cell-local point into canvas coordinates.
    ///
    /// `w` and `h` are the width and height of the object anchored at `(x, y)`.
    /// They are needed for anything that is not a true point (a circle's
    /// bounding box, for example) so that its anchor lands on the correct
    /// corner after rotation.
    pub fn transform_point(&self, x: f32, y: f32, w: f32, h: f32) -> Point {
        let right = self.right();
        let bottom = self.bottom();

        match self.rotation as i32 {
            1 => Point::new(right - y - h, self.y + x),
            2 => Point::new(right - x - w, bottom - y - h),
            3 => Point::new(self.x + y, bottom - x - w),
            _ => Point::new(self.x + x, self.y + y),
        }
    }

    /// Transforms a true point (zero-sized bounding box).
    pub fn transform_point_xy(&self, x: f32, y: f32) -> Point {
        self.transform_point(x, y, 0.0, 0.0)
    }
}
