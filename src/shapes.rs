//! The identicon shape library.
//!
//! Shapes come in two families: [`ShapeFamily::Outer`] shapes decorate the
//! sides and corners of the grid, [`ShapeFamily::Center`] shapes fill the
//! 2x2 center block. A hash digit selects a shape by its index in the
//! family's catalog, so the catalog order must never change.

use crate::graphics::{Graphics, Renderer};

// ============================================================================
// Shape
// ============================================================================

/// A parametric shape drawn into a single grid cell.
///
/// Shapes are stateless. Everything hash-dependent (position, rotation) is
/// carried by the [`Graphics`] transform; `draw` only receives the cell size
/// and the position of the cell within its rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    // Center family
    /// Square with a notch cut from the bottom-right corner.
    NotchedSquare,
    /// Tall triangle against the right edge.
    SideTriangle,
    /// Square inset towards the bottom-right corner.
    InsetSquare,
    /// Square with a pixel-aligned frame.
    FramedSquare,
    /// Circle offset towards the bottom-right corner.
    OffsetCircle,
    /// Square with a triangular hole.
    CutoutSquare,
    /// Square with a notch cut into the bottom-right corner diagonal.
    NotchedHexagon,
    /// Small triangle in the bottom-right quarter.
    CornerTriangle,
    /// L-shape completed by a triangle in the bottom-right quarter.
    SteppedSquare,
    /// Square with a square hole.
    SquareRing,
    /// Square with a circular hole.
    CircleRing,
    /// Square with a rhombus-shaped hole.
    RhombusRing,
    /// Large circle spanning the whole center block, drawn once.
    CenterCircle,

    // Outer family
    /// Triangle covering half of the cell.
    HalfCell,
    /// Flat triangle covering the bottom half of the cell.
    LowTriangle,
    /// Rhombus touching every side of the cell.
    Diamond,
    /// Circle centered in the cell.
    Dot,
}

/// Catalog of center shapes, in selection order.
///
/// [`Shape::CornerTriangle`] appears twice.
pub const CENTER_SHAPES: [Shape; 14] = [
    Shape::NotchedSquare,
    Shape::SideTriangle,
    Shape::InsetSquare,
    Shape::FramedSquare,
    Shape::OffsetCircle,
    Shape::CutoutSquare,
    Shape::NotchedHexagon,
    Shape::CornerTriangle,
    Shape::SteppedSquare,
    Shape::SquareRing,
    Shape::CircleRing,
    Shape::CornerTriangle,
    Shape::RhombusRing,
    Shape::CenterCircle,
];

/// Catalog of outer shapes, in selection order.
pub const OUTER_SHAPES: [Shape; 4] = [
    Shape::HalfCell,
    Shape::LowTriangle,
    Shape::Diamond,
    Shape::Dot,
];

impl Shape {
    /// Draws the shape into the cell described by `g.transform`.
    ///
    /// `index` is the position of the cell within its rendering pass.
    pub fn draw<R: Renderer>(self, g: &mut Graphics<'_, R>, cell: f32, index: usize) {
        match self {
            Self::NotchedSquare => {
                let k = cell * 0.42;
                g.add_polygon(
                    &[0.0, 0.0, cell, 0.0, cell, cell - k * 2.0, cell - k, cell, 0.0, cell],
                    false,
                );
            }
            Self::SideTriangle => {
                let w = cell * 0.5;
                let h = cell * 0.8;
                g.add_triangle(cell - w, 0.0, w, h, 2, false);
            }
            Self::InsetSquare => {
                let s = cell / 3.0;
                g.add_rectangle(s, s, cell - s, cell - s, false);
            }
            Self::FramedSquare => {
                let mut inner = cell * 0.1;
                if inner > 1.0 {
                    inner = inner.trunc();
                } else if inner > 0.5 {
                    inner = 1.0;
                }

                let outer = if cell < 6.0 {
                    1.0
                } else if cell < 8.0 {
                    2.0
                } else {
                    (cell / 4.0).trunc()
                };

                g.add_rectangle(
                    outer,
                    outer,
                    cell - inner - outer,
                    cell - inner - outer,
                    false,
                );
            }
            Self::OffsetCircle => {
                let m = cell * 0.15;
                let s = cell * 0.5;
                g.add_circle(cell - s - m, cell - s - m, s, false);
            }
            Self::CutoutSquare => {
                let inner = (cell * 0.1).trunc();
                let outer = (inner * 4.0).trunc();

                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_polygon(
                    &[
                        outer,
                        outer,
                        cell - inner,
                        outer,
                        outer + (cell - outer - inner) / 2.0,
                        cell - inner,
                    ],
                    true,
                );
            }
            Self::NotchedHexagon => {
                g.add_polygon(
                    &[
                        0.0,
                        0.0,
                        cell,
                        0.0,
                        cell,
                        cell * 0.7,
                        cell * 0.4,
                        cell * 0.4,
                        cell * 0.7,
                        cell,
                        0.0,
                        cell,
                    ],
                    false,
                );
            }
            Self::CornerTriangle => {
                let half = cell / 2.0;
                g.add_triangle(half, half, half, half, 3, false);
            }
            Self::SteppedSquare => {
                let half = cell / 2.0;
                g.add_rectangle(0.0, 0.0, cell, half, false);
                g.add_rectangle(0.0, half, half, half, false);
                g.add_triangle(half, half, half, half, 1, false);
            }
            Self::SquareRing => {
                let mut inner = cell * 0.14;
                if cell > 8.0 {
                    inner = inner.trunc();
                }

                let outer = if cell < 4.0 {
                    1.0
                } else if cell < 6.0 {
                    2.0
                } else {
                    (cell * 0.35).trunc()
                };

                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_rectangle(
                    outer,
                    outer,
                    cell - outer - inner,
                    cell - outer - inner,
                    true,
                );
            }
            Self::CircleRing => {
                let inner = cell * 0.12;
                let outer = inner * 3.0;

                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_circle(outer, outer, cell - inner - outer, true);
            }
            Self::RhombusRing => {
                let m = cell * 0.25;
                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_rhombus(m, m, cell - m, cell - m, true);
            }
            Self::CenterCircle => {
                // One circle covers all four center cells.
                if index == 0 {
                    let m = cell * 0.4;
                    let s = cell * 1.2;
                    g.add_circle(m, m, s, false);
                }
            }
            Self::HalfCell => {
                g.add_triangle(0.0, 0.0, cell, cell, 0, false);
            }
            Self::LowTriangle => {
                g.add_triangle(0.0, cell / 2.0, cell, cell / 2.0, 0, false);
            }
            Self::Diamond => {
                g.add_rhombus(0.0, 0.0, cell, cell, false);
            }
            Self::Dot => {
                let m = cell / 6.0;
                g.add_circle(m, m, cell - 2.0 * m, false);
            }
        }
    }
}

// ============================================================================
// ShapeFamily
// ============================================================================

/// One of the two shape catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Shapes for the 2x2 center block.
    Center,
    /// Shapes for the side and corner cells.
    Outer,
}

impl ShapeFamily {
    /// Returns the family's catalog in selection order.
    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Self::Center => &CENTER_SHAPES,
            Self::Outer => &OUTER_SHAPES,
        }
    }

    /// Selects a shape from a hash digit, wrapping around the catalog.
    pub fn select(self, digit: u32) -> Shape {
        let shapes = self.shapes();
        shapes[digit as usize % shapes.len()]
    }
}

// ============================================================================
// Tests
// ============================================================================
