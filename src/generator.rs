//! Identicon generation.
//!
//! The generator reads selections from fixed positions of the hash and draws
//! three passes onto a 4x4 grid:
//!
//! ```text
//!  ┌───┬───┬───┬───┐
//!  │ C │ S │ S │ C │   C = corners (outer shape)
//!  ├───┼───┼───┼───┤   S = sides   (outer shape)
//!  │ S │ M │ M │ S │   M = center  (center shape)
//!  ├───┼───┼───┼───┤
//!  │ S │ M │ M │ S │
//!  ├───┼───┼───┼───┤
//!  │ C │ S │ S │ C │
//!  └───┴───┴───┴───┘
//! ```
//!
//! | Hash digit | Used for                     |
//! |------------|------------------------------|
//! | 1          | center shape                 |
//! | 2, 3       | side shape, side rotation    |
//! | 4, 5       | corner shape, corner rotation|
//! | 8, 9, 10   | side, corner, center color   |
//! | last 7     | hue                          |

use palette::Srgb;

use crate::color::{THEME_SIZE, color_theme, to_hex};
use crate::config::IdenticonConfig;
use crate::error::Result;
use crate::geometry::Transform;
use crate::graphics::{Graphics, Renderer};
use crate::hash::IdenticonHash;
use crate::shapes::ShapeFamily;
use crate::svg::{SvgDocument, SvgRenderer};

/// Fraction of the icon size left empty on every side.
const PADDING: f32 = 0.08;

/// Number of cells along each side of the grid.
const GRID: f32 = 4.0;

/// First hash digit used for color selection.
const COLOR_DIGIT: usize = 8;

/// Theme entries that must not appear together: dark gray with dark color,
/// light gray with light color.
const EXCLUSIVE_COLORS: [[usize; 2]; 2] = [[0, 4], [2, 3]];

/// Theme entry used when a selection would clash.
const FALLBACK_COLOR: usize = 1;

// ============================================================================
// Layout
// ============================================================================

/// Position and cell size of the grid on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Left edge of the grid
    pub x: f32,
    /// Top edge of the grid
    pub y: f32,
    /// Side length of one cell
    pub cell: f32,
}

impl Layout {
    /// Centers the grid on a `size x size` canvas inside the padding.
    pub fn new(size: f32) -> Self {
        let padding = PADDING * size;
        let inner = size - padding * 2.0;
        let cell = inner / GRID;
        let x = padding + inner / 2.0 - cell * 2.0;

        Self { x, y: x, cell }
    }

    /// Returns the transform for the cell at `(col, row)`.
    pub fn cell_transform(&self, col: u8, row: u8, rotation: u32) -> Transform {
        Transform::new(
            self.x + f32::from(col) * self.cell,
            self.y + f32::from(row) * self.cell,
            self.cell,
            (rotation % 4) as f32,
        )
    }
}

// ============================================================================
// Passes
// ============================================================================

/// One rendering pass: a single shape, drawn in a single color, on a fixed
/// set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    /// Name used in log output.
    pub name: &'static str,
    /// Catalog the shape is selected from.
    pub family: ShapeFamily,
    /// Hash digit selecting the shape.
    pub shape_digit: usize,
    /// Hash digit seeding the rotation; `None` starts the rotation at 0.
    pub rotation_digit: Option<usize>,
    /// Slot in the selected color indices.
    pub color_slot: usize,
    /// Cells as `(col, row)`, in drawing order.
    pub cells: &'static [(u8, u8)],
}

impl Pass {
    /// Returns the transform of every cell of the pass.
    ///
    /// The rotation starts at the seed digit and advances by one quarter turn
    /// per cell.
    pub fn transforms(&self, layout: &Layout, hash: &IdenticonHash) -> Vec<Transform> {
        let seed = self.rotation_digit.map_or(0, |digit| hash.nibble(digit));

        self.cells
            .iter()
            .zip(seed..)
            .map(|(&(col, row), rotation)| layout.cell_transform(col, row, rotation))
            .collect()
    }
}

/// The eight non-corner cells of the border.
pub const SIDES: Pass = Pass {
    name: "sides",
    family: ShapeFamily::Outer,
    shape_digit: 2,
    rotation_digit: Some(3),
    color_slot: 0,
    cells: &[(1, 0), (2, 0), (2, 3), (1, 3), (0, 1), (3, 1), (3, 2), (0, 2)],
};

/// The four corner cells.
pub const CORNERS: Pass = Pass {
    name: "corners",
    family: ShapeFamily::Outer,
    shape_digit: 4,
    rotation_digit: Some(5),
    color_slot: 1,
    cells: &[(0, 0), (3, 0), (3, 3), (0, 3)],
};

/// The 2x2 center block.
pub const CENTER: Pass = Pass {
    name: "center",
    family: ShapeFamily::Center,
    shape_digit: 1,
    rotation_digit: None,
    color_slot: 2,
    cells: &[(1, 1), (2, 1), (2, 2), (1, 2)],
};

/// All passes in drawing order.
pub const PASSES: [Pass; 3] = [SIDES, CORNERS, CENTER];

// ============================================================================
// Color Selection
// ============================================================================

/// Selects the theme entries for the sides, corners and center.
///
/// Each selection comes from one hash digit. A selection that would pair
/// dark gray with dark color, or light gray with light color, with an earlier
/// selection falls back to the mid color.
pub fn select_color_indices(hash: &IdenticonHash) -> [usize; 3] {
    let mut chosen: Vec<usize> = Vec::with_capacity(3);

    for i in 0..3 {
        let mut index = hash.nibble(COLOR_DIGIT + i) as usize % THEME_SIZE;
        if EXCLUSIVE_COLORS
            .iter()
            .any(|group| is_duplicate(&chosen, group, index))
        {
            index = FALLBACK_COLOR;
        }
        chosen.push(index);
    }

    [chosen[0], chosen[1], chosen[2]]
}

fn is_duplicate(chosen: &[usize], group: &[usize; 2], index: usize) -> bool {
    group.contains(&index) && group.iter().any(|entry| chosen.contains(entry))
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Draws identicons with a fixed configuration.
///
/// # Example
///
/// ```
/// use identicon_renderer::{IconGenerator, IdenticonConfig, IdenticonHash, SvgRenderer};
///
/// let generator = IconGenerator::new(IdenticonConfig::default());
/// let hash = IdenticonHash::parse("0123456789abcdef0123456789abcdef").unwrap();
///
/// let mut renderer = SvgRenderer::new(128);
/// generator.render(&mut renderer, &hash, 128.0);
/// let svg = renderer.into_document().to_svg();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IconGenerator {
    config: IdenticonConfig,
}

impl IconGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: IdenticonConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &IdenticonConfig {
        &self.config
    }

    /// Draws the identicon for `hash` on a `size x size` canvas.
    pub fn render<R: Renderer>(&self, renderer: &mut R, hash: &IdenticonHash, size: f32) {
        let layout = Layout::new(size);
        let hue = hash.hue();
        let theme = color_theme(hue, &self.config);
        let color_indices = select_color_indices(hash);

        log::debug!(
            "Identicon {}: hue {:.4}, colors {:?}, cell {:.2}",
            hash,
            hue,
            color_indices,
            layout.cell
        );

        let mut graphics = Graphics::new(renderer);
        for pass in &PASSES {
            let color = theme[color_indices[pass.color_slot]];
            render_pass(&mut graphics, pass, &layout, hash, color);
        }
    }

    /// Validates `hash` and renders it to an SVG document.
    pub fn generate(&self, hash: &str, size: u32) -> Result<SvgDocument> {
        let hash = IdenticonHash::parse(hash)?;
        let mut renderer = SvgRenderer::new(size);
        self.render(&mut renderer, &hash, size as f32);
        Ok(renderer.into_document())
    }
}

fn render_pass<R: Renderer>(
    graphics: &mut Graphics<'_, R>,
    pass: &Pass,
    layout: &Layout,
    hash: &IdenticonHash,
    color: Srgb<u8>,
) {
    let shape = pass.family.select(hash.nibble(pass.shape_digit));
    log::trace!("Pass {}: {:?} in {}", pass.name, shape, to_hex(color));

    graphics.renderer().begin_shape(color);
    for (index, transform) in pass.transforms(layout, hash).into_iter().enumerate() {
        graphics.transform = transform;
        shape.draw(graphics, layout.cell, index);
    }
    graphics.renderer().end_shape(color);
}

/// Renders the identicon for `hash` as a `size x size` SVG document.
///
/// Fails if `hash` is not a valid identicon hash; nothing is rendered in that
/// case.
pub fn generate(hash: &str, size: u32, config: &IdenticonConfig) -> Result<SvgDocument> {
    IconGenerator::new(*config).generate(hash, size)
}

// ============================================================================
// Tests
// ============================================================================
