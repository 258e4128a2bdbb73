//! SVG renderer and document serialization.

use std::fmt;
use std::fs;
use std::path::Path;

use palette::Srgb;

use super::path::SvgPath;
use crate::color::to_hex;
use crate::error::{IdenticonError, Result};
use crate::geometry::Point;
use crate::graphics::Renderer;

// ============================================================================
// SvgRenderer
// ============================================================================

/// A [`Renderer`] that groups path data by fill color.
///
/// Each `begin_shape`/`end_shape` bracket collects into a fresh buffer. On
/// `end_shape` the buffer is appended to whatever was already recorded for
/// the same color, so several shapes may share one `<path>` element.
///
/// Colors keep the order in which they were first committed, which makes the
/// serialized output reproducible.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: u32,
    path: SvgPath,
    paths_by_color: Vec<(Srgb<u8>, SvgPath)>,
}

impl SvgRenderer {
    /// Creates a renderer for a `size x size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            path: SvgPath::new(),
            paths_by_color: Vec::new(),
        }
    }

    /// Returns the canvas size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the committed paths in stable order.
    pub fn paths(&self) -> &[(Srgb<u8>, SvgPath)] {
        &self.paths_by_color
    }

    /// Finishes rendering and returns the document.
    ///
    /// Geometry added after the last `end_shape` is discarded.
    pub fn into_document(self) -> SvgDocument {
        SvgDocument {
            size: self.size,
            paths: self.paths_by_color,
        }
    }
}

impl Renderer for SvgRenderer {
    fn begin_shape(&mut self, _color: Srgb<u8>) {
        self.path = SvgPath::new();
    }

    fn end_shape(&mut self, color: Srgb<u8>) {
        let path = std::mem::take(&mut self.path);
        if path.is_empty() {
            return;
        }

        match self.paths_by_color.iter_mut().find(|(c, _)| *c == color) {
            Some((_, existing)) => existing.append(&path),
            None => self.paths_by_color.push((color, path)),
        }
    }

    fn add_polygon(&mut self, points: &[Point]) {
        self.path.add_polygon(points);
    }

    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool) {
        self.path.add_circle(point, diameter, counter_clockwise);
    }
}

// ============================================================================
// SvgDocument
// ============================================================================

/// A finished identicon, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    size: u32,
    paths: Vec<(Srgb<u8>, SvgPath)>,
}

impl SvgDocument {
    /// Returns the width and height of the document.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the filled paths, one per color, in render order.
    pub fn paths(&self) -> &[(Srgb<u8>, SvgPath)] {
        &self.paths
    }

    /// Returns the distinct fill colors in render order.
    pub fn colors(&self) -> impl Iterator<Item = Srgb<u8>> + '_ {
        self.paths.iter().map(|(color, _)| *color)
    }

    /// Serializes the document to SVG markup.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Writes the SVG markup to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let svg = self.to_svg();
        fs::write(path, &svg).map_err(|source| IdenticonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Wrote {} bytes to {}", svg.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
             viewBox=\"0 0 {size} {size}\" preserveAspectRatio=\"xMidYMid meet\">"
        )?;

        for (color, path) in &self.paths {
            write!(f, "<path fill=\"{}\" d=\"{}\"/>", to_hex(*color), path)?;
        }

        f.write_str("</svg>")
    }
}

impl From<SvgRenderer> for SvgDocument {
    fn from(renderer: SvgRenderer) -> Self {
        renderer.into_document()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::usvg::{Options, Tree};

    const RED: Srgb<u8> = Srgb::new(255, 0, 0);
    const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

    fn square(offset: f32) -> Vec<Point> {
        vec![
            Point::new(offset, offset),
            Point::new(offset + 10.0, offset),
            Point::new(offset + 10.0, offset + 10.0),
            Point::new(offset, offset + 10.0),
        ]
    }

    #[test]
    fn same_color_accumulates() {
        let mut renderer = SvgRenderer::new(64);

        renderer.begin_shape(RED);
        renderer.add_polygon(&square(0.0));
        renderer.end_shape(RED);

        renderer.begin_shape(BLUE);
        renderer.add_polygon(&square(20.0));
        renderer.end_shape(BLUE);

        renderer.begin_shape(RED);
        renderer.add_polygon(&square(40.0));
        renderer.end_shape(RED);

        let paths = renderer.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].0, RED);
        assert_eq!(paths[0].1.as_str().matches('M').count(), 2);
        assert_eq!(paths[1].0, BLUE);
    }

    #[test]
    fn begin_shape_starts_fresh_buffer() {
        let mut renderer = SvgRenderer::new(64);

        renderer.begin_shape(RED);
        renderer.add_polygon(&square(0.0));
        // Never committed.
        renderer.begin_shape(BLUE);
        renderer.add_polygon(&square(20.0));
        renderer.end_shape(BLUE);

        let doc = renderer.into_document();
        assert_eq!(doc.colors().collect::<Vec<_>>(), vec![BLUE]);
        assert!(doc.paths()[0].1.as_str().starts_with("M20.0 20.0"));
    }

    #[test]
    fn empty_shape_is_not_recorded() {
        let mut renderer = SvgRenderer::new(64);
        renderer.begin_shape(RED);
        renderer.end_shape(RED);
        assert!(renderer.paths().is_empty());
    }

    #[test]
    fn document_markup() {
        let mut renderer = SvgRenderer::new(32);
        renderer.begin_shape(RED);
        renderer.add_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
        renderer.end_shape(RED);

        let svg = renderer.into_document().to_svg();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"32\" height=\"32\" \
             viewBox=\"0 0 32 32\" preserveAspectRatio=\"xMidYMid meet\">\
             <path fill=\"#ff0000\" d=\"M0.0 0.0L1.0 0.0L1.0 1.0Z\"/></svg>"
        );
    }

    #[test]
    fn document_parses_as_svg() {
        let mut renderer = SvgRenderer::new(100);
        renderer.begin_shape(RED);
        renderer.add_polygon(&square(10.0));
        renderer.add_circle(Point::new(12.0, 12.0), 6.0, true);
        renderer.end_shape(RED);

        let svg = renderer.into_document().to_svg();
        let tree = Tree::from_str(&svg, &Options::default()).expect("Should parse");
        assert_eq!(tree.size().width(), 100.0);
        assert_eq!(tree.size().height(), 100.0);
    }

    #[test]
    fn save_writes_markup() {
        let mut renderer = SvgRenderer::new(16);
        renderer.begin_shape(BLUE);
        renderer.add_polygon(&square(0.0));
        renderer.end_shape(BLUE);
        let doc = renderer.into_document();

        let path = std::env::temp_dir().join(format!(
            "identicon-renderer-save-{}.svg",
            std::process::id()
        ));
        doc.save(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(written, doc.to_svg());
    }

    #[test]
    fn save_reports_path_on_failure() {
        let doc = SvgRenderer::new(16).into_document();
        let path = std::env::temp_dir()
            .join("identicon-renderer-missing-dir")
            .join("nested")
            .join("icon.svg");

        let err = doc.save(&path).unwrap_err();
        assert!(matches!(err, IdenticonError::Io { .. }));
        assert!(err.to_string().contains("icon.svg"));
    }
}
