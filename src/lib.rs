//! identicon-renderer: Deterministic identicons from hex hashes
//!
//! This crate turns a hash string (for example the SHA-1 of an e-mail address)
//! into a small symmetric SVG icon. The same hash and configuration always
//! produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use identicon_renderer::{generate, IdenticonConfig};
//!
//! let config = IdenticonConfig::default();
//! let document = generate("a9993e364706816aba3e25717850c26c9cd0d89d", 128, &config).unwrap();
//!
//! let svg = document.to_svg();
//! assert!(svg.contains("viewBox=\"0 0 128 128\""));
//! ```
//!
//! # Configuration
//!
//! Colors are controlled by [`IdenticonConfig`], which round-trips through
//! JSON:
//!
//! ```
//! use identicon_renderer::{IdenticonConfig, LightnessRange};
//!
//! let config = IdenticonConfig::new()
//!     .with_saturation(0.8)
//!     .with_color_lightness(LightnessRange::new(0.3, 0.7));
//!
//! let json = config.to_json().unwrap();
//! assert_eq!(IdenticonConfig::from_json(&json).unwrap(), config);
//! ```
//!
//! # Custom Renderers
//!
//! [`IconGenerator::render`] draws into any [`Renderer`], so the geometry can
//! be sent somewhere other than SVG.

mod color;
mod config;
mod error;
mod generator;
mod geometry;
mod graphics;
mod hash;
mod shapes;
mod svg;

#[cfg(feature = "wasm")]
mod wasm;

pub use color::{THEME_SIZE, color_theme, corrected_hsl, hsl, to_hex};
pub use config::{IdenticonConfig, LightnessRange};
pub use error::{HashFormatError, IdenticonError, Result};
pub use generator::{
    CENTER, CORNERS, IconGenerator, Layout, PASSES, Pass, SIDES, generate, select_color_indices,
};
pub use geometry::{Point, Transform};
pub use graphics::{Graphics, Renderer};
pub use hash::{IdenticonHash, MIN_HASH_LEN};
pub use shapes::{CENTER_SHAPES, OUTER_SHAPES, Shape, ShapeFamily};
pub use svg::{SvgDocument, SvgPath, SvgRenderer};

#[cfg(feature = "wasm")]
pub use wasm::{default_config, generate_svg};
