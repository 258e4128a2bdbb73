//! SVG output for identicons.
//!
//! [`SvgPath`] accumulates path data for one fill color, [`SvgRenderer`]
//! groups paths by color while the generator draws, and [`SvgDocument`] is the
//! finished, serializable result.

pub mod path;
pub mod renderer;

pub use path::SvgPath;
pub use renderer::{SvgDocument, SvgRenderer};
