//! Preview rendering for stadiums.
//!
//! Rasterises the field, walls, goals, joints and discs into an RGBA image
//! that can be saved as a PNG.

mod canvas;
mod png;
mod preview;

pub use canvas::Canvas;
pub use png::write_png;
pub use preview::{render_stadium, segment_arc, SegmentArc};
