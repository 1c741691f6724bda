//! Rendering support for classified segments
//!
//! The classifier core only guarantees the segment invariants; these
//! modules carry the display-side data a consumer needs: a style table
//! keyed by category, per-category summaries, and plain HTML emission.

mod html;
mod style;
mod summary;

pub use html::render_html;
pub use style::{style_for, CategoryStyle, HighlightColor};
pub use summary::HighlightSummary;
