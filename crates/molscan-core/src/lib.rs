//! molscan-core: molecular text classification engine
//!
//! This crate provides the classification core for molscan:
//! - Classify: pattern table, guard predicates, overlap resolution,
//!   and segment assembly for free-form text
//! - Render: category style table, per-category summaries, and HTML
//!   emission for downstream display surfaces
//!
//! The classifier is a pure, total function: every string is valid
//! input, nothing recognizable falls through as anything other than
//! plain text, and the emitted segments always reconstitute the input
//! exactly.

pub mod classify;
pub mod error;
pub mod render;

// Re-exports for convenience
pub use classify::{
    classify, MolecularClassifier, Segment, SegmentCategory,
};
pub use error::ClassifierError;
pub use render::{
    render_html, style_for, CategoryStyle, HighlightColor, HighlightSummary,
};
