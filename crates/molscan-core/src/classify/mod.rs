//! Molecular text classification
//!
//! Scans free-form text for substrings matching domain-specific lexical
//! shapes (protein and nucleic acid sequences, structure-database
//! accessions, SMILES-style chemical notation, cross-reference
//! identifiers, chemical formulas), resolves overlaps between competing
//! matches, and emits an ordered, gap-free sequence of typed segments
//! that together reconstitute the input exactly.

mod classifier;
mod patterns;
mod types;

pub use classifier::{classify, classify_preview, MolecularClassifier};
pub use types::{Segment, SegmentCategory};
