//! Types for molecular text classification
//!
//! Defines the segment data model emitted by the classifier and the
//! stable category enumeration consumers key on.

use serde::{Deserialize, Serialize};

/// Category assigned to a classified segment.
///
/// Declaration order is the priority order used when two candidate
/// matches start at the same offset: the earlier-declared category wins.
/// The serialized names are a stable contract for downstream consumers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCategory {
    /// Unrecognized text between molecular matches
    PlainText,
    /// Run of one-letter amino acid codes
    ProteinSequence,
    /// Run of nucleotide codes (DNA or RNA)
    NucleicAcidSequence,
    /// 4-character structure-database accession (PDB-style)
    StructureId,
    /// Line-notation chemical structure (SMILES-style)
    ChemicalNotation,
    /// Cross-reference accession identifier (UniProt-style)
    CrossRefId,
    /// Element-symbol/count formula
    ChemicalFormula,
}

impl SegmentCategory {
    /// All categories that represent recognized molecular data,
    /// in priority order.
    pub const MOLECULAR: [SegmentCategory; 6] = [
        SegmentCategory::ProteinSequence,
        SegmentCategory::NucleicAcidSequence,
        SegmentCategory::StructureId,
        SegmentCategory::ChemicalNotation,
        SegmentCategory::CrossRefId,
        SegmentCategory::ChemicalFormula,
    ];

    /// Whether this category marks recognized molecular data.
    pub fn is_molecular(self) -> bool {
        self != SegmentCategory::PlainText
    }

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentCategory::PlainText => "plain_text",
            SegmentCategory::ProteinSequence => "protein_sequence",
            SegmentCategory::NucleicAcidSequence => "nucleic_acid_sequence",
            SegmentCategory::StructureId => "structure_id",
            SegmentCategory::ChemicalNotation => "chemical_notation",
            SegmentCategory::CrossRefId => "cross_ref_id",
            SegmentCategory::ChemicalFormula => "chemical_formula",
        }
    }
}

impl Default for SegmentCategory {
    fn default() -> Self {
        Self::PlainText
    }
}

/// A typed, offset-tagged substring produced by classification.
///
/// Offsets are half-open byte offsets into the source string and always
/// fall on UTF-8 character boundaries. Segments are emitted in strictly
/// increasing, non-overlapping, gap-free offset order; concatenating
/// their `text` fields reproduces the input exactly. The single segment
/// returned for empty input is the one permitted exception to
/// `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Exact substring copied from the source text
    pub text: String,
    /// Assigned category
    pub category: SegmentCategory,
    /// Byte offset of the first character, inclusive
    pub start: usize,
    /// Byte offset past the last character, exclusive
    pub end: usize,
}

impl Segment {
    /// Build a `PlainText` segment for a gap in the source text.
    pub(crate) fn plain(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            category: SegmentCategory::PlainText,
            start,
            end: start + text.len(),
        }
    }

    /// Length of the underlying substring in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this segment spans zero bytes (empty-input case only).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
