//! Category style table
//!
//! A single enumeration-keyed table mapping each category to its human
//! label and highlight color, so no rendering surface hard-codes
//! per-category branching.

use serde::Serialize;

use crate::classify::SegmentCategory;

/// Highlight color assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    /// No highlight (plain text)
    None,
    Blue,
    Emerald,
    Violet,
    Amber,
    Cyan,
    Pink,
}

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Human-readable label, e.g. for tooltips
    pub label: &'static str,
    /// Highlight color
    pub color: HighlightColor,
}

/// Look up the display style for a category.
pub const fn style_for(category: SegmentCategory) -> CategoryStyle {
    match category {
        SegmentCategory::PlainText => CategoryStyle {
            label: "Text",
            color: HighlightColor::None,
        },
        SegmentCategory::ProteinSequence => CategoryStyle {
            label: "Protein Sequence",
            color: HighlightColor::Blue,
        },
        SegmentCategory::NucleicAcidSequence => CategoryStyle {
            label: "DNA/RNA Sequence",
            color: HighlightColor::Emerald,
        },
        SegmentCategory::StructureId => CategoryStyle {
            label: "PDB Structure ID",
            color: HighlightColor::Violet,
        },
        SegmentCategory::ChemicalNotation => CategoryStyle {
            label: "SMILES Structure",
            color: HighlightColor::Amber,
        },
        SegmentCategory::CrossRefId => CategoryStyle {
            label: "UniProt ID",
            color: HighlightColor::Cyan,
        },
        SegmentCategory::ChemicalFormula => CategoryStyle {
            label: "Chemical Formula",
            color: HighlightColor::Pink,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_color() {
        assert_eq!(
            style_for(SegmentCategory::PlainText).color,
            HighlightColor::None
        );
    }

    #[test]
    fn test_molecular_categories_have_distinct_colors() {
        let colors: Vec<_> = SegmentCategory::MOLECULAR
            .iter()
            .map(|&c| style_for(c).color)
            .collect();
        for (i, color) in colors.iter().enumerate() {
            assert_ne!(*color, HighlightColor::None);
            assert!(!colors[..i].contains(color));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            style_for(SegmentCategory::ProteinSequence).label,
            "Protein Sequence"
        );
        assert_eq!(
            style_for(SegmentCategory::NucleicAcidSequence).label,
            "DNA/RNA Sequence"
        );
    }
}
