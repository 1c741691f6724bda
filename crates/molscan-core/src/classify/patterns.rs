//! Pattern table for molecular data detection
//!
//! Each category is a standalone regex plus an optional guard predicate
//! that rejects lexically valid but implausible candidates. Table order
//! is the documented priority order for same-offset overlap tie-breaks.

use smallvec::SmallVec;

use super::types::SegmentCategory;

/// One entry in the detection table: a category, its regex source, and
/// an optional guard applied to every raw match.
pub(crate) struct PatternSpec {
    pub category: SegmentCategory,
    pub pattern: &'static str,
    pub guard: Option<fn(&str) -> bool>,
}

/// Detection table, in priority order.
pub(crate) const PATTERN_SPECS: &[PatternSpec] = &[
    // Protein sequence: one-letter amino acid codes
    PatternSpec {
        category: SegmentCategory::ProteinSequence,
        pattern: r"\b[ACDEFGHIKLMNPQRSTVWY]{10,}\b",
        guard: Some(is_plausible_protein),
    },
    // DNA/RNA sequence
    PatternSpec {
        category: SegmentCategory::NucleicAcidSequence,
        pattern: r"\b[ATCGU]{10,}\b",
        guard: Some(is_plausible_nucleic_acid),
    },
    // Structure accession: digit 1-9 followed by three alphanumerics
    PatternSpec {
        category: SegmentCategory::StructureId,
        pattern: r"\b[1-9][A-Za-z0-9]{3}\b",
        guard: None,
    },
    // SMILES-style line notation
    PatternSpec {
        category: SegmentCategory::ChemicalNotation,
        pattern: r"\b[CNOSPFClBrI\[\]()=+\-#@\\/0-9]+\b",
        guard: Some(is_plausible_chemical_notation),
    },
    // Cross-reference accession, two-form grammar. The alternation is
    // grouped so both word boundaries apply to both forms.
    PatternSpec {
        category: SegmentCategory::CrossRefId,
        pattern: r"\b(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9](?:[A-Z][A-Z0-9]{2}[0-9]){1,2})\b",
        guard: None,
    },
    // Chemical formula: two or more element/count groups
    PatternSpec {
        category: SegmentCategory::ChemicalFormula,
        pattern: r"\b[A-Z][a-z]?\d*(?:[A-Z][a-z]?\d*)+\b",
        guard: Some(is_plausible_formula),
    },
];

/// Number of distinct characters in `s`, counting at most `cap`.
fn distinct_chars(s: &str, cap: usize) -> usize {
    let mut seen: SmallVec<[char; 8]> = SmallVec::new();
    for c in s.chars() {
        if !seen.contains(&c) {
            seen.push(c);
            if seen.len() >= cap {
                break;
            }
        }
    }
    seen.len()
}

/// Number of distinct element symbols (uppercase letter plus optional
/// lowercase letter) in a formula candidate, counting at most `cap`.
fn distinct_elements(s: &str, cap: usize) -> usize {
    let mut seen: SmallVec<[(char, Option<char>); 8]> = SmallVec::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            continue;
        }
        let follow = match chars.peek() {
            Some(&next) if next.is_ascii_lowercase() => {
                chars.next();
                Some(next)
            }
            _ => None,
        };
        let symbol = (c, follow);
        if !seen.contains(&symbol) {
            seen.push(symbol);
            if seen.len() >= cap {
                break;
            }
        }
    }
    seen.len()
}

/// A run of a single repeated residue (or two alternating ones) is far
/// more likely ordinary text than a protein sequence.
pub(crate) fn is_plausible_protein(candidate: &str) -> bool {
    distinct_chars(candidate, 3) >= 3
}

/// A run of one repeated base is not a nucleotide sequence.
pub(crate) fn is_plausible_nucleic_acid(candidate: &str) -> bool {
    distinct_chars(candidate, 2) >= 2
}

/// Short tokens and tokens without any bond, branch, or ring-opening
/// character are ordinary words or numbers, not line notation.
pub(crate) fn is_plausible_chemical_notation(candidate: &str) -> bool {
    candidate.len() >= 5
        && candidate.contains(|c| matches!(c, '=' | '-' | '(' | '['))
}

/// A formula of one repeated element symbol is an ordinary all-caps
/// word, not a compound.
pub(crate) fn is_plausible_formula(candidate: &str) -> bool {
    distinct_elements(candidate, 2) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_guard_rejects_repetitive_runs() {
        assert!(!is_plausible_protein("AAAAAAAAAAAA"));
        assert!(!is_plausible_protein("ACACACACACAC"));
        assert!(is_plausible_protein("ACDEFGHIKLMN"));
    }

    #[test]
    fn test_nucleic_guard_rejects_homopolymers() {
        assert!(!is_plausible_nucleic_acid("AAAAAAAAAAAA"));
        assert!(!is_plausible_nucleic_acid("TTTTTTTTTT"));
        assert!(is_plausible_nucleic_acid("ATATATATATAT"));
        assert!(is_plausible_nucleic_acid("ATCGATCGATCG"));
    }

    #[test]
    fn test_notation_guard_requires_length_and_structure() {
        // Too short even with a bond
        assert!(!is_plausible_chemical_notation("C=O"));
        // Long enough but no bond/branch/ring-opening character
        assert!(!is_plausible_chemical_notation("12345"));
        assert!(!is_plausible_chemical_notation("CCCCCC"));
        // Aspirin
        assert!(is_plausible_chemical_notation("CC(=O)OC1=CC=CC=C1C(=O)O"));
        // Bracket atoms count as structure
        assert!(is_plausible_chemical_notation("[NH4+]C"));
    }

    #[test]
    fn test_formula_guard_requires_two_elements() {
        assert!(!is_plausible_formula("AAAAAAAAAAAA"));
        assert!(!is_plausible_formula("HHH"));
        assert!(is_plausible_formula("H2O"));
        assert!(is_plausible_formula("NaCl"));
        assert!(is_plausible_formula("C6H12O6"));
    }

    #[test]
    fn test_distinct_elements_counts_two_letter_symbols() {
        // Na and Cl are single symbols, not N+a / C+l
        assert_eq!(distinct_elements("NaCl", 8), 2);
        assert_eq!(distinct_elements("NaNa", 8), 1);
        assert_eq!(distinct_elements("C6H12O6", 8), 3);
    }

    #[test]
    fn test_table_order_matches_category_priority() {
        let categories: Vec<_> = PATTERN_SPECS.iter().map(|p| p.category).collect();
        assert_eq!(categories, SegmentCategory::MOLECULAR.to_vec());
    }

    #[test]
    fn test_all_patterns_compile() {
        for spec in PATTERN_SPECS {
            assert!(
                regex::Regex::new(spec.pattern).is_ok(),
                "pattern for {:?} failed to compile",
                spec.category
            );
        }
    }
}
