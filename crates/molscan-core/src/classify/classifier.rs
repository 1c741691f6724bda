//! Classification engine
//!
//! Two-phase algorithm: collect candidate matches from every pattern in
//! the table, then resolve overlaps greedily left to right and assemble
//! the gap-free segment sequence.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use tracing::trace;

use super::patterns::{PatternSpec, PATTERN_SPECS};
use super::types::{Segment, SegmentCategory};
use crate::error::ClassifierError;

/// A guarded, compiled entry from the pattern table.
struct CompiledPattern {
    category: SegmentCategory,
    regex: Regex,
    guard: Option<fn(&str) -> bool>,
}

/// A candidate match pulled from one pattern, before overlap resolution.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    end: usize,
    category: SegmentCategory,
    /// Index into the pattern table; lower wins same-offset ties.
    priority: usize,
}

/// Classifies free-form text into molecular data segments.
///
/// The classifier is pure and total: any string is valid input, no call
/// can fail, and concatenating the returned segments' text reproduces
/// the input exactly. Instances are immutable after construction and
/// safe to share across threads.
pub struct MolecularClassifier {
    patterns: Vec<CompiledPattern>,
}

impl MolecularClassifier {
    /// Compile the detection table.
    ///
    /// Fails only if a table pattern is rejected by the regex engine,
    /// which would be a defect in the table itself.
    pub fn new() -> Result<Self, ClassifierError> {
        let patterns = PATTERN_SPECS
            .iter()
            .map(|spec: &PatternSpec| {
                Regex::new(spec.pattern)
                    .map(|regex| CompiledPattern {
                        category: spec.category,
                        regex,
                        guard: spec.guard,
                    })
                    .map_err(|source| ClassifierError::PatternCompile {
                        category: spec.category.as_str(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Classify `text` into an ordered, gap-free segment sequence.
    ///
    /// Empty input yields a single empty `PlainText` segment spanning
    /// `[0, 0)`; this is the documented convention for the one case
    /// where a segment may be empty.
    pub fn classify(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return vec![Segment::plain("", 0)];
        }

        // Phase 1: pool guarded candidates from every pattern.
        let mut pool: SmallVec<[Candidate; 16]> = SmallVec::new();
        for (priority, pattern) in self.patterns.iter().enumerate() {
            for m in pattern.regex.find_iter(text) {
                if let Some(guard) = pattern.guard {
                    if !guard(m.as_str()) {
                        continue;
                    }
                }
                pool.push(Candidate {
                    start: m.start(),
                    end: m.end(),
                    category: pattern.category,
                    priority,
                });
            }
        }

        // Phase 2: deterministic ordering, then greedy left-to-right
        // acceptance. A candidate starting inside an accepted span is
        // discarded whole, never trimmed.
        pool.sort_unstable_by_key(|c| (c.start, c.priority));

        let mut segments = Vec::new();
        let mut cursor = 0;
        for candidate in &pool {
            if candidate.start < cursor {
                continue;
            }
            if candidate.start > cursor {
                segments.push(Segment::plain(&text[cursor..candidate.start], cursor));
            }
            segments.push(Segment {
                text: text[candidate.start..candidate.end].to_string(),
                category: candidate.category,
                start: candidate.start,
                end: candidate.end,
            });
            cursor = candidate.end;
        }
        if cursor < text.len() {
            segments.push(Segment::plain(&text[cursor..], cursor));
        }

        trace!(
            input_len = text.len(),
            candidates = pool.len(),
            segments = segments.len(),
            "classified text"
        );

        segments
    }

    /// Classify a truncated preview of `text`.
    ///
    /// Inputs longer than `max_chars` characters are cut at a character
    /// boundary and suffixed with `"..."` before classification, the
    /// way a collapsed display renders long messages. Offsets in the
    /// result refer to the preview string, not the original.
    pub fn classify_preview(&self, text: &str, max_chars: usize) -> Vec<Segment> {
        match text.char_indices().nth(max_chars) {
            None => self.classify(text),
            Some((cut, _)) => {
                let mut preview = String::with_capacity(cut + 3);
                preview.push_str(&text[..cut]);
                preview.push_str("...");
                self.classify(&preview)
            }
        }
    }
}

impl Default for MolecularClassifier {
    fn default() -> Self {
        Self::new().expect("pattern table failed to compile")
    }
}

static SHARED: Lazy<MolecularClassifier> = Lazy::new(MolecularClassifier::default);

/// Classify `text` with the shared classifier instance.
pub fn classify(text: &str) -> Vec<Segment> {
    SHARED.classify(text)
}

/// Classify a truncated preview of `text` with the shared instance.
pub fn classify_preview(text: &str, max_chars: usize) -> Vec<Segment> {
    SHARED.classify_preview(text, max_chars)
}
