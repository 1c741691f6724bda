//! Per-category occurrence summary
//!
//! Aggregates a classified segment sequence into the counts a display
//! surface shows as its "N data types detected" indicator.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{Segment, SegmentCategory};

/// Counts of recognized molecular segments, keyed by category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HighlightSummary {
    /// Occurrences per molecular category; categories with zero
    /// occurrences are absent. Iteration order follows category
    /// priority order.
    pub counts: BTreeMap<SegmentCategory, usize>,
}

impl HighlightSummary {
    /// Summarize a classified segment sequence.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut counts = BTreeMap::new();
        for segment in segments {
            if segment.category.is_molecular() {
                *counts.entry(segment.category).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Whether any molecular data was recognized.
    pub fn has_molecular_data(&self) -> bool {
        !self.counts.is_empty()
    }

    /// Number of distinct categories recognized.
    pub fn category_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of molecular segments recognized.
    pub fn total_matches(&self) -> usize {
        self.counts.values().sum()
    }
}
