//! Error types for the classification engine
//!
//! Classification itself is total and infallible; the only failure
//! mode is compiling the pattern table.

use thiserror::Error;

/// Errors raised while building a [`crate::MolecularClassifier`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A category pattern in the table failed to compile.
    #[error("failed to compile {category} pattern: {source}")]
    PatternCompile {
        /// Stable name of the category whose pattern was rejected
        category: &'static str,
        #[source]
        source: regex::Error,
    },
}
