//! Error taxonomy for extraction calls.
//!
//! There is no retry logic and no partial-result mode: either a full summary
//! is produced or the call fails as a whole. A record with zero matches is a
//! normal outcome (an empty list at that record's position), never an error.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// All the ways an extraction call can fail.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input collection contained no records. Per-post rates are
    /// undefined for an empty corpus, so the engine refuses to produce a
    /// summary rather than returning zeros or NaN. Callers with
    /// possibly-empty corpora must guard before calling.
    #[error("cannot summarize an empty record collection")]
    EmptyInput,

    /// A caller-supplied source pattern failed to compile.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A precomputed match-list collection did not line up one-to-one with
    /// the input records.
    #[error("precomputed matches cover {actual} records, input has {expected}")]
    PrecomputedLengthMismatch {
        /// Number of input records.
        expected: usize,
        /// Number of precomputed match lists supplied.
        actual: usize,
    },

    /// A matched emoji grapheme was absent from the taxonomy table. The
    /// emoji pattern is derived from the table's keys, so this indicates a
    /// pattern/table mismatch — a configuration defect, not bad input.
    #[error("emoji {0:?} matched by the pattern but missing from the taxonomy table")]
    UnknownEmoji(String),

    /// A matched character has no Unicode display name. The mark and
    /// currency inventories only contain named characters, so this also
    /// indicates a pattern/lookup mismatch.
    #[error("no unicode name for character {0:?} (U+{code:04X})", code = *.0 as u32)]
    UnnamedCharacter(char),
}
