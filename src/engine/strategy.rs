//! Matching strategies — how per-record match lists are produced.
//!
//! The engine is generic over a [`MatchStrategy`]: a small capability that
//! yields the ordered matches for one record. Two variants cover the base
//! cases; extractors with custom scanning logic (words, intense words)
//! provide their own implementations in their modules.

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Produces ordered matches for a record.
///
/// Implementations must be stateless with respect to calls: the engine may
/// invoke `matches_for` across records in any order (including in parallel
/// under the `parallel` feature) and reassembles results in record order
/// itself. `Sync` is required for that reason.
pub trait MatchStrategy: Sync {
    /// Return all matches for the record at `index`, left to right.
    ///
    /// A record with no matches returns an empty vector — that is a normal,
    /// successful outcome.
    fn matches_for(&self, index: usize, record: &str) -> Vec<String>;

    /// Validate the strategy against the record count before any matching
    /// starts. The default accepts everything.
    fn check(&self, _num_records: usize) -> Result<()> {
        Ok(())
    }
}

/// Pattern-driven matching: case-fold the record to lowercase and collect
/// all non-overlapping matches, left to right.
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }
}

impl MatchStrategy for PatternMatcher {
    fn matches_for(&self, _index: usize, record: &str) -> Vec<String> {
        let lowered = record.to_lowercase();
        self.regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Precomputed-list matching: the caller already produced one match list
/// per record (used when matches need post-processing a bare pattern cannot
/// express — tuple reconstruction, token normalization).
pub struct PrecomputedMatches {
    lists: Vec<Vec<String>>,
}

impl PrecomputedMatches {
    pub fn new(lists: Vec<Vec<String>>) -> Self {
        Self { lists }
    }
}

impl MatchStrategy for PrecomputedMatches {
    fn matches_for(&self, index: usize, _record: &str) -> Vec<String> {
        self.lists[index].clone()
    }

    fn check(&self, num_records: usize) -> Result<()> {
        if self.lists.len() != num_records {
            return Err(ExtractError::PrecomputedLengthMismatch {
                expected: num_records,
                actual: self.lists.len(),
            });
        }
        Ok(())
    }
}
