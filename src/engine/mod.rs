//! Generic extraction engine.
//!
//! [`build_summary`] applies a [`MatchStrategy`] to every record and
//! assembles the canonical [`ExtractionSummary`] shape. [`extract`] is the
//! pattern-driven convenience entry point used directly for features whose
//! pattern needs no post-processing (hashtags, mentions).
//!
//! The engine is fully synchronous and stateless: nothing is retained
//! between calls. Under the `parallel` feature, per-record matching fans
//! out across a rayon pool; results are collected back into record order
//! before any ranking or frequency field is built, so output is identical
//! to a serial run.

mod strategy;

pub use strategy::{MatchStrategy, PatternMatcher, PrecomputedMatches};

use regex::Regex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ExtractError, Result};
use crate::input::IntoTexts;
use crate::summary::ExtractionSummary;

/// Emit a tracing debug event when the `tracing` feature is enabled.
/// Compiles to nothing otherwise.
macro_rules! trace_summary {
    ($($args:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($args)*);
    };
}

/// A match pattern supplied either pre-compiled or as source text.
///
/// Source patterns are compiled once per call and reused across records; a
/// compile failure surfaces as [`ExtractError::Pattern`].
pub trait IntoPattern {
    fn into_pattern(self) -> Result<Regex>;
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Regex> {
        Ok(self)
    }
}

impl IntoPattern for &Regex {
    fn into_pattern(self) -> Result<Regex> {
        // Regex clones share the compiled program; this is cheap.
        Ok(self.clone())
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Regex> {
        Regex::new(self).map_err(ExtractError::from)
    }
}

impl IntoPattern for &String {
    fn into_pattern(self) -> Result<Regex> {
        Regex::new(self).map_err(ExtractError::from)
    }
}

/// Build a summary of arbitrary pattern matches in `texts`.
///
/// This is the generic entry point behind every specialized extractor; use
/// it directly with your own pattern for feature classes the crate doesn't
/// ship. Records are lowercased before matching, so matched values are
/// always lowercase.
///
/// `feature_name` is the singular name of the extracted element
/// (`"hashtag"`, `"mention"`, ...); it determines every serialized key.
///
/// # Errors
///
/// Fails on an empty record collection or a malformed source pattern.
///
/// # Examples
///
/// ```
/// use lexstats::extract;
///
/// let summary = extract(&["some!! text", "more text"], "!{2}", "double_bang")?;
/// assert_eq!(summary.counts, vec![1, 0]);
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract<T: IntoTexts, P: IntoPattern>(
    texts: T,
    pattern: P,
    feature_name: &str,
) -> Result<ExtractionSummary> {
    let records = texts.into_texts();
    let matcher = PatternMatcher::new(pattern.into_pattern()?);
    build_summary(&records, &matcher, feature_name)
}

/// Apply `strategy` to every record and assemble the summary.
///
/// Record order and intra-record match order are preserved exactly;
/// ranking fields depend on global first-occurrence tie-breaking, so this
/// ordering is a hard contract.
///
/// # Errors
///
/// Fails with [`ExtractError::EmptyInput`] when `records` is empty (the
/// per-post rate would be undefined), or with whatever the strategy's
/// [`MatchStrategy::check`] reports.
pub fn build_summary<S: MatchStrategy>(
    records: &[String],
    strategy: &S,
    feature_name: &str,
) -> Result<ExtractionSummary> {
    if records.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    strategy.check(records.len())?;

    #[cfg(not(feature = "parallel"))]
    let matches: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| strategy.matches_for(index, record))
        .collect();

    // Ordered collect puts partial results back into record order.
    #[cfg(feature = "parallel")]
    let matches: Vec<Vec<String>> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| strategy.matches_for(index, record))
        .collect();

    let summary = ExtractionSummary::from_matches(feature_name, matches);
    trace_summary!(
        feature = feature_name,
        num_posts = summary.overview.num_posts,
        num_matches = summary.overview.num_matches,
        "summary built"
    );
    Ok(summary)
}
