//! The canonical extraction summary shape.
//!
//! Every extractor produces an [`ExtractionSummary`] (possibly wrapped with
//! feature-specific enrichment fields). The summary is immutable after
//! construction and has no lifecycle beyond the call that produced it.
//!
//! # Field naming
//!
//! Serialized keys are derived from the feature name; the plural is always
//! formed by appending `"s"` — no linguistic pluralization — so consumers can
//! discover fields mechanically. For a feature named `hashtag`:
//!
//! | Key | Content |
//! |-----|---------|
//! | `hashtags` | per-record match lists |
//! | `hashtags_flat` | all matches, record order then intra-record order |
//! | `hashtag_counts` | matches per record |
//! | `hashtag_freq` | `(count_value, num_records)` pairs, ascending |
//! | `top_hashtags` | `(value, frequency)` pairs, descending |
//! | `overview` | corpus-level aggregate |

use std::cmp::Reverse;

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ─── Overview ───────────────────────────────────────────────────────────────

/// Corpus-level aggregate statistics for one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    /// Number of input records.
    pub num_posts: usize,
    /// Total number of matches across all records.
    pub num_matches: usize,
    /// Matches per record — a ratio, not an integer.
    pub per_post: f64,
    /// Number of distinct matched values.
    pub unique_matches: usize,
}

/// Serialization shim: the overview's keys embed the feature name
/// (`num_hashtags`, `hashtags_per_post`, ...), which the bare [`Overview`]
/// doesn't know.
struct OverviewWithName<'a> {
    name: &'a str,
    overview: &'a Overview,
}

impl Serialize for OverviewWithName<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("num_posts", &self.overview.num_posts)?;
        map.serialize_entry(&format!("num_{}s", self.name), &self.overview.num_matches)?;
        map.serialize_entry(&format!("{}s_per_post", self.name), &self.overview.per_post)?;
        map.serialize_entry(&format!("unique_{}s", self.name), &self.overview.unique_matches)?;
        map.end()
    }
}

// ─── Summary ────────────────────────────────────────────────────────────────

/// Statistical summary of one feature across a record collection.
///
/// Constructed by [`crate::engine::build_summary`]; see the module docs for
/// the serialized key layout.
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    /// Singular feature name (`"hashtag"`, `"currency_symbol"`, ...).
    pub feature: String,
    /// One match list per input record, left-to-right match order.
    pub matches: Vec<Vec<String>>,
    /// Concatenation of `matches` in record order, then intra-record order.
    pub flat: Vec<String>,
    /// `counts[i] == matches[i].len()`.
    pub counts: Vec<usize>,
    /// `(count_value, num_records_with_that_count)`, ascending by count.
    pub count_freq: Vec<(usize, usize)>,
    /// `(value, frequency)`, descending by frequency; ties broken by the
    /// value's first occurrence in `flat`.
    pub top: Vec<(String, usize)>,
    /// Corpus-level aggregate.
    pub overview: Overview,
}

impl ExtractionSummary {
    /// Assemble the full summary shape from per-record match lists.
    ///
    /// The caller guarantees `matches` is non-empty; the engine enforces
    /// this before construction (an empty corpus is an error, not a zeroed
    /// summary).
    pub(crate) fn from_matches(feature: &str, matches: Vec<Vec<String>>) -> Self {
        let counts: Vec<usize> = matches.iter().map(Vec::len).collect();
        let flat: Vec<String> = matches.iter().flatten().cloned().collect();
        let count_freq = count_frequencies(&counts);
        let top = rank_by_frequency(&flat);
        let unique_matches = top.len();
        let overview = Overview {
            num_posts: matches.len(),
            num_matches: flat.len(),
            per_post: flat.len() as f64 / matches.len() as f64,
            unique_matches,
        };
        Self {
            feature: feature.to_string(),
            matches,
            flat,
            counts,
            count_freq,
            top,
            overview,
        }
    }

    /// Write the base fields into an in-progress serde map. Enriched
    /// summaries call this before appending their own keys.
    pub(crate) fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        let name = &self.feature;
        map.serialize_entry(&format!("{name}s"), &self.matches)?;
        map.serialize_entry(&format!("{name}s_flat"), &self.flat)?;
        map.serialize_entry(&format!("{name}_counts"), &self.counts)?;
        map.serialize_entry(&format!("{name}_freq"), &self.count_freq)?;
        map.serialize_entry(&format!("top_{name}s"), &self.top)?;
        map.serialize_entry(
            "overview",
            &OverviewWithName {
                name,
                overview: &self.overview,
            },
        )?;
        Ok(())
    }
}

impl Serialize for ExtractionSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.write_fields(&mut map)?;
        map.end()
    }
}

// ─── Ranking helpers ────────────────────────────────────────────────────────

/// Rank distinct values by descending frequency.
///
/// Ties are broken by first-occurrence position: each value is paired with
/// the index of its first appearance and the sort key is
/// `(Reverse(count), first_index)`, so the result does not depend on sort
/// stability.
pub(crate) fn rank_by_frequency<S: AsRef<str>>(values: &[S]) -> Vec<(String, usize)> {
    // value -> (count, first occurrence index)
    let mut tally: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (idx, value) in values.iter().enumerate() {
        let entry = tally.entry(value.as_ref()).or_insert((0, idx));
        entry.0 += 1;
    }
    let mut ranked: Vec<(&str, (usize, usize))> = tally.into_iter().collect();
    ranked.sort_by_key(|&(_, (count, first))| (Reverse(count), first));
    ranked
        .into_iter()
        .map(|(value, (count, _))| (value.to_string(), count))
        .collect()
}

/// Group a list of per-record counts into `(count_value, num_records)`
/// pairs, sorted ascending by count value.
pub(crate) fn count_frequencies(counts: &[usize]) -> Vec<(usize, usize)> {
    let mut tally: FxHashMap<usize, usize> = FxHashMap::default();
    for &count in counts {
        *tally.entry(count).or_insert(0) += 1;
    }
    let mut pairs: Vec<(usize, usize)> = tally.into_iter().collect();
    pairs.sort_by_key(|&(count_value, _)| count_value);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_descending_by_frequency() {
        let ranked = rank_by_frequency(&owned(&["a", "b", "a", "c", "a", "b"]));
        assert_eq!(
            ranked,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_rank_ties_broken_by_first_occurrence() {
        // "y" and "x" both appear twice; "y" appeared first.
        let ranked = rank_by_frequency(&owned(&["y", "x", "y", "x", "z"]));
        assert_eq!(
            ranked,
            vec![
                ("y".to_string(), 2),
                ("x".to_string(), 2),
                ("z".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_rank_frequencies_sum_to_flat_len() {
        let values = owned(&["a", "b", "a", "a", "c"]);
        let ranked = rank_by_frequency(&values);
        let total: usize = ranked.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn test_count_frequencies_sorted_ascending() {
        let freq = count_frequencies(&[2, 0, 2, 5, 0, 0]);
        assert_eq!(freq, vec![(0, 3), (2, 2), (5, 1)]);
    }

    #[test]
    fn test_count_frequencies_cover_all_records() {
        let counts = [1, 1, 4, 0];
        let freq = count_frequencies(&counts);
        let total: usize = freq.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, counts.len());
    }

    #[test]
    fn test_from_matches_invariants() {
        let summary = ExtractionSummary::from_matches(
            "hashtag",
            vec![owned(&["#a"]), owned(&["#b", "#a"]), vec![]],
        );
        assert_eq!(summary.matches.len(), 3);
        assert_eq!(summary.counts, vec![1, 2, 0]);
        assert_eq!(summary.flat, owned(&["#a", "#b", "#a"]));
        assert_eq!(summary.count_freq, vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(summary.overview.num_posts, 3);
        assert_eq!(summary.overview.num_matches, 3);
        assert_eq!(summary.overview.unique_matches, 2);
        assert!((summary.overview.per_post - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_key_layout() {
        let summary =
            ExtractionSummary::from_matches("hashtag", vec![owned(&["#blue"]), vec![]]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["hashtags"][0][0], "#blue");
        assert_eq!(json["hashtags_flat"][0], "#blue");
        assert_eq!(json["hashtag_counts"][0], 1);
        assert_eq!(json["hashtag_freq"][0][0], 0);
        assert_eq!(json["top_hashtags"][0][0], "#blue");
        assert_eq!(json["overview"]["num_posts"], 2);
        assert_eq!(json["overview"]["num_hashtags"], 1);
        assert_eq!(json["overview"]["unique_hashtags"], 1);
        assert_eq!(json["overview"]["hashtags_per_post"], 0.5);
    }
}
