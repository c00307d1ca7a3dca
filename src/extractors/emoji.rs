//! Emoji extraction with taxonomy enrichment.
//!
//! The base summary is keyed on raw graphemes. Enrichment resolves each
//! grapheme's {name, group, sub_group} from the static taxonomy and builds
//! three additional frequency rankings — names, groups, sub-groups — each
//! counted over its own flattened sequence with the same descending /
//! first-occurrence rules as the base `top` field.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::{build_summary, PatternMatcher};
use crate::error::Result;
use crate::input::IntoTexts;
use crate::patterns::emoji as taxonomy;
use crate::summary::{rank_by_frequency, ExtractionSummary};

/// Emoji summary: base shape plus taxonomy-derived fields.
#[derive(Debug, Clone)]
pub struct EmojiSummary {
    /// Base summary, feature name `emoji`, keyed on raw graphemes.
    pub base: ExtractionSummary,
    /// Per-record CLDR names, parallel to `base.matches`.
    pub names: Vec<Vec<String>>,
    /// Flattened names, record order then intra-record order.
    pub names_flat: Vec<String>,
    /// Names ranked by descending frequency.
    pub top_names: Vec<(String, usize)>,
    /// Groups ranked by descending frequency.
    pub top_groups: Vec<(String, usize)>,
    /// Sub-groups ranked by descending frequency.
    pub top_sub_groups: Vec<(String, usize)>,
}

impl Serialize for EmojiSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.base.write_fields(&mut map)?;
        map.serialize_entry("emoji_names", &self.names)?;
        map.serialize_entry("emoji_names_flat", &self.names_flat)?;
        map.serialize_entry("top_emoji_names", &self.top_names)?;
        map.serialize_entry("top_emoji_groups", &self.top_groups)?;
        map.serialize_entry("top_emoji_sub_groups", &self.top_sub_groups)?;
        map.end()
    }
}

/// Summarize emoji in `texts`.
///
/// # Errors
///
/// Besides the engine's failures, a matched grapheme missing from the
/// taxonomy table aborts the whole call — the pattern is derived from the
/// table, so a miss is a configuration defect.
///
/// # Examples
///
/// ```
/// use lexstats::extract_emoji;
///
/// let posts = ["I am grinning 😀", "A grinning cat 😺", "hello! 😀😀😀 💛💛", "Just text"];
/// let summary = extract_emoji(&posts)?;
/// assert_eq!(summary.base.counts, vec![1, 1, 5, 0]);
/// assert_eq!(summary.top_names[0], ("grinning face".to_string(), 4));
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_emoji<T: IntoTexts>(texts: T) -> Result<EmojiSummary> {
    let records = texts.into_texts();
    let matcher = PatternMatcher::new(taxonomy::EMOJI.clone());
    let base = build_summary(&records, &matcher, "emoji")?;

    let names = base
        .matches
        .iter()
        .map(|matches| {
            matches
                .iter()
                .map(|glyph| Ok(taxonomy::lookup(glyph)?.name.to_string()))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let names_flat: Vec<String> = names.iter().flatten().cloned().collect();

    // Each ranking is counted over its own flattened derived sequence, not
    // re-derived from the base ranking.
    let mut groups_flat = Vec::with_capacity(base.flat.len());
    let mut sub_groups_flat = Vec::with_capacity(base.flat.len());
    for glyph in &base.flat {
        let entry = taxonomy::lookup(glyph)?;
        groups_flat.push(entry.group.to_string());
        sub_groups_flat.push(entry.sub_group.to_string());
    }

    let top_names = rank_by_frequency(&names_flat);
    let top_groups = rank_by_frequency(&groups_flat);
    let top_sub_groups = rank_by_frequency(&sub_groups_flat);

    Ok(EmojiSummary {
        base,
        names,
        names_flat,
        top_names,
        top_groups,
        top_sub_groups,
    })
}
