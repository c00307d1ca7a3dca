//! Hashtag and mention extraction — plain engine passes, no enrichment.

use crate::engine::extract;
use crate::error::Result;
use crate::input::IntoTexts;
use crate::patterns;
use crate::summary::ExtractionSummary;

/// Summarize hashtags in `texts`.
///
/// # Examples
///
/// ```
/// use lexstats::extract_hashtags;
///
/// let posts = ["i like #blue", "i like #green and #blue", "i like all"];
/// let summary = extract_hashtags(&posts)?;
/// assert_eq!(summary.matches[1], vec!["#green", "#blue"]);
/// assert_eq!(summary.top[0], ("#blue".to_string(), 2));
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_hashtags<T: IntoTexts>(texts: T) -> Result<ExtractionSummary> {
    extract(texts, &*patterns::HASHTAG, "hashtag")
}

/// Summarize `@user` mentions in `texts`.
pub fn extract_mentions<T: IntoTexts>(texts: T) -> Result<ExtractionSummary> {
    extract(texts, &*patterns::MENTION, "mention")
}
