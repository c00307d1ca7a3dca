//! Lexical feature extraction and summarization for social-media text.
//!
//! Every extractor answers the same questions about a corpus of short
//! posts: which values of a feature occur, where, how often, and at what
//! rate per post. The answers come back as an [`ExtractionSummary`] with a
//! fixed shape — per-record matches, a flattened sequence, per-record
//! counts, a count histogram, a frequency ranking, and an overview — so
//! downstream code can treat hashtags, emoji, or currency symbols
//! uniformly.
//!
//! [`extract`] takes any pattern and feature name; the specialized
//! extractors (hashtags, mentions, currency symbols, emoji, exclamations,
//! questions, URLs, words, intense words) wrap it with curated patterns
//! and feature-specific enrichment such as Unicode names, emoji taxonomy,
//! or URL hosts.
//!
//! ```
//! use lexstats::extract_hashtags;
//!
//! let posts = ["i like #blue", "i like #green and #blue", "i like all colors"];
//! let summary = extract_hashtags(&posts)?;
//! assert_eq!(summary.counts, vec![1, 2, 0]);
//! assert_eq!(summary.top[0], ("#blue".to_string(), 2));
//! # Ok::<(), lexstats::ExtractError>(())
//! ```
//!
//! All extraction is synchronous and stateless. With the `parallel`
//! feature, per-record matching runs on a rayon pool without changing any
//! output; the `tracing` feature adds debug events per summary built.

pub mod engine;
pub mod error;
pub mod extractors;
pub mod input;
pub mod naming;
pub mod patterns;
pub mod summary;

pub use engine::{build_summary, extract, IntoPattern, MatchStrategy, PatternMatcher, PrecomputedMatches};
pub use error::{ExtractError, Result};
pub use extractors::{
    extract_currency, extract_currency_with, extract_emoji, extract_exclamations,
    extract_hashtags, extract_intense_words, extract_intense_words_with, extract_mentions,
    extract_questions, extract_urls, extract_words, CurrencyConfig, CurrencySummary,
    EmojiSummary, IntenseWordMatcher, MarkSummary, UrlSummary, WordMatchMode, WordMatcher,
};
pub use input::IntoTexts;
pub use summary::{ExtractionSummary, Overview};
