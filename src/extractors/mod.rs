//! Specialized extractors built on the generic engine.
//!
//! Each extractor pairs a feature pattern (or a custom matching strategy)
//! with feature-specific enrichment: Unicode name resolution, emoji
//! taxonomy, URL host/TLD derivation, clause or context-window capture.

pub mod currency;
pub mod emoji;
pub mod punctuation;
pub mod social;
pub mod url;
pub mod words;

pub use currency::{extract_currency, extract_currency_with, CurrencyConfig, CurrencySummary};
pub use emoji::{extract_emoji, EmojiSummary};
pub use punctuation::{extract_exclamations, extract_questions, MarkSummary};
pub use social::{extract_hashtags, extract_mentions};
pub use url::{extract_urls, UrlSummary};
pub use words::{
    extract_intense_words, extract_intense_words_with, extract_words, IntenseWordMatcher,
    WordMatchMode, WordMatcher,
};
