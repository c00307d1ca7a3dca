//! Currency-symbol extraction with name enrichment and context windows.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::{build_summary, PatternMatcher};
use crate::error::Result;
use crate::input::IntoTexts;
use crate::naming;
use crate::patterns;
use crate::summary::ExtractionSummary;

/// Context-window sizes for `surrounding_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConfig {
    /// Characters captured to the left of the symbol.
    pub left_chars: usize,
    /// Characters captured to the right of the symbol.
    pub right_chars: usize,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            left_chars: 20,
            right_chars: 20,
        }
    }
}

/// Currency summary: the base shape plus symbol names and the original-case
/// text surrounding each symbol.
#[derive(Debug, Clone)]
pub struct CurrencySummary {
    /// Base summary, feature name `currency_symbol`.
    pub base: ExtractionSummary,
    /// Per-record lowercase Unicode names, parallel to `base.matches`.
    pub symbol_names: Vec<Vec<String>>,
    /// Per-record context windows, captured from original-case text.
    /// Windows shrink near record boundaries — no padding.
    pub surrounding_text: Vec<Vec<String>>,
}

impl Serialize for CurrencySummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.base.write_fields(&mut map)?;
        map.serialize_entry("currency_symbol_names", &self.symbol_names)?;
        map.serialize_entry("surrounding_text", &self.surrounding_text)?;
        map.end()
    }
}

/// Summarize currency symbols with the default 20/20 context window.
///
/// # Examples
///
/// ```
/// use lexstats::extract_currency;
///
/// let posts = ["today ₿1 is around $4k", "and ₿ in £ & €?", "no idea"];
/// let summary = extract_currency(&posts)?;
/// assert_eq!(summary.base.counts, vec![2, 3, 0]);
/// assert_eq!(summary.symbol_names[0], vec!["bitcoin sign", "dollar sign"]);
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_currency<T: IntoTexts>(texts: T) -> Result<CurrencySummary> {
    extract_currency_with(texts, CurrencyConfig::default())
}

/// Summarize currency symbols with explicit context-window sizes.
pub fn extract_currency_with<T: IntoTexts>(
    texts: T,
    config: CurrencyConfig,
) -> Result<CurrencySummary> {
    let records = texts.into_texts();
    let matcher = PatternMatcher::new(patterns::CURRENCY.clone());
    let base = build_summary(&records, &matcher, "currency_symbol")?;

    let symbol_names = base
        .matches
        .iter()
        .map(|matches| naming::names_for(matches))
        .collect::<Result<Vec<_>>>()?;

    // The window pattern is applied to the original-case records, separate
    // from the lowercased base pass.
    let window = Regex::new(&patterns::currency_context_pattern(
        config.left_chars,
        config.right_chars,
    ))?;
    let surrounding_text = records
        .iter()
        .map(|record| {
            window
                .find_iter(record)
                .map(|m| m.as_str().to_string())
                .collect()
        })
        .collect();

    Ok(CurrencySummary {
        base,
        symbol_names,
        surrounding_text,
    })
}
