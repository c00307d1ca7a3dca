//! Pre-built match patterns, one per feature class.
//!
//! These are data, not logic: the extraction engine consumes them but does
//! not derive them. All patterns are compiled once at first use via
//! `LazyLock` and shared by every caller; compilation of a static pattern
//! cannot fail for a well-formed build, so a panic here means the constant
//! itself is broken.
//!
//! The emoji pattern lives in [`emoji`] because it is derived from the
//! taxonomy table's keys (keeping pattern and table consistent by
//! construction).

pub mod emoji;

use std::sync::LazyLock;

use regex::Regex;

/// `#tag` and fullwidth `#tag` — letters, digits, underscore.
pub static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[##][\p{L}\p{N}_]+").unwrap());

/// `@user` and fullwidth `@user`.
pub static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@@][\p{L}\p{N}_]+").unwrap());

/// Raw currency-symbol class, reused when composing the context-window
/// pattern for `surrounding_text`.
pub const CURRENCY_RAW: &str = r"\p{Sc}";

/// A single character in the Unicode "currency symbol" class.
pub static CURRENCY: LazyLock<Regex> = LazyLock::new(|| Regex::new(CURRENCY_RAW).unwrap());

/// World inventory of exclamation marks: ASCII, inverted (Spanish),
/// Armenian, NKo, doubled/mixed, dingbat, vertical-form, small-form, and
/// fullwidth variants. Every character here has a Unicode name.
pub const EXCLAMATION_MARK_CLASS: &str = "!\u{00A1}\u{055C}\u{07F9}\u{203C}\u{2049}\u{2755}\u{2757}\u{FE15}\u{FE57}\u{FF01}";

/// World inventory of question marks: ASCII, inverted (Spanish), Greek,
/// Arabic, Armenian, doubled/mixed, dingbat, vertical-form, small-form,
/// and fullwidth variants.
pub const QUESTION_MARK_CLASS: &str = "?\u{00BF}\u{037E}\u{055E}\u{061F}\u{2047}\u{2048}\u{2753}\u{2754}\u{FE16}\u{FE56}\u{FF1F}";

/// One exclamation mark from the world inventory.
pub static EXCLAMATION_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{EXCLAMATION_MARK_CLASS}]")).unwrap());

/// One question mark from the world inventory.
pub static QUESTION_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{QUESTION_MARK_CLASS}]")).unwrap());

/// Clause-level pass: the span preceding an exclamation mark, up to and
/// including the mark run. Applied to original-case text.
pub static EXCLAMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "[^{EXCLAMATION_MARK_CLASS}\n]+[{EXCLAMATION_MARK_CLASS}]+"
    ))
    .unwrap()
});

/// Clause-level pass: the span preceding a question mark, up to and
/// including the mark run.
pub static QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "[^{QUESTION_MARK_CLASS}\n]+[{QUESTION_MARK_CLASS}]+"
    ))
    .unwrap()
});

/// URL-shaped tokens. This is a shape match, not validation: explicit
/// schemes, `www.` prefixes, and bare `domain.tld` forms all count.
pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"]+|\b[a-z0-9][a-z0-9-]*(?:\.[a-z0-9][a-z0-9-]*)+(?:/[^\s<>"]*)?"#,
    )
    .unwrap()
});

/// Source for the currency context-window pattern: up to `left` characters,
/// a currency symbol, then up to `right` characters. Windows shrink at
/// record boundaries (no padding).
pub fn currency_context_pattern(left: usize, right: usize) -> String {
    format!(".{{0,{left}}}{CURRENCY_RAW}.{{0,{right}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findall(regex: &Regex, text: &str) -> Vec<String> {
        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn test_hashtag_shapes() {
        assert_eq!(findall(&HASHTAG, "i like #blue and #sky_2"), vec!["#blue", "#sky_2"]);
        assert!(findall(&HASHTAG, "no tags # here").is_empty());
    }

    #[test]
    fn test_mention_shapes() {
        assert_eq!(findall(&MENTION, "hi @john and @jenny"), vec!["@john", "@jenny"]);
    }

    #[test]
    fn test_currency_class_is_unicode_wide() {
        assert_eq!(findall(&CURRENCY, "today ₿1 is around $4k, £2, €3, ¥4"),
                   vec!["₿", "$", "£", "€", "¥"]);
    }

    #[test]
    fn test_exclamation_mark_inventory() {
        assert_eq!(findall(&EXCLAMATION_MARK, "wow! ¡hola! done‼"),
                   vec!["!", "¡", "!", "‼"]);
    }

    #[test]
    fn test_question_mark_inventory() {
        // Greek (U+037E), Arabic, inverted, ASCII, fullwidth.
        let text = "είσαι\u{037E} حالك\u{061F} ¿cómo? \u{FF1F}";
        assert_eq!(findall(&QUESTION_MARK, text),
                   vec!["\u{037E}", "\u{061F}", "¿", "?", "\u{FF1F}"]);
    }

    #[test]
    fn test_clause_pattern_includes_mark() {
        assert_eq!(findall(&QUESTION, "How are you? Fine."), vec!["How are you?"]);
        assert_eq!(findall(&EXCLAMATION, "Stop! Now!"), vec!["Stop!", " Now!"]);
    }

    #[test]
    fn test_url_shapes() {
        assert_eq!(
            findall(&URL, "see http://a.com www.b.com and c.org/x"),
            vec!["http://a.com", "www.b.com", "c.org/x"]
        );
    }

    #[test]
    fn test_url_scheme_case_insensitive() {
        assert_eq!(findall(&URL, "HTTPS://Example.COM/path"),
                   vec!["HTTPS://Example.COM/path"]);
    }

    #[test]
    fn test_currency_context_pattern_windows() {
        let regex = Regex::new(&currency_context_pattern(0, 3)).unwrap();
        assert_eq!(findall(&regex, "today ₿1 is around $4k"), vec!["₿1 i", "$4k"]);
    }
}
