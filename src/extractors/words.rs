//! Word and intense-word extraction.
//!
//! Both features need matchers a fixed pattern cannot express well: word
//! extraction is parameterized by an arbitrary target list and a matching
//! mode, and intense-word detection is parameterized by a repetition
//! threshold. Each is a predicate-based scanner implementing
//! [`MatchStrategy`], evaluated left to right over the record.

use crate::engine::{build_summary, MatchStrategy};
use crate::error::Result;
use crate::input::IntoTexts;
use crate::summary::ExtractionSummary;

/// How word targets are matched against tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordMatchMode {
    /// A target matches only as a complete token.
    WholeWord,
    /// A target matches anywhere inside a token; the whole containing
    /// token is the extracted value (`"rain"` matches `"raining"`).
    #[default]
    Substring,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Widen a target occurrence to the maximal run of word characters
/// containing it. A target delimited by non-word characters widens to
/// itself.
fn expand_word_run(text: &str, start: usize, end: usize) -> (usize, usize) {
    let mut left = start;
    while let Some(c) = text[..left].chars().next_back() {
        if !is_word_char(c) {
            break;
        }
        left -= c.len_utf8();
    }
    let mut right = end;
    while let Some(c) = text[right..].chars().next() {
        if !is_word_char(c) {
            break;
        }
        right += c.len_utf8();
    }
    (left, right)
}

/// An occurrence stands alone when no word character directly abuts it on
/// either side.
fn delimited(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

/// Target-list word matcher.
///
/// Records and targets are lowercased, so matched values are always
/// lowercase. Matching scans the raw record for target occurrences, so
/// targets may themselves contain non-word characters (`"e-mail"`,
/// `"new york"`). Overlapping occurrences resolve leftmost-first, ties by
/// target-list order; each matched span is emitted once, in text order.
pub struct WordMatcher {
    targets: Vec<String>,
    mode: WordMatchMode,
}

impl WordMatcher {
    pub fn new<T: IntoTexts>(targets: T, mode: WordMatchMode) -> Self {
        Self {
            targets: targets
                .into_texts()
                .into_iter()
                .map(|t| t.to_lowercase())
                .collect(),
            mode,
        }
    }
}

impl MatchStrategy for WordMatcher {
    fn matches_for(&self, _index: usize, record: &str) -> Vec<String> {
        let lowered = record.to_lowercase();
        // (start, target rank, end, value)
        let mut hits: Vec<(usize, usize, usize, String)> = Vec::new();
        for (rank, target) in self.targets.iter().enumerate() {
            if target.is_empty() {
                continue;
            }
            for (pos, _) in lowered.match_indices(target.as_str()) {
                let end = pos + target.len();
                match self.mode {
                    WordMatchMode::WholeWord => {
                        if delimited(&lowered, pos, end) {
                            hits.push((pos, rank, end, target.clone()));
                        }
                    }
                    WordMatchMode::Substring => {
                        let (left, right) = expand_word_run(&lowered, pos, end);
                        hits.push((left, rank, right, lowered[left..right].to_string()));
                    }
                }
            }
        }
        hits.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut matches = Vec::new();
        let mut scan_end = 0;
        for (start, _, end, value) in hits {
            if start >= scan_end {
                matches.push(value);
                scan_end = end;
            }
        }
        matches
    }
}

/// Summarize occurrences of `targets` in `texts`.
///
/// A single target string is broadcast to a one-element list.
///
/// # Examples
///
/// ```
/// use lexstats::{extract_words, WordMatchMode};
///
/// let posts = ["there is rain, it is raining"];
/// let whole = extract_words(&posts, "rain", WordMatchMode::WholeWord)?;
/// assert_eq!(whole.matches[0], vec!["rain"]);
/// let any = extract_words(&posts, "rain", WordMatchMode::Substring)?;
/// assert_eq!(any.matches[0], vec!["rain", "raining"]);
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_words<T: IntoTexts, W: IntoTexts>(
    texts: T,
    targets: W,
    mode: WordMatchMode,
) -> Result<ExtractionSummary> {
    let records = texts.into_texts();
    let matcher = WordMatcher::new(targets, mode);
    build_summary(&records, &matcher, "word")
}

/// Emphatic-repetition matcher: a token qualifies when some character
/// repeats at least `min_reps` times consecutively; the whole token is the
/// extracted value. Tokens are maximal runs of non-whitespace and keep
/// their original case.
pub struct IntenseWordMatcher {
    min_reps: usize,
}

impl IntenseWordMatcher {
    pub fn new(min_reps: usize) -> Self {
        Self { min_reps }
    }

    fn is_intense(&self, token: &str) -> bool {
        // min_reps of 0 or 1 degenerates to "any character present".
        let needed = self.min_reps.max(1);
        let mut run = 0usize;
        let mut prev: Option<char> = None;
        for c in token.chars() {
            if prev == Some(c) {
                run += 1;
            } else {
                run = 1;
                prev = Some(c);
            }
            if run >= needed {
                return true;
            }
        }
        false
    }
}

impl MatchStrategy for IntenseWordMatcher {
    fn matches_for(&self, _index: usize, record: &str) -> Vec<String> {
        record
            .split_whitespace()
            .filter(|token| self.is_intense(token))
            .map(|token| token.to_string())
            .collect()
    }
}

/// Summarize emphatically-written words ("greaaaat", "soooo") with the
/// default threshold of three consecutive repeats.
pub fn extract_intense_words<T: IntoTexts>(texts: T) -> Result<ExtractionSummary> {
    extract_intense_words_with(texts, 3)
}

/// Summarize emphatic words with an explicit repetition threshold. A run
/// of exactly `min_reps` identical characters is the minimum qualifying
/// case; shorter runs never match.
pub fn extract_intense_words_with<T: IntoTexts>(
    texts: T,
    min_reps: usize,
) -> Result<ExtractionSummary> {
    let records = texts.into_texts();
    let matcher = IntenseWordMatcher::new(min_reps);
    build_summary(&records, &matcher, "intense_word")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_does_not_match_longer_token() {
        let summary =
            extract_words(&["there is rain, it is raining"], "rain", WordMatchMode::WholeWord)
                .unwrap();
        assert_eq!(summary.matches, vec![vec!["rain"]]);
    }

    #[test]
    fn test_substring_yields_whole_token() {
        let summary =
            extract_words(&["there is rain, it is raining"], "rain", WordMatchMode::Substring)
                .unwrap();
        assert_eq!(summary.matches, vec![vec!["rain", "raining"]]);
    }

    #[test]
    fn test_multiple_targets() {
        let posts = [
            "there is rain, it is raining",
            "there is snow and rain",
            "there is no rain, it is snowing",
            "there is nothing",
        ];
        let whole =
            extract_words(&posts, vec!["rain", "snow"], WordMatchMode::WholeWord).unwrap();
        assert_eq!(whole.flat, vec!["rain", "snow", "rain", "rain"]);
        assert_eq!(
            whole.top,
            vec![("rain".to_string(), 3), ("snow".to_string(), 1)]
        );

        let any = extract_words(&posts, vec!["rain", "snow"], WordMatchMode::Substring).unwrap();
        assert_eq!(
            any.matches,
            vec![
                vec!["rain", "raining"],
                vec!["snow", "rain"],
                vec!["rain", "snowing"],
                vec![]
            ]
        );
        assert_eq!(any.counts, vec![2, 2, 2, 0]);
    }

    #[test]
    fn test_hyphenated_target_matches_in_both_modes() {
        let whole =
            extract_words(&["send e-mail now"], "e-mail", WordMatchMode::WholeWord).unwrap();
        assert_eq!(whole.flat, vec!["e-mail"]);
        let any = extract_words(&["send e-mail now"], "e-mail", WordMatchMode::Substring).unwrap();
        assert_eq!(any.flat, vec!["e-mail"]);
    }

    #[test]
    fn test_multi_word_target() {
        let posts = ["moving to New York soon", "new yorkers are loud"];
        let summary = extract_words(&posts, "new york", WordMatchMode::WholeWord).unwrap();
        // "new yorkers" continues with a word character, so it is not a
        // whole-word occurrence.
        assert_eq!(summary.matches, vec![vec!["new york"], vec![]]);
    }

    #[test]
    fn test_hyphenated_target_not_embedded_whole_word() {
        let summary =
            extract_words(&["the e-mails keep coming"], "e-mail", WordMatchMode::WholeWord)
                .unwrap();
        assert!(summary.flat.is_empty());
    }

    #[test]
    fn test_words_lowercase_both_sides() {
        let summary = extract_words(&["RAIN and Sleet"], "Rain", WordMatchMode::WholeWord).unwrap();
        assert_eq!(summary.flat, vec!["rain"]);
    }

    #[test]
    fn test_word_serialized_keys() {
        let summary = extract_words("light rain", "rain", WordMatchMode::WholeWord).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["words"][0][0], "rain");
        assert_eq!(json["overview"]["num_words"], 1);
    }

    #[test]
    fn test_intense_minimum_run_boundary() {
        // Four consecutive 'o' qualifies; two does not.
        let summary = extract_intense_words(&["this is soooo good", "soo good"]).unwrap();
        assert_eq!(summary.matches, vec![vec!["soooo"], vec![]]);
    }

    #[test]
    fn test_intense_exact_threshold_qualifies() {
        let summary = extract_intense_words("weeell ok").unwrap();
        assert_eq!(summary.flat, vec!["weeell"]);
    }

    #[test]
    fn test_intense_custom_threshold() {
        // "big" has no repeated character, so only the doubled 'o' counts.
        let summary = extract_intense_words_with(&["soo big", "so big"], 2).unwrap();
        assert_eq!(summary.matches, vec![vec!["soo"], vec![]]);
    }

    #[test]
    fn test_intense_threshold_two_catches_any_double() {
        let summary = extract_intense_words_with("soo good", 2).unwrap();
        assert_eq!(summary.flat, vec!["soo", "good"]);
    }

    #[test]
    fn test_intense_token_keeps_original_case_and_punctuation() {
        let summary = extract_intense_words("NOOO way!!!").unwrap();
        // Both tokens qualify: "NOOO" has a run of 'O', "way!!!" of '!'.
        assert_eq!(summary.flat, vec!["NOOO", "way!!!"]);
    }

    #[test]
    fn test_intense_run_must_be_consecutive() {
        // Three 'a' but never adjacent.
        let summary = extract_intense_words("banana stand").unwrap();
        assert!(summary.flat.is_empty());
    }

    #[test]
    fn test_intense_multibyte_chars() {
        let summary = extract_intense_words("so ❤️❤️ nice €€€€").unwrap();
        assert_eq!(summary.flat, vec!["€€€€"]);
    }
}
