//! Exclamation and question extraction.
//!
//! Two independent passes per feature: a mark-level pass over the world
//! punctuation inventory (enriched with Unicode names), and a clause-level
//! pass that captures the exclaimed/questioned span up to and including the
//! mark. The clause pass runs on original-case text and is not guaranteed
//! to have the same per-record cardinality as the mark pass.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::{build_summary, PatternMatcher};
use crate::error::Result;
use crate::input::IntoTexts;
use crate::naming;
use crate::patterns;
use crate::summary::ExtractionSummary;

/// Mark summary: base shape plus mark names and clause text.
#[derive(Debug, Clone)]
pub struct MarkSummary {
    /// Base summary, feature name `exclamation_mark` or `question_mark`.
    pub base: ExtractionSummary,
    /// Per-record lowercase Unicode names, parallel to `base.matches`.
    pub mark_names: Vec<Vec<String>>,
    /// Per-record clauses ending in a mark, from original-case text.
    pub clause_text: Vec<Vec<String>>,
    /// Serialized key for `clause_text` (`exclamation_text` / `question_text`).
    clause_key: &'static str,
}

impl Serialize for MarkSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.base.write_fields(&mut map)?;
        map.serialize_entry(&format!("{}_names", self.base.feature), &self.mark_names)?;
        map.serialize_entry(self.clause_key, &self.clause_text)?;
        map.end()
    }
}

fn extract_marks<T: IntoTexts>(
    texts: T,
    mark: &Regex,
    clause: &Regex,
    feature_name: &str,
    clause_key: &'static str,
) -> Result<MarkSummary> {
    let records = texts.into_texts();
    let base = build_summary(&records, &PatternMatcher::new(mark.clone()), feature_name)?;

    let mark_names = base
        .matches
        .iter()
        .map(|matches| naming::names_for(matches))
        .collect::<Result<Vec<_>>>()?;

    let clause_text = records
        .iter()
        .map(|record| {
            clause
                .find_iter(record)
                .map(|m| m.as_str().to_string())
                .collect()
        })
        .collect();

    Ok(MarkSummary {
        base,
        mark_names,
        clause_text,
        clause_key,
    })
}

/// Summarize exclamation marks (world inventory) and the exclamations made.
///
/// # Examples
///
/// ```
/// use lexstats::extract_exclamations;
///
/// let posts = ["Who are you!", "What is this!", "No exclamation here?"];
/// let summary = extract_exclamations(&posts)?;
/// assert_eq!(summary.base.counts, vec![1, 1, 0]);
/// assert_eq!(summary.clause_text[0], vec!["Who are you!"]);
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_exclamations<T: IntoTexts>(texts: T) -> Result<MarkSummary> {
    extract_marks(
        texts,
        &patterns::EXCLAMATION_MARK,
        &patterns::EXCLAMATION,
        "exclamation_mark",
        "exclamation_text",
    )
}

/// Summarize question marks (world inventory) and the questions asked.
pub fn extract_questions<T: IntoTexts>(texts: T) -> Result<MarkSummary> {
    extract_marks(
        texts,
        &patterns::QUESTION_MARK,
        &patterns::QUESTION,
        "question_mark",
        "question_text",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclamations_basic() {
        let posts = ["Who are you!", "What is this!", "No exclamation here?"];
        let summary = extract_exclamations(&posts).unwrap();
        assert_eq!(
            summary.base.matches,
            vec![vec!["!".to_string()], vec!["!".to_string()], vec![]]
        );
        assert_eq!(summary.base.count_freq, vec![(0, 1), (1, 2)]);
        assert_eq!(summary.base.top, vec![("!".to_string(), 2)]);
        assert_eq!(summary.mark_names[0], vec!["exclamation mark"]);
        assert!(summary.mark_names[2].is_empty());
    }

    #[test]
    fn test_exclamations_world_inventory() {
        let posts = ["¡Hola! ¿cómo estás?", "two marks! see them!"];
        let summary = extract_exclamations(&posts).unwrap();
        assert_eq!(
            summary.base.matches[0],
            vec!["¡".to_string(), "!".to_string()]
        );
        assert_eq!(
            summary.mark_names[0],
            vec!["inverted exclamation mark", "exclamation mark"]
        );
        assert_eq!(summary.base.counts, vec![2, 2]);
    }

    #[test]
    fn test_exclamation_clause_text() {
        let summary = extract_exclamations("don't go there! it's dark!").unwrap();
        assert_eq!(
            summary.clause_text[0],
            vec!["don't go there!", " it's dark!"]
        );
    }

    #[test]
    fn test_questions_basic() {
        let posts = ["How are you?", "What is this?", "No question Here!"];
        let summary = extract_questions(&posts).unwrap();
        assert_eq!(summary.base.counts, vec![1, 1, 0]);
        assert_eq!(summary.mark_names[0], vec!["question mark"]);
        assert_eq!(summary.clause_text[0], vec!["How are you?"]);
        assert!(summary.clause_text[2].is_empty());
    }

    #[test]
    fn test_questions_world_inventory() {
        let posts = [
            "Πώς είσαι\u{037E}",
            "كيف حالك\u{061F}",
            "Hola, ¿cómo estás?",
        ];
        let summary = extract_questions(&posts).unwrap();
        assert_eq!(
            summary.base.flat,
            vec!["\u{037E}", "\u{061F}", "¿", "?"]
        );
        assert_eq!(summary.mark_names[0], vec!["greek question mark"]);
        assert_eq!(summary.mark_names[1], vec!["arabic question mark"]);
        assert_eq!(
            summary.mark_names[2],
            vec!["inverted question mark", "question mark"]
        );
        assert_eq!(summary.base.count_freq, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_clause_cardinality_can_differ_from_marks() {
        // Two marks back to back: two mark matches, one clause.
        let summary = extract_questions("really??").unwrap();
        assert_eq!(summary.base.counts, vec![2]);
        assert_eq!(summary.clause_text[0], vec!["really??"]);
    }

    #[test]
    fn test_serialized_keys() {
        let summary = extract_questions("ok?").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["question_marks"][0][0], "?");
        assert_eq!(json["question_mark_names"][0][0], "question mark");
        assert_eq!(json["question_text"][0][0], "ok?");
        assert_eq!(json["overview"]["num_question_marks"], 1);
    }
}
