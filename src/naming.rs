//! Unicode display-name resolution.
//!
//! Wraps the `unicode_names2` static name table (a process-wide, read-only
//! resource) and normalizes names to lowercase, the form the summaries
//! expose ("dollar sign", "inverted question mark", ...).

use crate::error::{ExtractError, Result};

/// The lowercase Unicode name of `c`.
///
/// # Errors
///
/// [`ExtractError::UnnamedCharacter`] when the character has no name. The
/// shipped mark and currency inventories only contain named characters, so
/// a miss indicates a pattern/lookup mismatch and fails the whole call.
pub fn char_name(c: char) -> Result<String> {
    unicode_names2::name(c)
        .map(|name| name.to_string().to_lowercase())
        .ok_or(ExtractError::UnnamedCharacter(c))
}

/// Resolve names for every character of every matched value in a record's
/// match list. An empty match list yields an empty name list without any
/// lookup being attempted.
pub fn names_for(matches: &[String]) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(matches.len());
    for value in matches {
        for c in value.chars() {
            names.push(char_name(c)?);
        }
    }
    Ok(names)
}
