//! Writer-string normalization: noise removal, boilerplate stripping, and
//! splitting of multi-writer credits into individual canonical names.

use std::collections::HashSet;

use crate::types::WriterName;

pub use crate::constants::cleaning::{DEFAULT_DELIMITER, REPLACE_PAIRS};

/// Replacement text for one cleaning rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the pattern with this literal text.
    Literal(&'static str),
    /// Replace the pattern with the configured delimiter character.
    Delimiter,
}

/// Apply the fixed replacement-rule list to one credit string.
///
/// Rules run in [`REPLACE_PAIRS`] order, each replacing every occurrence of
/// its pattern. The `Delimiter` rule substitutes `delimiter`, so a credit like
/// `"Jane and Bo"` becomes `"Jane & Bo"` under the default delimiter.
pub fn apply_replacements<T: AsRef<str>>(text: T, delimiter: char) -> String {
    let delim = delimiter.to_string();
    let mut cleaned = text.as_ref().to_string();
    for (pattern, replacement) in &REPLACE_PAIRS {
        let with = match replacement {
            Replacement::Literal(literal) => literal,
            Replacement::Delimiter => delim.as_str(),
        };
        cleaned = cleaned.replace(pattern, with);
    }
    cleaned
}

/// Collect the distinct writer names referenced across a collection of raw
/// credit strings, using the default `&` delimiter.
pub fn clean_writers<I, T>(writers: I) -> HashSet<WriterName>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    clean_writers_with_delimiter(writers, DEFAULT_DELIMITER)
}

/// Collect the distinct writer names referenced across a collection of raw
/// credit strings.
///
/// Every string is cleaned via [`apply_replacements`], split on `delimiter`,
/// and each part is trimmed and added to the result set. A part that trims to
/// the empty string (e.g. from a trailing delimiter) is still added; callers
/// that want it gone must filter it themselves. A string without the delimiter
/// degrades to a single-element split.
pub fn clean_writers_with_delimiter<I, T>(writers: I, delimiter: char) -> HashSet<WriterName>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut all_writers = HashSet::new();
    for writer in writers {
        let cleaned = apply_replacements(writer.as_ref(), delimiter);
        for part in cleaned.split(delimiter) {
            all_writers.insert(part.trim().to_string());
        }
    }
    all_writers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<WriterName> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn apply_replacements_runs_rules_in_order() {
        let raw = "Story by Jane\u{a0}and Bo";
        assert_eq!(apply_replacements(raw, '&'), "Jane & Bo");
    }

    #[test]
    fn apply_replacements_substitutes_custom_delimiter() {
        assert_eq!(apply_replacements("Jane and Bo", ';'), "Jane ; Bo");
    }

    #[test]
    fn apply_replacements_strips_hair_space_colon() {
        assert_eq!(apply_replacements("Jane\u{200a}: Bo", '&'), "Jane  Bo");
    }

    #[test]
    fn apply_replacements_removes_boilerplate_anywhere() {
        // The prefix rule is a global substring replacement, not anchored.
        assert_eq!(apply_replacements("Teleplay, Story by Jane", '&'), "Teleplay, Jane");
    }

    #[test]
    fn clean_writers_splits_conjunctions_and_boilerplate() {
        let result = clean_writers(["Story by Jane and Bo"]);
        assert_eq!(result, set(&["Jane", "Bo"]));
    }

    #[test]
    fn clean_writers_is_idempotent_over_its_own_output() {
        let first = clean_writers(["Jane & Bo"]);
        let second = clean_writers(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn clean_writers_keeps_stripped_empty_tokens() {
        // Trailing delimiter yields an empty part; it stays in the set.
        let result = clean_writers(["X&Y&"]);
        assert_eq!(result, set(&["X", "Y", ""]));
    }

    #[test]
    fn clean_writers_without_delimiter_returns_singleton() {
        let result = clean_writers(["  Jane Doe  "]);
        assert_eq!(result, set(&["Jane Doe"]));
    }

    #[test]
    fn clean_writers_dedupes_across_strings() {
        let result = clean_writers(["Jane & Bo", "Jane"]);
        assert_eq!(result, set(&["Jane", "Bo"]));
    }

    #[test]
    fn clean_writers_respects_custom_delimiter() {
        let result = clean_writers_with_delimiter(["Jane; Bo"], ';');
        assert_eq!(result, set(&["Jane", "Bo"]));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let result = clean_writers(Vec::<String>::new());
        assert!(result.is_empty());
    }
}
