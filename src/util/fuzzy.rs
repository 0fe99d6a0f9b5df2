// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Normalized-substring matching for the autocomplete dropdowns.
//!
//! "Fuzzy" here means case- and punctuation-insensitive containment, not
//! edit distance or token scoring: both sides are lowercased and stripped to
//! `[a-z0-9]`, then the candidate must contain the query. No ranking; a
//! filtered list keeps its input order.

use crate::models::combo::ComboOption;

/// Lowercase and strip everything outside `[a-z0-9]`.
fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Does either the option value or its title contain the query?
///
/// The two fields are checked independently, never as a concatenation, so a
/// query spanning both (like "cs101") matches nothing. An empty query
/// matches everything.
pub fn matches(query: &str, value: &str, title: &str) -> bool {
    let needle = normalize(query);
    normalize(value).contains(&needle) || normalize(title).contains(&needle)
}

/// Narrow an option list by a free-text query, preserving order.
pub fn filter_options<'a>(options: &'a [ComboOption], query: &str) -> Vec<&'a ComboOption> {
    if query.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|opt| matches(query, &opt.value, &opt.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, title: &str) -> ComboOption {
        ComboOption {
            id: format!("fall-2026-{value}"),
            label: value.to_string(),
            value: value.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let options = vec![option("CS", "Computer Science"), option("MATH", "Mathematics")];
        let filtered = filter_options(&options, "");
        assert_eq!(filtered.len(), options.len());
    }

    #[test]
    fn test_value_self_match() {
        let options = vec![option("CS", "Computer Science")];
        let filtered = filter_options(&options, "CS");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "CS");
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert!(matches("comp sci", "CS", "Comp. Sci!"));
        assert!(matches("INTRO", "101", "Intro to Computer Science"));
        assert!(!matches("chem", "CS", "Computer Science"));
    }

    #[test]
    fn test_fields_are_not_concatenated() {
        // Neither "CS" nor "101"/"Intro to CS" alone contains "cs101", so a
        // combined query finds nothing.
        let options = vec![option("CS", "Intro"), option("101", "Intro to CS")];
        let filtered = filter_options(&options, "cs101");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_short_query_matches_many_and_keeps_order() {
        let options = vec![
            option("CS", "Computer Science"),
            option("PHYS", "Physics"),
            option("PSYC", "Psychology"),
        ];
        let filtered = filter_options(&options, "s");
        let values: Vec<&str> = filtered.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["CS", "PHYS", "PSYC"]);
    }
}
