// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display formatting for catalog text.

/// Title-case a catalog string.
///
/// Catalog rows come back in shouty uppercase ("INTRO TO COMPUTER SCIENCE");
/// this turns them into something readable. Roman-numeral tokens keep their
/// case so "CALCULUS II" does not become "Calculus Ii".
pub fn format_title(raw: &str) -> String {
    raw.split_whitespace()
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    if is_roman_numeral(word) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty() && word.len() <= 4 && word.chars().all(|c| matches!(c, 'I' | 'V' | 'X'))
}
