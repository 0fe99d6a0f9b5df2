// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Academic terms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A semester within an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// All semesters, in calendar order.
    pub const ALL: [Semester; 4] = [
        Semester::Winter,
        Semester::Spring,
        Semester::Summer,
        Semester::Fall,
    ];

    /// Lowercase code used in composite option ids and service queries.
    pub fn code(&self) -> &'static str {
        match self {
            Semester::Winter => "winter",
            Semester::Spring => "spring",
            Semester::Summer => "summer",
            Semester::Fall => "fall",
        }
    }

    /// Human-readable name for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Semester::Winter => "Winter",
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
            Semester::Fall => "Fall",
        }
    }
}

impl Default for Semester {
    fn default() -> Self {
        Semester::Fall
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde_form() {
        for semester in Semester::ALL {
            let json = serde_json::to_string(&semester).unwrap();
            assert_eq!(json, format!("\"{}\"", semester.code()));
        }
    }

    #[test]
    fn test_display_is_lowercase_code() {
        assert_eq!(Semester::Fall.to_string(), "fall");
        assert_eq!(Semester::Winter.to_string(), "winter");
    }
}
