// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Class sections.

use serde::{Deserialize, Serialize};

/// One meeting section of a course, as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub section_number: String,
    /// Meeting component, e.g. "LEC", "LAB", "DIS".
    pub component: String,
    pub instructor: String,
    /// Display form of the meeting pattern, e.g. "MWF 9:00-9:50".
    pub meeting: String,
    pub seats_taken: u32,
    pub seats_total: u32,
}

impl Section {
    /// Whether the section still has open seats.
    pub fn is_open(&self) -> bool {
        self.seats_taken < self.seats_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_full_seats() {
        let mut section = Section {
            id: "fall-2026-CS-101-001".to_string(),
            section_number: "001".to_string(),
            component: "LEC".to_string(),
            instructor: "M. Alvarez".to_string(),
            meeting: "MWF 9:00-9:50".to_string(),
            seats_taken: 12,
            seats_total: 30,
        };
        assert!(section.is_open());

        section.seats_taken = 30;
        assert!(!section.is_open());
    }
}
