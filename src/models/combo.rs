// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dropdown options and the normalizers that build them.
//!
//! Raw catalog rows are converted into a uniform option shape whose ids are
//! composite keys scoped by term and parent selection, so the same department
//! abbreviation in two different terms never collides.

use crate::catalog::provider::{CourseRow, DeptRow};
use crate::models::semester::Semester;
use serde::{Deserialize, Serialize};

/// One selectable entry in an autocomplete dropdown.
///
/// `value` is the semantic code (department abbreviation or course number),
/// `title` the human-readable description, `id` a term-scoped composite key
/// used for equality and render identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOption {
    pub id: String,
    pub label: String,
    pub value: String,
    pub title: String,
}

impl ComboOption {
    /// The empty option: nothing chosen yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True while nothing has been chosen for this axis.
    pub fn is_unset(&self) -> bool {
        self.value.is_empty()
    }
}

/// Build department options from raw rows.
///
/// Ids take the form `"{semester}-{year}-{dept_abbr}"`. Deterministic for
/// identical inputs; an empty row list yields an empty option list.
pub fn dept_options(semester: Semester, year: u16, rows: &[DeptRow]) -> Vec<ComboOption> {
    rows.iter()
        .map(|row| ComboOption {
            id: format!("{semester}-{year}-{}", row.dept_abbr),
            label: row.dept_abbr.clone(),
            value: row.dept_abbr.clone(),
            title: row.dept_title.clone(),
        })
        .collect()
}

/// Build course options from raw rows, scoped under their department.
///
/// Ids take the form `"{semester}-{year}-{dept}-{course_number}"`.
pub fn course_options(
    semester: Semester,
    year: u16,
    dept_abbr: &str,
    rows: &[CourseRow],
) -> Vec<ComboOption> {
    rows.iter()
        .map(|row| ComboOption {
            id: format!("{semester}-{year}-{dept_abbr}-{}", row.course_number),
            label: row.course_number.clone(),
            value: row.course_number.clone(),
            title: row.course_title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(abbr: &str, title: &str) -> DeptRow {
        DeptRow {
            dept_abbr: abbr.to_string(),
            dept_title: title.to_string(),
        }
    }

    #[test]
    fn test_dept_ids_are_term_scoped() {
        let rows = vec![dept("CS", "COMPUTER SCIENCE")];
        let fall = dept_options(Semester::Fall, 2026, &rows);
        let spring = dept_options(Semester::Spring, 2026, &rows);

        assert_eq!(fall[0].id, "fall-2026-CS");
        assert_eq!(spring[0].id, "spring-2026-CS");
        assert_eq!(fall[0].value, "CS");
        assert_eq!(fall[0].title, "COMPUTER SCIENCE");
    }

    #[test]
    fn test_course_ids_include_parent_dept() {
        let rows = vec![CourseRow {
            course_number: "101".to_string(),
            course_title: "INTRO TO COMPUTER SCIENCE".to_string(),
        }];
        let options = course_options(Semester::Fall, 2026, "CS", &rows);

        assert_eq!(options[0].id, "fall-2026-CS-101");
        assert_eq!(options[0].label, "101");
    }

    #[test]
    fn test_normalizers_are_deterministic() {
        let rows = vec![dept("MATH", "MATHEMATICS"), dept("CS", "COMPUTER SCIENCE")];
        let a = dept_options(Semester::Winter, 2025, &rows);
        let b = dept_options(Semester::Winter, 2025, &rows);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_rows_yield_empty_options() {
        assert!(dept_options(Semester::Fall, 2026, &[]).is_empty());
        assert!(course_options(Semester::Fall, 2026, "CS", &[]).is_empty());
    }

    #[test]
    fn test_empty_option_is_unset() {
        assert!(ComboOption::empty().is_unset());
        let chosen = ComboOption {
            id: "fall-2026-CS".to_string(),
            label: "CS".to_string(),
            value: "CS".to_string(),
            title: "COMPUTER SCIENCE".to_string(),
        };
        assert!(!chosen.is_unset());
    }
}
