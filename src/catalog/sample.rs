// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in sample catalog.
//!
//! Used when no catalog service is configured, so the app is explorable out
//! of the box, and by tests that need a deterministic provider. The same
//! data is served for every term.

use crate::catalog::provider::{CatalogError, CatalogProvider, CourseRow, DeptRow};
use crate::models::section::Section;
use crate::models::semester::Semester;

const DEPTS: &[(&str, &str)] = &[
    ("CS", "COMPUTER SCIENCE"),
    ("MATH", "MATHEMATICS"),
    ("PHYS", "PHYSICS"),
    ("ENGL", "ENGLISH"),
    ("HIST", "HISTORY"),
];

// (dept, number, title)
const COURSES: &[(&str, &str, &str)] = &[
    ("CS", "101", "INTRO TO COMPUTER SCIENCE"),
    ("CS", "201", "DATA STRUCTURES"),
    ("CS", "230", "COMPUTER ARCHITECTURE"),
    ("CS", "301", "ALGORITHMS"),
    ("CS", "350", "OPERATING SYSTEMS"),
    ("MATH", "110", "COLLEGE ALGEBRA"),
    ("MATH", "221", "CALCULUS I"),
    ("MATH", "222", "CALCULUS II"),
    ("MATH", "330", "LINEAR ALGEBRA"),
    ("PHYS", "121", "MECHANICS"),
    ("PHYS", "122", "ELECTRICITY AND MAGNETISM"),
    ("PHYS", "210", "MODERN PHYSICS"),
    ("ENGL", "101", "COMPOSITION"),
    ("ENGL", "215", "CREATIVE WRITING"),
    ("HIST", "101", "WORLD HISTORY I"),
    ("HIST", "202", "US HISTORY SINCE 1877"),
];

const INSTRUCTORS: &[&str] = &[
    "M. Alvarez",
    "J. Chen",
    "R. Okafor",
    "S. Petrov",
    "L. Nguyen",
    "D. Whitfield",
];

const MEETINGS: &[&str] = &[
    "MWF 9:00-9:50",
    "MWF 11:00-11:50",
    "TR 10:00-11:15",
    "TR 13:00-14:15",
    "MW 15:30-16:45",
];

pub struct SampleCatalog;

impl SampleCatalog {
    fn sections_for(
        semester: Semester,
        year: u16,
        dept_abbr: &str,
        course_number: &str,
    ) -> Vec<Section> {
        // Derive everything from the course number so repeated lookups agree.
        let seed: usize = course_number
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
            % 7919;

        let section = |number: &str, component: &str, offset: usize| {
            let total = 24 + ((seed + offset) % 4) as u32 * 12;
            Section {
                id: format!("{semester}-{year}-{dept_abbr}-{course_number}-{number}"),
                section_number: number.to_string(),
                component: component.to_string(),
                instructor: INSTRUCTORS[(seed + offset) % INSTRUCTORS.len()].to_string(),
                meeting: MEETINGS[(seed + offset) % MEETINGS.len()].to_string(),
                seats_taken: ((seed * 7 + offset * 13) % (total as usize + 1)) as u32,
                seats_total: total,
            }
        };

        vec![
            section("001", "LEC", 0),
            section("002", "LEC", 1),
            section("003", "DIS", 2),
        ]
    }
}

impl CatalogProvider for SampleCatalog {
    fn list_departments(
        &self,
        _semester: Semester,
        _year: u16,
    ) -> Result<Vec<DeptRow>, CatalogError> {
        Ok(DEPTS
            .iter()
            .map(|(abbr, title)| DeptRow {
                dept_abbr: abbr.to_string(),
                dept_title: title.to_string(),
            })
            .collect())
    }

    fn list_courses(
        &self,
        _semester: Semester,
        _year: u16,
        dept_abbr: &str,
    ) -> Result<Vec<CourseRow>, CatalogError> {
        Ok(COURSES
            .iter()
            .filter(|(dept, _, _)| *dept == dept_abbr)
            .map(|(_, number, title)| CourseRow {
                course_number: number.to_string(),
                course_title: title.to_string(),
            })
            .collect())
    }

    fn list_sections(
        &self,
        semester: Semester,
        year: u16,
        dept_abbr: &str,
        course_number: &str,
    ) -> Result<Vec<Section>, CatalogError> {
        if !COURSES
            .iter()
            .any(|(dept, number, _)| *dept == dept_abbr && *number == course_number)
        {
            return Ok(Vec::new());
        }
        Ok(Self::sections_for(semester, year, dept_abbr, course_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_course_belongs_to_a_listed_department() {
        let catalog = SampleCatalog;
        let depts = catalog.list_departments(Semester::Fall, 2026).unwrap();
        for (dept, _, _) in COURSES {
            assert!(
                depts.iter().any(|row| row.dept_abbr == *dept),
                "course references unknown department {dept}"
            );
        }
    }

    #[test]
    fn test_sections_are_deterministic_and_term_scoped() {
        let catalog = SampleCatalog;
        let a = catalog
            .list_sections(Semester::Fall, 2026, "CS", "101")
            .unwrap();
        let b = catalog
            .list_sections(Semester::Fall, 2026, "CS", "101")
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a[0].id.starts_with("fall-2026-CS-101-"));
        assert!(a.iter().all(|s| s.seats_taken <= s.seats_total));
    }

    #[test]
    fn test_unknown_lookups_return_empty_not_error() {
        let catalog = SampleCatalog;
        assert!(catalog
            .list_courses(Semester::Fall, 2026, "NOPE")
            .unwrap()
            .is_empty());
        assert!(catalog
            .list_sections(Semester::Fall, 2026, "CS", "999")
            .unwrap()
            .is_empty());
    }
}
