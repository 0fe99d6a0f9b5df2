// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The catalog lookup service interface.
//!
//! The app only ever sees this trait; whether rows come from an HTTP service
//! or the built-in sample data is decided once at startup. Implementations
//! may block: they are called from background worker threads, never from the
//! UI thread.

use crate::models::section::Section;
use crate::models::semester::Semester;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw department row as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptRow {
    pub dept_abbr: String,
    pub dept_title: String,
}

/// Raw course row as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    pub course_number: String,
    pub course_title: String,
}

/// Errors from a catalog lookup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog service returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },
}

/// Enumerate departments, courses, and sections for a term.
pub trait CatalogProvider: Send + Sync {
    fn list_departments(&self, semester: Semester, year: u16)
        -> Result<Vec<DeptRow>, CatalogError>;

    fn list_courses(
        &self,
        semester: Semester,
        year: u16,
        dept_abbr: &str,
    ) -> Result<Vec<CourseRow>, CatalogError>;

    fn list_sections(
        &self,
        semester: Semester,
        year: u16,
        dept_abbr: &str,
        course_number: &str,
    ) -> Result<Vec<Section>, CatalogError>;
}
