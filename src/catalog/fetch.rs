// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background catalog fetches.
//!
//! Each lookup runs on its own worker thread and reports back over an mpsc
//! channel that the app drains at the top of every frame. The UI thread
//! never blocks on the service.

use crate::catalog::cache::FetchKey;
use crate::catalog::provider::{CatalogError, CatalogProvider, CourseRow, DeptRow};
use crate::models::section::Section;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Rows produced by one finished lookup, matching the kind of its key.
#[derive(Debug)]
pub enum FetchedRows {
    Departments(Vec<DeptRow>),
    Courses(Vec<CourseRow>),
    Sections(Vec<Section>),
}

impl FetchedRows {
    /// The empty row set of the kind a key asks for. Used to degrade failed
    /// lookups to "no results".
    pub fn empty_for(key: &FetchKey) -> FetchedRows {
        match key {
            FetchKey::Departments { .. } => FetchedRows::Departments(Vec::new()),
            FetchKey::Courses { .. } => FetchedRows::Courses(Vec::new()),
            FetchKey::Sections { .. } => FetchedRows::Sections(Vec::new()),
        }
    }
}

/// One finished lookup: the key it was issued under and what came back.
pub struct FetchOutcome {
    pub key: FetchKey,
    pub result: Result<FetchedRows, CatalogError>,
}

/// Run the lookup for `key` on a background thread and send the outcome.
///
/// The receiver may have been dropped by the time the thread finishes (app
/// shutting down), so the send result is ignored.
pub fn spawn(provider: Arc<dyn CatalogProvider>, key: FetchKey, sender: Sender<FetchOutcome>) {
    std::thread::spawn(move || {
        let result = match &key {
            FetchKey::Departments { semester, year } => provider
                .list_departments(*semester, *year)
                .map(FetchedRows::Departments),
            FetchKey::Courses {
                semester,
                year,
                dept,
            } => provider
                .list_courses(*semester, *year, dept)
                .map(FetchedRows::Courses),
            FetchKey::Sections {
                semester,
                year,
                dept,
                course,
            } => provider
                .list_sections(*semester, *year, dept, course)
                .map(FetchedRows::Sections),
        };

        let _ = sender.send(FetchOutcome { key, result });
    });
}
