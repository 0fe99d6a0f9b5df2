// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The staleness-bounded catalog cache.
//!
//! Every lookup is identified by a `FetchKey` carrying the full parameter
//! set it depends on. That identity is what makes racing fetches harmless: a
//! request issued for parameters the user has since navigated away from
//! lands under a key nobody reads anymore. There is no cancellation.
//!
//! Reads serve stale entries while a refresh is in flight, so option lists
//! do not flicker away every hour.

use crate::catalog::fetch::{self, FetchOutcome, FetchedRows};
use crate::catalog::provider::CatalogProvider;
use crate::models::combo::{self, ComboOption};
use crate::models::section::Section;
use crate::models::semester::Semester;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a cached result is trusted before `ensure` re-fetches it.
const STALE_AFTER: Duration = Duration::from_secs(60 * 60);

/// Identity of one catalog lookup: kind plus every parameter it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchKey {
    Departments {
        semester: Semester,
        year: u16,
    },
    Courses {
        semester: Semester,
        year: u16,
        dept: String,
    },
    Sections {
        semester: Semester,
        year: u16,
        dept: String,
        course: String,
    },
}

impl FetchKey {
    pub fn departments(semester: Semester, year: u16) -> FetchKey {
        FetchKey::Departments { semester, year }
    }

    pub fn courses(semester: Semester, year: u16, dept: &str) -> FetchKey {
        FetchKey::Courses {
            semester,
            year,
            dept: dept.to_string(),
        }
    }

    pub fn sections(semester: Semester, year: u16, dept: &str, course: &str) -> FetchKey {
        FetchKey::Sections {
            semester,
            year,
            dept: dept.to_string(),
            course: course.to_string(),
        }
    }
}

/// Cached payload, normalized into its display form at insert time. The key
/// carries the term/parent context the normalizers need.
enum Payload {
    Options(Vec<ComboOption>),
    Sections(Vec<Section>),
}

struct CacheEntry {
    fetched_at: Instant,
    payload: Payload,
}

impl CacheEntry {
    fn is_fresh_at(&self, now: Instant) -> bool {
        now.duration_since(self.fetched_at) < STALE_AFTER
    }
}

/// Keyed cache over the catalog service, with at most one in-flight fetch
/// per key.
pub struct CatalogCache {
    provider: Arc<dyn CatalogProvider>,
    entries: HashMap<FetchKey, CacheEntry>,
    in_flight: HashSet<FetchKey>,
    results_tx: Sender<FetchOutcome>,
    results_rx: Receiver<FetchOutcome>,
}

impl CatalogCache {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        let (results_tx, results_rx) = channel();
        Self {
            provider,
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            results_tx,
            results_rx,
        }
    }

    /// Make sure a result for `key` exists or is on its way. Spawns a
    /// background fetch when the entry is missing or stale and no request
    /// for the same key is already running.
    pub fn ensure(&mut self, key: FetchKey) {
        // A course lookup with no department is answered locally; don't even
        // ask the service.
        if let FetchKey::Courses { dept, .. } = &key {
            if dept.is_empty() {
                self.entries.entry(key).or_insert(CacheEntry {
                    fetched_at: Instant::now(),
                    payload: Payload::Options(Vec::new()),
                });
                return;
            }
        }

        let now = Instant::now();
        if let Some(entry) = self.entries.get(&key) {
            if entry.is_fresh_at(now) {
                return;
            }
        }
        if self.in_flight.contains(&key) {
            return;
        }

        self.in_flight.insert(key.clone());
        fetch::spawn(self.provider.clone(), key, self.results_tx.clone());
    }

    /// Drain finished lookups into the cache. Failed lookups are logged and
    /// stored as empty results; the UI just shows "no results" for them.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.results_rx.try_recv() {
            self.in_flight.remove(&outcome.key);

            let rows = match outcome.result {
                Ok(rows) => rows,
                Err(err) => {
                    log::error!("Catalog fetch failed for {:?}: {err}", outcome.key);
                    FetchedRows::empty_for(&outcome.key)
                }
            };

            let payload = match (&outcome.key, rows) {
                (FetchKey::Departments { semester, year }, FetchedRows::Departments(rows)) => {
                    Payload::Options(combo::dept_options(*semester, *year, &rows))
                }
                (
                    FetchKey::Courses {
                        semester,
                        year,
                        dept,
                    },
                    FetchedRows::Courses(rows),
                ) => Payload::Options(combo::course_options(*semester, *year, dept, &rows)),
                (FetchKey::Sections { .. }, FetchedRows::Sections(rows)) => {
                    Payload::Sections(rows)
                }
                (key, _) => {
                    log::error!("Catalog fetch returned rows of the wrong kind for {key:?}");
                    continue;
                }
            };

            self.entries.insert(
                outcome.key,
                CacheEntry {
                    fetched_at: Instant::now(),
                    payload,
                },
            );
        }
    }

    /// Department options for a term, if any result (fresh or stale) is cached.
    pub fn departments(&self, semester: Semester, year: u16) -> Option<&[ComboOption]> {
        self.options(&FetchKey::departments(semester, year))
    }

    /// Course options for a department, if cached.
    pub fn courses(&self, semester: Semester, year: u16, dept: &str) -> Option<&[ComboOption]> {
        self.options(&FetchKey::courses(semester, year, dept))
    }

    /// Sections for a course, if cached.
    pub fn sections(&self, key: &FetchKey) -> Option<&[Section]> {
        match self.entries.get(key).map(|entry| &entry.payload) {
            Some(Payload::Sections(sections)) => Some(sections.as_slice()),
            _ => None,
        }
    }

    fn options(&self, key: &FetchKey) -> Option<&[ComboOption]> {
        match self.entries.get(key).map(|entry| &entry.payload) {
            Some(Payload::Options(options)) => Some(options.as_slice()),
            _ => None,
        }
    }

    /// Any lookups still running?
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Forget every cached result. The next `ensure` for each key fetches
    /// again; results from lookups still in flight land normally afterwards.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider::{CatalogError, CourseRow, DeptRow};
    use std::time::Duration;

    struct StubProvider {
        fail: bool,
    }

    impl CatalogProvider for StubProvider {
        fn list_departments(
            &self,
            _semester: Semester,
            _year: u16,
        ) -> Result<Vec<DeptRow>, CatalogError> {
            if self.fail {
                return Err(CatalogError::Status {
                    endpoint: "departments".to_string(),
                    status: 500,
                });
            }
            Ok(vec![DeptRow {
                dept_abbr: "CS".to_string(),
                dept_title: "COMPUTER SCIENCE".to_string(),
            }])
        }

        fn list_courses(
            &self,
            _semester: Semester,
            _year: u16,
            dept_abbr: &str,
        ) -> Result<Vec<CourseRow>, CatalogError> {
            assert!(!dept_abbr.is_empty(), "empty dept must never reach the provider");
            Ok(vec![CourseRow {
                course_number: "101".to_string(),
                course_title: "INTRO".to_string(),
            }])
        }

        fn list_sections(
            &self,
            _semester: Semester,
            _year: u16,
            _dept_abbr: &str,
            _course_number: &str,
        ) -> Result<Vec<Section>, CatalogError> {
            Ok(Vec::new())
        }
    }

    fn poll_until<F: Fn(&CatalogCache) -> bool>(cache: &mut CatalogCache, ready: F) {
        for _ in 0..400 {
            cache.poll();
            if ready(cache) {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("fetch did not finish in time");
    }

    #[test]
    fn test_fetch_normalizes_into_term_scoped_options() {
        let mut cache = CatalogCache::new(Arc::new(StubProvider { fail: false }));
        cache.ensure(FetchKey::departments(Semester::Fall, 2026));
        assert!(cache.has_pending());

        poll_until(&mut cache, |c| c.departments(Semester::Fall, 2026).is_some());
        let options = cache.departments(Semester::Fall, 2026).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "fall-2026-CS");
        assert!(!cache.has_pending());
    }

    #[test]
    fn test_failed_fetch_degrades_to_empty_entry() {
        let mut cache = CatalogCache::new(Arc::new(StubProvider { fail: true }));
        cache.ensure(FetchKey::departments(Semester::Fall, 2026));

        poll_until(&mut cache, |c| c.departments(Semester::Fall, 2026).is_some());
        assert_eq!(cache.departments(Semester::Fall, 2026).unwrap().len(), 0);
    }

    #[test]
    fn test_empty_dept_courses_never_reach_the_provider() {
        let mut cache = CatalogCache::new(Arc::new(StubProvider { fail: false }));
        cache.ensure(FetchKey::courses(Semester::Fall, 2026, ""));

        // Answered synchronously from the guard, nothing in flight.
        assert!(!cache.has_pending());
        assert_eq!(cache.courses(Semester::Fall, 2026, "").unwrap().len(), 0);
    }

    #[test]
    fn test_ensure_spawns_one_fetch_per_key() {
        let mut cache = CatalogCache::new(Arc::new(StubProvider { fail: false }));
        let key = FetchKey::departments(Semester::Fall, 2026);
        cache.ensure(key.clone());
        cache.ensure(key.clone());
        cache.ensure(key);

        poll_until(&mut cache, |c| c.departments(Semester::Fall, 2026).is_some());
        // A fresh entry suppresses further fetches entirely.
        cache.ensure(FetchKey::departments(Semester::Fall, 2026));
        assert!(!cache.has_pending());
    }

    #[test]
    fn test_entries_go_stale_after_the_window() {
        let entry = CacheEntry {
            fetched_at: Instant::now(),
            payload: Payload::Options(Vec::new()),
        };
        assert!(entry.is_fresh_at(entry.fetched_at + Duration::from_secs(10)));
        assert!(!entry.is_fresh_at(entry.fetched_at + STALE_AFTER));
        assert!(!entry.is_fresh_at(entry.fetched_at + STALE_AFTER * 2));
    }

    #[test]
    fn test_invalidate_all_clears_results() {
        let mut cache = CatalogCache::new(Arc::new(StubProvider { fail: false }));
        cache.ensure(FetchKey::departments(Semester::Fall, 2026));
        poll_until(&mut cache, |c| c.departments(Semester::Fall, 2026).is_some());

        cache.invalidate_all();
        assert!(cache.departments(Semester::Fall, 2026).is_none());
    }
}
