// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HTTP-backed catalog provider.
//!
//! Talks JSON to a catalog service exposing `/departments`, `/courses`, and
//! `/sections` endpoints with term/dept/course query parameters. Requests
//! carry no timeout: a hung service just leaves the corresponding panel in
//! its loading state, it never blocks the UI thread.

use crate::catalog::provider::{CatalogError, CatalogProvider, CourseRow, DeptRow};
use crate::models::section::Section;
use crate::models::semester::Semester;
use serde::de::DeserializeOwned;

pub struct HttpCatalogProvider {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpCatalogProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json()?)
    }
}

impl CatalogProvider for HttpCatalogProvider {
    fn list_departments(
        &self,
        semester: Semester,
        year: u16,
    ) -> Result<Vec<DeptRow>, CatalogError> {
        self.get_json(
            "departments",
            &[
                ("semester", semester.to_string()),
                ("year", year.to_string()),
            ],
        )
    }

    fn list_courses(
        &self,
        semester: Semester,
        year: u16,
        dept_abbr: &str,
    ) -> Result<Vec<CourseRow>, CatalogError> {
        self.get_json(
            "courses",
            &[
                ("semester", semester.to_string()),
                ("year", year.to_string()),
                ("dept", dept_abbr.to_string()),
            ],
        )
    }

    fn list_sections(
        &self,
        semester: Semester,
        year: u16,
        dept_abbr: &str,
        course_number: &str,
    ) -> Result<Vec<Section>, CatalogError> {
        self.get_json(
            "sections",
            &[
                ("semester", semester.to_string()),
                ("year", year.to_string()),
                ("dept", dept_abbr.to_string()),
                ("course", course_number.to_string()),
            ],
        )
    }
}
