// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CATO - Course And Term Organizer
//!
//! A cross-platform desktop application for browsing semester course
//! catalogs: pick a term, add course slots, and narrow each one down
//! department → course code → sections.

mod app;
mod catalog;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::CatoApp;
use catalog::http::HttpCatalogProvider;
use catalog::provider::CatalogProvider;
use catalog::sample::SampleCatalog;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Pick the catalog source: a configured service, or the built-in sample
    // data so the app works out of the box.
    let provider: Arc<dyn CatalogProvider> = match std::env::var("CATO_CATALOG_URL") {
        Ok(url) if !url.is_empty() => {
            log::info!("Using catalog service at {url}");
            Arc::new(HttpCatalogProvider::new(&url))
        }
        _ => {
            log::info!("CATO_CATALOG_URL not set, using the built-in sample catalog");
            Arc::new(SampleCatalog)
        }
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("CATO - Course And Term Organizer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CATO",
        options,
        Box::new(|_cc| Ok(Box::new(CatoApp::new(provider)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
