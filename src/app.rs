// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the schedule, the catalog cache, and the
//! transient UI state, and coordinating between the UI components and the
//! data model.

use crate::catalog::cache::{CatalogCache, FetchKey};
use crate::catalog::provider::CatalogProvider;
use crate::models::course::CourseSlot;
use crate::models::schedule::ScheduleData;
use crate::models::section::Section;
use crate::models::semester::Semester;
use crate::ui::course_list::{self, CourseListAction};
use crate::ui::selector::SelectorState;
use crate::ui::toolbar::{self, ToolbarAction};
use crate::util::colors::SlotColor;
use std::collections::HashMap;
use std::sync::Arc;

/// Term shown when the app starts.
const DEFAULT_SEMESTER: Semester = Semester::Fall;
const DEFAULT_YEAR: u16 = 2026;

/// History system for undo/redo functionality.
struct History {
    /// Undo stack (past schedules)
    past: Vec<ScheduleData>,
    /// Redo stack (future schedules after undo)
    future: Vec<ScheduleData>,
    /// Maximum history size
    max_size: usize,
}

impl History {
    fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_size: 50, // Keep last 50 states
        }
    }

    /// Save the pre-change schedule after an edit went through.
    fn push(&mut self, snapshot: ScheduleData) {
        self.past.push(snapshot);
        if self.past.len() > self.max_size {
            self.past.remove(0);
        }
        // A new edit invalidates anything that was undone.
        self.future.clear();
    }

    /// Undo: restore the previous schedule.
    fn undo(&mut self, current: ScheduleData) -> Option<ScheduleData> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Redo: restore the next schedule.
    fn redo(&mut self, current: ScheduleData) -> Option<ScheduleData> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

/// Main application state.
pub struct CatoApp {
    /// The schedule: term plus the ordered course slots
    schedule: ScheduleData,

    /// Catalog lookups, cached and fetched in the background
    catalog: CatalogCache,

    /// Transient autocomplete state, keyed by slot id and axis
    selector_ui: HashMap<String, SelectorState>,

    /// Counter for generating fresh slot ids (and cycling panel colors)
    slot_counter: usize,

    /// History for undo/redo
    history: History,
}

impl CatoApp {
    /// Create a new CATO application instance.
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            schedule: ScheduleData::new(DEFAULT_SEMESTER, DEFAULT_YEAR),
            catalog: CatalogCache::new(provider),
            selector_ui: HashMap::new(),
            slot_counter: 0,
            history: History::new(),
        }
    }

    /// Generate a slot id no current slot answers to.
    fn next_slot_id(&mut self) -> String {
        loop {
            self.slot_counter += 1;
            let id = format!("course-{}", self.slot_counter);
            if self.schedule.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a fresh, empty course slot.
    fn add_course(&mut self) {
        let before = self.schedule.clone();
        let color = SlotColor::for_index(self.slot_counter);
        let id = self.next_slot_id();

        if self.schedule.append(CourseSlot::new(id.clone(), color)) {
            self.history.push(before);
            log::info!("Added course slot {}, total: {}", id, self.schedule.courses.len());
        }
    }

    /// Switch terms. Option ids are term-scoped, so every slot's selections
    /// are reset; the slots themselves and their colors stay.
    fn set_term(&mut self, semester: Semester, year: u16) {
        let before = self.schedule.clone();
        self.schedule.semester = semester;
        self.schedule.year = year;
        self.schedule.reset_all_selections();
        self.history.push(before);
        self.selector_ui.clear();
        log::info!("Term set to {} {}", semester.label(), year);
    }

    /// Apply one edit reported by the course panels.
    fn apply_list_action(&mut self, action: CourseListAction) {
        match action {
            CourseListAction::SelectDept { slot_id, option } => {
                let before = self.schedule.clone();
                let label = option.label.clone();
                if self.schedule.update_by_id(&slot_id, |slot| {
                    slot.select_dept(option);
                }) {
                    self.history.push(before);
                    // The course axis starts over under the new department.
                    self.selector_ui
                        .remove(&course_list::selector_key(&slot_id, "course"));
                    log::info!("Selected department {label} for {slot_id}");
                }
            }
            CourseListAction::SelectCourse { slot_id, option } => {
                let before = self.schedule.clone();
                let label = option.label.clone();
                if self.schedule.update_by_id(&slot_id, |slot| {
                    slot.select_course(option);
                }) {
                    self.history.push(before);
                    log::info!("Selected course {label} for {slot_id}");
                }
            }
            CourseListAction::SetColor { slot_id, color } => {
                let before = self.schedule.clone();
                if self.schedule.update_by_id(&slot_id, |slot| {
                    slot.set_color(color);
                }) {
                    self.history.push(before);
                }
            }
            CourseListAction::Remove { slot_id } => {
                let before = self.schedule.clone();
                if self.schedule.remove_by_id(&slot_id) {
                    self.history.push(before);
                    self.selector_ui
                        .remove(&course_list::selector_key(&slot_id, "dept"));
                    self.selector_ui
                        .remove(&course_list::selector_key(&slot_id, "course"));
                    log::info!(
                        "Removed course slot {}, total: {}",
                        slot_id,
                        self.schedule.courses.len()
                    );
                }
            }
            CourseListAction::None => {}
        }
    }

    /// Declare the lookups this frame depends on and fold any results that
    /// have arrived into the slots that are waiting for them.
    ///
    /// Each lookup's identity is its full parameter set, so results for
    /// parameters the user has since navigated away from land under keys
    /// nobody asks for anymore.
    fn sync_catalog(&mut self) {
        let semester = self.schedule.semester;
        let year = self.schedule.year;

        self.catalog.ensure(FetchKey::departments(semester, year));

        let mut resolved: Vec<(String, Vec<Section>)> = Vec::new();
        for slot in &self.schedule.courses {
            if slot.selected_dept.is_unset() {
                continue;
            }
            self.catalog
                .ensure(FetchKey::courses(semester, year, &slot.selected_dept.value));

            if slot.needs_sections() {
                let key = FetchKey::sections(
                    semester,
                    year,
                    &slot.selected_dept.value,
                    &slot.selected_course.value,
                );
                match self.catalog.sections(&key) {
                    Some(rows) => resolved.push((slot.id.clone(), rows.to_vec())),
                    None => self.catalog.ensure(key),
                }
            }
        }

        for (slot_id, rows) in resolved {
            self.schedule.resolve_sections(&slot_id, rows);
        }
    }

    fn undo(&mut self) {
        let current = self.schedule.clone();
        if let Some(previous) = self.history.undo(current) {
            self.schedule = previous;
            self.selector_ui.clear();
            log::info!("Undo");
        }
    }

    fn redo(&mut self) {
        let current = self.schedule.clone();
        if let Some(next) = self.history.redo(current) {
            self.schedule = next;
            self.selector_ui.clear();
            log::info!("Redo");
        }
    }

    /// Save the schedule to a file, format chosen by extension.
    fn save_schedule(&self, path: std::path::PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => crate::io::serialization::export_yaml(&self.schedule, &path),
            Some("json") => crate::io::serialization::export_json(&self.schedule, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Saved schedule to {}", path.display()),
            Err(e) => log::error!("Failed to save schedule: {}", e),
        }
    }

    /// Load a schedule from a file, replacing the current one.
    fn load_schedule(&mut self, path: std::path::PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => crate::io::serialization::import_yaml(&path),
            Some("json") => crate::io::serialization::import_json(&path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(schedule) => {
                log::info!(
                    "Loaded schedule with {} courses from {}",
                    schedule.courses.len(),
                    path.display()
                );
                self.slot_counter = schedule.courses.len();
                self.schedule = schedule;
                self.selector_ui.clear();
                self.history.clear();
            }
            Err(e) => log::error!("Failed to load schedule: {}", e),
        }
    }
}

impl eframe::App for CatoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fold in any catalog lookups that finished since the last frame.
        self.catalog.poll();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save Schedule...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("YAML", &["yaml", "yml"])
                            .add_filter("JSON", &["json"])
                            .set_file_name("schedule.yaml")
                            .save_file()
                        {
                            self.save_schedule(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Load Schedule...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Schedules", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_schedule(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let can_undo = self.history.can_undo();
                    if ui.add_enabled(can_undo, egui::Button::new("Undo (Ctrl+Z)")).clicked() {
                        self.undo();
                        ui.close_menu();
                    }

                    let can_redo = self.history.can_redo();
                    if ui
                        .add_enabled(can_redo, egui::Button::new("Redo (Ctrl+Shift+Z)"))
                        .clicked()
                    {
                        self.redo();
                        ui.close_menu();
                    }

                    ui.separator();

                    let has_courses = !self.schedule.courses.is_empty();
                    if ui
                        .add_enabled(has_courses, egui::Button::new("Clear All Courses"))
                        .clicked()
                    {
                        let before = self.schedule.clone();
                        self.schedule.courses.clear();
                        self.history.push(before);
                        self.selector_ui.clear();
                        log::info!("Cleared all course slots");
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Refresh Catalog").clicked() {
                        self.catalog.invalidate_all();
                        log::info!("Catalog cache invalidated");
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, self.schedule.semester, self.schedule.year)
            })
            .inner;

        match toolbar_action {
            ToolbarAction::AddCourse => self.add_course(),
            ToolbarAction::SetTerm { semester, year } => self.set_term(semester, year),
            ToolbarAction::None => {}
        }

        // Handle keyboard shortcuts
        // Only process if no text field is focused (to avoid hijacking the
        // autocomplete inputs)
        if !ctx.wants_keyboard_input() {
            // Undo (Ctrl+Z)
            if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift)
            {
                self.undo();
            }

            // Redo (Ctrl+Shift+Z or Ctrl+Y)
            if ctx.input(|i| {
                (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                    || (i.modifiers.command && i.key_pressed(egui::Key::Y))
            }) {
                self.redo();
            }
        }

        // Course panels (center)
        let list_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.schedule.courses.is_empty() {
                    // Show welcome message when the schedule is empty
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.heading(
                                egui::RichText::new("CATO")
                                    .size(32.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                            ui.label(
                                egui::RichText::new("Course And Term Organizer")
                                    .size(14.0)
                                    .color(egui::Color32::from_gray(150)),
                            );
                            ui.add_space(20.0);
                            ui.label(
                                egui::RichText::new("Add a course to begin browsing the catalog")
                                    .color(egui::Color32::from_gray(180)),
                            );
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new("Toolbar → ➕ Add course")
                                    .weak()
                                    .color(egui::Color32::from_gray(130)),
                            );
                        });
                    });
                    CourseListAction::None
                } else {
                    let action = egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            course_list::show(ui, &self.schedule, &self.catalog, &mut self.selector_ui)
                        })
                        .inner;

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(format!(
                            "{} {}: {} courses",
                            self.schedule.semester.label(),
                            self.schedule.year,
                            self.schedule.courses.len()
                        ));
                        ui.separator();
                        if self.catalog.has_pending() {
                            ui.label("Fetching catalog…");
                        } else {
                            ui.label("Ready");
                        }
                    });

                    action
                }
            })
            .inner;

        self.apply_list_action(list_action);

        // Declare this frame's lookups and pick up finished ones.
        self.sync_catalog();

        // Request repaint while lookups are outstanding (to update spinners)
        if self.catalog.has_pending() {
            ctx.request_repaint();
        }
    }
}
