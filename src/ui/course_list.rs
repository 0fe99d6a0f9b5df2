// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The course panel list.
//!
//! One collapsible, color-tinted panel per course slot, rendered in list
//! order. Panels borrow their slot read-only and report edits back as a
//! `CourseListAction` for the app to apply through the schedule accessors.

use crate::catalog::cache::CatalogCache;
use crate::models::combo::ComboOption;
use crate::models::schedule::ScheduleData;
use crate::ui::{sections, selector};
use crate::util::colors::SlotColor;
use crate::util::text;
use std::collections::HashMap;

/// Result of interacting with the course panels.
pub enum CourseListAction {
    None,
    SelectDept { slot_id: String, option: ComboOption },
    SelectCourse { slot_id: String, option: ComboOption },
    SetColor { slot_id: String, color: SlotColor },
    Remove { slot_id: String },
}

/// Key into the transient selector-state map for one slot axis.
pub fn selector_key(slot_id: &str, axis: &str) -> String {
    format!("{slot_id}:{axis}")
}

/// Display every course panel. Returns at most one action per frame.
pub fn show(
    ui: &mut egui::Ui,
    schedule: &ScheduleData,
    cache: &CatalogCache,
    selector_ui: &mut HashMap<String, selector::SelectorState>,
) -> CourseListAction {
    let mut action = CourseListAction::None;
    let semester = schedule.semester;
    let year = schedule.year;

    for slot in &schedule.courses {
        let header_text = slot.color.header_text();

        let panel_id = ui.make_persistent_id(&slot.id);
        egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), panel_id, true)
            .show_header(ui, |ui| {
                egui::Frame::none()
                    .fill(slot.color.header_fill())
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        // Department picker.
                        {
                            let key = selector_key(&slot.id, "dept");
                            let state = selector_ui.entry(key.clone()).or_default();
                            if let Some(option) = selector::show(
                                ui,
                                &key,
                                state,
                                cache.departments(semester, year),
                                &slot.selected_dept,
                                true,
                                "dept",
                            ) {
                                action = CourseListAction::SelectDept {
                                    slot_id: slot.id.clone(),
                                    option,
                                };
                            }
                        }

                        // Course picker, structurally disabled until a
                        // department is chosen.
                        {
                            let enabled = !slot.selected_dept.is_unset();
                            let no_options: &[ComboOption] = &[];
                            let options = if enabled {
                                cache.courses(semester, year, &slot.selected_dept.value)
                            } else {
                                Some(no_options)
                            };
                            let key = selector_key(&slot.id, "course");
                            let state = selector_ui.entry(key.clone()).or_default();
                            if let Some(option) = selector::show(
                                ui,
                                &key,
                                state,
                                options,
                                &slot.selected_course,
                                enabled,
                                "code",
                            ) {
                                action = CourseListAction::SelectCourse {
                                    slot_id: slot.id.clone(),
                                    option,
                                };
                            }
                        }

                        let title = text::format_title(&slot.selected_course.title);
                        let heading = if title.is_empty() {
                            "Pick a department then course code"
                        } else {
                            title.as_str()
                        };
                        ui.label(egui::RichText::new(heading).color(header_text));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✕").on_hover_text("Remove course").clicked() {
                                action = CourseListAction::Remove {
                                    slot_id: slot.id.clone(),
                                };
                            }

                            ui.menu_button("🎨", |ui| {
                                for color in SlotColor::ALL {
                                    let swatch = egui::RichText::new(color.label())
                                        .color(color.header_text())
                                        .background_color(color.header_fill());
                                    if ui
                                        .selectable_label(color == slot.color, swatch)
                                        .clicked()
                                    {
                                        action = CourseListAction::SetColor {
                                            slot_id: slot.id.clone(),
                                            color,
                                        };
                                        ui.close_menu();
                                    }
                                }
                            });
                        });
                    });
            })
            .body(|ui| {
                sections::show(ui, slot);
            });

        ui.add_space(4.0);
    }

    action
}
