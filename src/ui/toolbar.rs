// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar: term selection and adding course slots.
//!
//! The toolbar never mutates the schedule itself; it reports what the user
//! asked for and the app applies it, because a term change cascades into
//! every slot.

use crate::models::semester::Semester;

/// Years offered by the term picker.
const YEARS: std::ops::RangeInclusive<u16> = 2022..=2032;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    AddCourse,
    SetTerm { semester: Semester, year: u16 },
}

/// Display the toolbar with the term pickers and the add-course button.
pub fn show(ui: &mut egui::Ui, semester: Semester, year: u16) -> ToolbarAction {
    let mut action = ToolbarAction::None;
    let mut picked_semester = semester;
    let mut picked_year = year;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Term:");

        egui::ComboBox::from_id_source("term_semester")
            .selected_text(picked_semester.label())
            .show_ui(ui, |ui| {
                for candidate in Semester::ALL {
                    ui.selectable_value(&mut picked_semester, candidate, candidate.label());
                }
            });

        egui::ComboBox::from_id_source("term_year")
            .selected_text(picked_year.to_string())
            .show_ui(ui, |ui| {
                for candidate in YEARS {
                    ui.selectable_value(&mut picked_year, candidate, candidate.to_string());
                }
            });

        ui.separator();

        if ui.button("➕ Add course").clicked() {
            action = ToolbarAction::AddCourse;
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Add a course and narrow it down from department to section")
                .italics()
                .weak(),
        );
    });

    if picked_semester != semester || picked_year != year {
        action = ToolbarAction::SetTerm {
            semester: picked_semester,
            year: picked_year,
        };
    }

    action
}
