// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section listing inside a course panel.
//!
//! Shows the sections resolved for the slot's chosen course, a spinner while
//! the lookup is outstanding, or a hint when there is nothing to look up yet.

use crate::models::course::CourseSlot;

/// Display the body of one course panel.
pub fn show(ui: &mut egui::Ui, slot: &CourseSlot) {
    if !slot.has_course() {
        ui.label(egui::RichText::new("Choose a course to see its sections.").weak());
        return;
    }

    if slot.needs_sections() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading sections…").weak());
        });
        return;
    }

    if slot.sections.is_empty() {
        ui.label(egui::RichText::new("No sections listed for this course.").weak());
        return;
    }

    egui::Grid::new(format!("{}_sections", slot.id))
        .striped(true)
        .num_columns(5)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Section").strong());
            ui.label(egui::RichText::new("Type").strong());
            ui.label(egui::RichText::new("Instructor").strong());
            ui.label(egui::RichText::new("Meets").strong());
            ui.label(egui::RichText::new("Seats").strong());
            ui.end_row();

            for section in &slot.sections {
                ui.label(egui::RichText::new(&section.section_number).monospace());
                ui.label(&section.component);
                ui.label(&section.instructor);
                ui.label(&section.meeting);

                let seats = format!("{}/{}", section.seats_taken, section.seats_total);
                let seats_color = if section.is_open() {
                    egui::Color32::from_rgb(0x16, 0xa3, 0x4a)
                } else {
                    egui::Color32::from_rgb(0xdc, 0x26, 0x26)
                };
                ui.label(egui::RichText::new(seats).color(seats_color));
                ui.end_row();
            }
        });
}
