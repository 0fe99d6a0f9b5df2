// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Autocomplete dropdown for department and course codes.
//!
//! A narrow monospace field shows the chosen code; clicking or typing opens
//! a dropdown of options narrowed by the fuzzy filter. A small red dot marks
//! an enabled field with nothing chosen yet. All transient state (query
//! text, open flag) lives in a `SelectorState` the caller owns, so the
//! widget itself stays a plain function.

use crate::models::combo::ComboOption;
use crate::util::{fuzzy, text};

const FIELD_WIDTH: f32 = 56.0;
const DROPDOWN_MIN_WIDTH: f32 = 260.0;
const DROPDOWN_MAX_HEIGHT: f32 = 240.0;

/// Transient per-field UI state.
#[derive(Default)]
pub struct SelectorState {
    query: String,
    open: bool,
}

/// Display one autocomplete field.
///
/// `options` is `None` while the list has not been fetched yet. Returns the
/// option the user picked this frame, if any; the caller routes it into the
/// schedule.
pub fn show(
    ui: &mut egui::Ui,
    id_source: &str,
    state: &mut SelectorState,
    options: Option<&[ComboOption]>,
    selected: &ComboOption,
    enabled: bool,
    placeholder: &str,
) -> Option<ComboOption> {
    let mut chosen = None;

    if !enabled {
        state.open = false;
        state.query.clear();
    }

    // While closed the field shows the chosen code; while open it edits the
    // search query.
    let mut value_buf = selected.value.clone();
    let text_buf: &mut String = if state.open { &mut state.query } else { &mut value_buf };

    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(text_buf)
            .hint_text(placeholder)
            .desired_width(FIELD_WIDTH)
            .font(egui::TextStyle::Monospace),
    );

    if enabled && !state.open && (response.gained_focus() || response.clicked() || response.changed())
    {
        state.open = true;
        state.query.clear();
    }

    // Required-input cue: a dot in the corner until something is chosen.
    if enabled && selected.is_unset() {
        let dot = egui::pos2(response.rect.right() - 6.0, response.rect.top() + 6.0);
        ui.painter()
            .circle_filled(dot, 3.0, egui::Color32::from_rgb(0xef, 0x44, 0x44));
    }

    if !state.open {
        return None;
    }

    let area_id = egui::Id::new((id_source, "selector_dropdown"));
    let origin = egui::pos2(response.rect.left(), response.rect.bottom() + 4.0);
    let area = egui::Area::new(area_id)
        .fixed_pos(origin)
        .order(egui::Order::Foreground)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(DROPDOWN_MIN_WIDTH);
                egui::ScrollArea::vertical()
                    .max_height(DROPDOWN_MAX_HEIGHT)
                    .show(ui, |ui| match options {
                        None => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(egui::RichText::new("Loading…").weak());
                            });
                        }
                        Some(all) => {
                            let filtered = fuzzy::filter_options(all, &state.query);
                            if filtered.is_empty() {
                                if ui.button("No results. Clear search").clicked() {
                                    state.query.clear();
                                }
                            }
                            for option in filtered {
                                let is_selected = option.id == selected.id;
                                let row = format!(
                                    "{:<6} {}",
                                    option.label,
                                    text::format_title(&option.title)
                                );
                                if ui.selectable_label(is_selected, row).clicked() {
                                    chosen = Some(option.clone());
                                }
                            }
                        }
                    });
            });
        });

    // Close on pick, on Escape, or on a click that lands outside both the
    // field and the dropdown.
    let clicked_away = response.clicked_elsewhere() && area.response.clicked_elsewhere();
    if chosen.is_some() || clicked_away || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.open = false;
        state.query.clear();
    }

    chosen
}
