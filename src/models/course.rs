// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! A single course slot and its cascading selection rules.
//!
//! A slot narrows down department, then course code, then sections. Changing
//! an upstream choice always clears everything downstream of it in the same
//! mutation, so the invariant "unset department implies unset course and no
//! sections" holds at every point a caller can observe.

use crate::models::combo::ComboOption;
use crate::models::section::Section;
use crate::util::colors::SlotColor;
use serde::{Deserialize, Serialize};

/// One entry in the schedule: a department/course choice plus the sections
/// resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSlot {
    pub id: String,
    pub color: SlotColor,
    pub selected_dept: ComboOption,
    pub selected_course: ComboOption,
    /// Sections fetched for the currently selected course. Not persisted;
    /// re-resolved from the catalog after a load.
    #[serde(skip)]
    pub sections: Vec<Section>,
    /// Id of the course option `sections` belongs to. A mismatch with
    /// `selected_course.id` means the sections shown would be stale and a
    /// fresh lookup is needed.
    #[serde(skip)]
    pub sections_for: Option<String>,
}

impl CourseSlot {
    /// Create an empty slot.
    pub fn new(id: String, color: SlotColor) -> Self {
        Self {
            id,
            color,
            selected_dept: ComboOption::empty(),
            selected_course: ComboOption::empty(),
            sections: Vec::new(),
            sections_for: None,
        }
    }

    /// Choose a department.
    ///
    /// Re-selecting the current option id is a no-op; anything else installs
    /// the new department and clears the course and sections with it.
    /// Returns whether the slot changed.
    pub fn select_dept(&mut self, option: ComboOption) -> bool {
        if option.id == self.selected_dept.id {
            return false;
        }
        self.selected_dept = option;
        self.selected_course = ComboOption::empty();
        self.clear_sections();
        true
    }

    /// Choose a course code. Same idempotence guard as `select_dept`;
    /// sections are cleared because they belong to the previous course.
    pub fn select_course(&mut self, option: ComboOption) -> bool {
        if option.id == self.selected_course.id {
            return false;
        }
        self.selected_course = option;
        self.clear_sections();
        true
    }

    /// Change the panel color. No cascading effects.
    pub fn set_color(&mut self, color: SlotColor) -> bool {
        if color == self.color {
            return false;
        }
        self.color = color;
        true
    }

    /// Drop all selections, keeping the slot and its color. Used when the
    /// term changes and every term-scoped option id becomes invalid.
    pub fn reset_selections(&mut self) {
        self.selected_dept = ComboOption::empty();
        self.selected_course = ComboOption::empty();
        self.clear_sections();
    }

    /// Install sections fetched for the currently selected course.
    pub fn resolve_sections(&mut self, sections: Vec<Section>) {
        self.sections_for = Some(self.selected_course.id.clone());
        self.sections = sections;
    }

    fn clear_sections(&mut self) {
        self.sections.clear();
        self.sections_for = None;
    }

    /// Both a department and a course have been chosen.
    pub fn has_course(&self) -> bool {
        !self.selected_dept.is_unset() && !self.selected_course.is_unset()
    }

    /// A section lookup is due: a course is chosen but the sections on hand
    /// were resolved for a different (or no) course option.
    pub fn needs_sections(&self) -> bool {
        self.has_course() && self.sections_for.as_deref() != Some(self.selected_course.id.as_str())
    }
}
