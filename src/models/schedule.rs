// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The schedule: a term plus the ordered list of course slots.
//!
//! `ScheduleData` is the single owner of the slot list. UI code borrows
//! slots to render them and routes every mutation through the accessors
//! here, keyed by slot id. List order is significant: it is the render and
//! stacking order of the panels.

use crate::models::course::CourseSlot;
use crate::models::section::Section;
use crate::models::semester::Semester;
use serde::{Deserialize, Serialize};

/// Complete schedule state for one term, serialized on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub semester: Semester,
    pub year: u16,
    pub courses: Vec<CourseSlot>,
}

/// Did any field that downstream rendering or fetching keys off actually
/// change between two states of a slot? Sections do not count: resolving
/// them is a read-side refresh, not an edit.
pub fn slot_changed(prev: &CourseSlot, next: &CourseSlot) -> bool {
    prev.id != next.id
        || prev.color != next.color
        || prev.selected_dept.id != next.selected_dept.id
        || prev.selected_course.id != next.selected_course.id
}

impl ScheduleData {
    /// Create an empty schedule for the given term.
    pub fn new(semester: Semester, year: u16) -> Self {
        Self {
            semester,
            year,
            courses: Vec::new(),
        }
    }

    /// Append a slot to the end of the list.
    ///
    /// Ids must be unique within the list; a colliding id is rejected so the
    /// list can never hold two slots that answer to the same identity.
    pub fn append(&mut self, slot: CourseSlot) -> bool {
        if self.get(&slot.id).is_some() {
            log::warn!("Refusing to add course slot with duplicate id {}", slot.id);
            return false;
        }
        self.courses.push(slot);
        true
    }

    /// Remove the first slot with the given id. Absent ids are a no-op:
    /// removal must be safe to call twice for the same slot.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.courses.iter().position(|slot| slot.id == id) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Apply a patch to the slot with the given id.
    ///
    /// Returns whether a relevant field changed, per `slot_changed`. Absent
    /// ids and patches that end up touching nothing both report `false`, so
    /// callers can gate history snapshots on the result.
    pub fn update_by_id(&mut self, id: &str, patch: impl FnOnce(&mut CourseSlot)) -> bool {
        let Some(slot) = self.courses.iter_mut().find(|slot| slot.id == id) else {
            return false;
        };
        let before = slot.clone();
        patch(slot);
        slot_changed(&before, slot)
    }

    /// Install fetched sections on the slot with the given id, provided it
    /// still has a course chosen. Stale lookups for a course the user has
    /// since navigated away from simply never match and are dropped.
    pub fn resolve_sections(&mut self, id: &str, sections: Vec<Section>) -> bool {
        let Some(slot) = self.courses.iter_mut().find(|slot| slot.id == id) else {
            return false;
        };
        if !slot.has_course() {
            return false;
        }
        slot.resolve_sections(sections);
        true
    }

    /// Borrow a slot by id.
    pub fn get(&self, id: &str) -> Option<&CourseSlot> {
        self.courses.iter().find(|slot| slot.id == id)
    }

    /// Clear every slot's selections. Used on term change, which invalidates
    /// all term-scoped option ids at once.
    pub fn reset_all_selections(&mut self) {
        for slot in &mut self.courses {
            slot.reset_selections();
        }
    }

    /// Check the structural invariants a schedule file must satisfy:
    /// unique slot ids, and no course chosen without a department.
    pub fn validate(&self) -> Result<(), String> {
        for (index, slot) in self.courses.iter().enumerate() {
            if self.courses[..index].iter().any(|other| other.id == slot.id) {
                return Err(format!("duplicate course slot id {:?}", slot.id));
            }
            if slot.selected_dept.is_unset() && !slot.selected_course.is_unset() {
                return Err(format!(
                    "slot {:?} has a course selected without a department",
                    slot.id
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::combo::ComboOption;
    use crate::util::colors::SlotColor;

    fn option(id: &str, value: &str) -> ComboOption {
        ComboOption {
            id: id.to_string(),
            label: value.to_string(),
            value: value.to_string(),
            title: String::new(),
        }
    }

    fn schedule_with_two_slots() -> ScheduleData {
        let mut schedule = ScheduleData::new(Semester::Fall, 2026);
        let mut a = CourseSlot::new("course-1".to_string(), SlotColor::Amber);
        a.select_dept(option("fall-2026-CS", "CS"));
        let mut b = CourseSlot::new("course-2".to_string(), SlotColor::Sky);
        b.select_dept(option("fall-2026-MATH", "MATH"));
        schedule.append(a);
        schedule.append(b);
        schedule
    }

    #[test]
    fn test_append_rejects_duplicate_ids() {
        let mut schedule = schedule_with_two_slots();
        let duplicate = CourseSlot::new("course-1".to_string(), SlotColor::Rose);
        assert!(!schedule.append(duplicate));
        assert_eq!(schedule.courses.len(), 2);
    }

    #[test]
    fn test_remove_by_id_leaves_others_untouched() {
        let mut schedule = schedule_with_two_slots();
        let b_before = schedule.get("course-2").unwrap().clone();

        assert!(schedule.remove_by_id("course-1"));
        assert_eq!(schedule.courses.len(), 1);
        assert_eq!(schedule.courses[0], b_before);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut schedule = schedule_with_two_slots();
        let before = schedule.clone();

        assert!(!schedule.remove_by_id("course-99"));
        assert_eq!(schedule, before);

        // Removing the same slot twice must also be safe.
        assert!(schedule.remove_by_id("course-1"));
        assert!(!schedule.remove_by_id("course-1"));
        assert_eq!(schedule.courses.len(), 1);
    }

    #[test]
    fn test_update_by_id_reports_relevant_changes_only() {
        let mut schedule = schedule_with_two_slots();

        let changed = schedule.update_by_id("course-1", |slot| {
            slot.select_dept(option("fall-2026-PHYS", "PHYS"));
        });
        assert!(changed);

        // Idempotent re-selection: nothing relevant changes.
        let changed = schedule.update_by_id("course-1", |slot| {
            slot.select_dept(option("fall-2026-PHYS", "PHYS"));
        });
        assert!(!changed);

        assert!(!schedule.update_by_id("course-99", |slot| {
            slot.set_color(SlotColor::Violet);
        }));
    }

    #[test]
    fn test_resolve_sections_requires_a_chosen_course() {
        let mut schedule = schedule_with_two_slots();
        // course-1 has a dept but no course; resolution must be refused.
        assert!(!schedule.resolve_sections("course-1", Vec::new()));

        schedule.update_by_id("course-1", |slot| {
            slot.select_course(option("fall-2026-CS-101", "101"));
        });
        assert!(schedule.resolve_sections("course-1", Vec::new()));
        assert!(!schedule.get("course-1").unwrap().needs_sections());
    }

    #[test]
    fn test_reset_all_selections_keeps_slots_and_colors() {
        let mut schedule = schedule_with_two_slots();
        schedule.reset_all_selections();

        assert_eq!(schedule.courses.len(), 2);
        assert_eq!(schedule.courses[0].color, SlotColor::Amber);
        assert!(schedule.courses.iter().all(|s| s.selected_dept.is_unset()));
    }

    #[test]
    fn test_slot_changed_ignores_sections() {
        let mut a = CourseSlot::new("course-1".to_string(), SlotColor::Amber);
        a.select_dept(option("fall-2026-CS", "CS"));
        a.select_course(option("fall-2026-CS-101", "101"));
        let mut b = a.clone();
        b.resolve_sections(Vec::new());
        assert!(!slot_changed(&a, &b));

        b.set_color(SlotColor::Emerald);
        assert!(slot_changed(&a, &b));
    }

    #[test]
    fn test_validate_catches_bad_files() {
        let mut schedule = schedule_with_two_slots();
        assert!(schedule.validate().is_ok());

        // Orphaned course selection.
        schedule.courses[0].selected_dept = ComboOption::empty();
        schedule.courses[0].selected_course = option("fall-2026-CS-101", "101");
        assert!(schedule.validate().is_err());

        // Duplicate ids.
        let mut schedule = schedule_with_two_slots();
        schedule.courses[1].id = "course-1".to_string();
        assert!(schedule.validate().is_err());
    }
}
