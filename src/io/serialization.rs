// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Schedule serialization and deserialization.
//!
//! This module handles saving and loading schedules in YAML and JSON
//! formats. Imports are validated so a hand-edited file cannot smuggle in
//! duplicate slot ids or a course selection without a department.

use crate::models::schedule::ScheduleData;
use anyhow::Result;
use std::path::Path;

/// Save a schedule in YAML format.
pub fn export_yaml(data: &ScheduleData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Save a schedule in JSON format.
pub fn export_json(data: &ScheduleData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a schedule from YAML format.
pub fn import_yaml(path: &Path) -> Result<ScheduleData> {
    let yaml = std::fs::read_to_string(path)?;
    let data: ScheduleData = serde_yaml::from_str(&yaml)?;
    validated(data)
}

/// Load a schedule from JSON format.
pub fn import_json(path: &Path) -> Result<ScheduleData> {
    let json = std::fs::read_to_string(path)?;
    let data: ScheduleData = serde_json::from_str(&json)?;
    validated(data)
}

fn validated(data: ScheduleData) -> Result<ScheduleData> {
    data.validate()
        .map_err(|reason| anyhow::anyhow!("invalid schedule file: {reason}"))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::combo::ComboOption;
    use crate::models::course::CourseSlot;
    use crate::models::semester::Semester;
    use crate::util::colors::SlotColor;

    fn sample_schedule() -> ScheduleData {
        let mut schedule = ScheduleData::new(Semester::Fall, 2026);
        let mut slot = CourseSlot::new("course-1".to_string(), SlotColor::Sky);
        slot.select_dept(ComboOption {
            id: "fall-2026-CS".to_string(),
            label: "CS".to_string(),
            value: "CS".to_string(),
            title: "COMPUTER SCIENCE".to_string(),
        });
        schedule.append(slot);
        schedule.append(CourseSlot::new("course-2".to_string(), SlotColor::Rose));
        schedule
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.yaml");
        let schedule = sample_schedule();

        export_yaml(&schedule, &path).unwrap();
        let loaded = import_yaml(&path).unwrap();
        assert_eq!(loaded, schedule);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        let schedule = sample_schedule();

        export_json(&schedule, &path).unwrap();
        let loaded = import_json(&path).unwrap();
        assert_eq!(loaded, schedule);
    }

    #[test]
    fn test_import_rejects_duplicate_slot_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        let mut schedule = sample_schedule();
        schedule.courses[1].id = "course-1".to_string();

        // Export does not validate; import must.
        export_json(&schedule, &path).unwrap();
        assert!(import_json(&path).is_err());
    }

    #[test]
    fn test_import_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(import_yaml(&dir.path().join("nope.yaml")).is_err());
    }
}
