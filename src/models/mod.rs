// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for terms, options, course slots, and the schedule.

pub mod combo;
pub mod course;
pub mod schedule;
pub mod section;
pub mod semester;
