// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Course panel colors.
//!
//! Each slot gets a color from a small fixed palette, cycled in creation
//! order so neighboring panels stay distinguishable.

use serde::{Deserialize, Serialize};

/// Panel tint for a course slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotColor {
    Amber,
    Sky,
    Emerald,
    Rose,
    Violet,
    Orange,
}

impl SlotColor {
    /// Palette in cycling order.
    pub const ALL: [SlotColor; 6] = [
        SlotColor::Amber,
        SlotColor::Sky,
        SlotColor::Emerald,
        SlotColor::Rose,
        SlotColor::Violet,
        SlotColor::Orange,
    ];

    /// Color for the n-th slot ever created, wrapping around the palette.
    pub fn for_index(index: usize) -> SlotColor {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotColor::Amber => "Amber",
            SlotColor::Sky => "Sky",
            SlotColor::Emerald => "Emerald",
            SlotColor::Rose => "Rose",
            SlotColor::Violet => "Violet",
            SlotColor::Orange => "Orange",
        }
    }

    /// Light fill for the panel header.
    pub fn header_fill(&self) -> egui::Color32 {
        match self {
            SlotColor::Amber => egui::Color32::from_rgb(0xfd, 0xe6, 0x8a),
            SlotColor::Sky => egui::Color32::from_rgb(0xba, 0xe6, 0xfd),
            SlotColor::Emerald => egui::Color32::from_rgb(0xa7, 0xf3, 0xd0),
            SlotColor::Rose => egui::Color32::from_rgb(0xfe, 0xcd, 0xd3),
            SlotColor::Violet => egui::Color32::from_rgb(0xdd, 0xd6, 0xfe),
            SlotColor::Orange => egui::Color32::from_rgb(0xfe, 0xd7, 0xaa),
        }
    }

    /// Dark text color that stays readable on `header_fill`.
    pub fn header_text(&self) -> egui::Color32 {
        match self {
            SlotColor::Amber => egui::Color32::from_rgb(0x78, 0x35, 0x0f),
            SlotColor::Sky => egui::Color32::from_rgb(0x0c, 0x4a, 0x6e),
            SlotColor::Emerald => egui::Color32::from_rgb(0x06, 0x4e, 0x3b),
            SlotColor::Rose => egui::Color32::from_rgb(0x88, 0x13, 0x37),
            SlotColor::Violet => egui::Color32::from_rgb(0x4c, 0x1d, 0x95),
            SlotColor::Orange => egui::Color32::from_rgb(0x7c, 0x2d, 0x12),
        }
    }
}

impl Default for SlotColor {
    fn default() -> Self {
        SlotColor::Amber
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_index_cycles_through_palette() {
        assert_eq!(SlotColor::for_index(0), SlotColor::Amber);
        assert_eq!(SlotColor::for_index(1), SlotColor::Sky);
        assert_eq!(SlotColor::for_index(6), SlotColor::Amber);
        assert_eq!(SlotColor::for_index(8), SlotColor::Emerald);
    }
}
