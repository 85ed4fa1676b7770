use serde::{Deserialize, Serialize};

use crate::types::workout::Coords;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub zoom_level: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom_level: 12,
            tile_url: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

/// Where the map should pan to when a workout is selected in the list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coords,
    pub zoom: u8,
}
