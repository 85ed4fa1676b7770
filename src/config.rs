use std::path::PathBuf;

use crate::types::map::MapSettings;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub map: MapSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            data_dir: PathBuf::from("data"),
            assets_dir: PathBuf::from("assets/web"),
            map: MapSettings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let zoom_level = std::env::var("MAP_ZOOM_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.map.zoom_level);

        let tile_url = std::env::var("MAP_TILE_URL").unwrap_or(defaults.map.tile_url);
        let attribution = std::env::var("MAP_ATTRIBUTION").unwrap_or(defaults.map.attribution);

        Self {
            port,
            data_dir,
            assets_dir,
            map: MapSettings {
                zoom_level,
                tile_url,
                attribution,
            },
        }
    }
}
