//! `wmtile` general configuration.
//!
//! The config file is JSON, found at the XDG config location
//! (`~/.config/wmtile/config.json` by default):
//!
//! ```json
//! {
//!     "border": 3,
//!     "titlebar": 28,
//!     "tiling_areas": [
//!         { "x": 0, "y": 0, "w": 2560, "h": 1600 },
//!         { "x": 2560, "y": 0, "w": 1200, "h": 1920 }
//!     ]
//! }
//! ```
//!
//! Tiling only ever happens inside the area containing the focused window,
//! so one area per monitor keeps layouts from spilling across outputs, and
//! an area starting below a panel keeps the panel uncovered.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

use crate::errors::Result;
use crate::models::Geometry;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Border thickness the window manager draws around windows, in pixels.
    pub border: i32,
    /// Titlebar height, in pixels.
    pub titlebar: i32,
    /// Regions of the screen in which windows may be tiled.
    pub tiling_areas: Vec<Geometry>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Errors when the XDG base directories cannot be determined or the file
    /// exists but cannot be read or parsed. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let file = BaseDirectories::with_prefix("wmtile")?.place_config_file("config.json")?;
        Self::load_from_file(&file)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist. Missing fields fill with their defaults.
    ///
    /// # Errors
    ///
    /// Errors when the file exists but cannot be read or is malformed JSON.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            tracing::warn!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Falls back to the full screen when no tiling areas are configured.
    /// With single monitor setups that is usually the right thing.
    pub fn ensure_tiling_areas(&mut self, screen: Geometry) {
        if self.tiling_areas.is_empty() {
            self.tiling_areas.push(screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "border": 3 }}"#).unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.border, 3);
        assert_eq!(config.titlebar, 0);
        assert!(config.tiling_areas.is_empty());
    }

    #[test]
    fn full_file_parses_every_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "border": 3,
                "titlebar": 28,
                "tiling_areas": [
                    {{ "x": 0, "y": 0, "w": 2560, "h": 1600 }},
                    {{ "x": 2560, "y": 0, "w": 1200, "h": 1920 }}
                ]
            }}"#
        )
        .unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.border, 3);
        assert_eq!(config.titlebar, 28);
        assert_eq!(
            config.tiling_areas,
            vec![
                Geometry::new(0, 0, 2560, 1600),
                Geometry::new(2560, 0, 1200, 1920),
            ]
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn empty_areas_fall_back_to_the_screen() {
        let mut config = Config::default();
        config.ensure_tiling_areas(Geometry::new(0, 0, 1366, 768));
        assert_eq!(config.tiling_areas, vec![Geometry::new(0, 0, 1366, 768)]);

        let mut configured = Config {
            tiling_areas: vec![Geometry::new(0, 0, 100, 100)],
            ..Config::default()
        };
        configured.ensure_tiling_areas(Geometry::new(0, 0, 1366, 768));
        assert_eq!(configured.tiling_areas, vec![Geometry::new(0, 0, 100, 100)]);
    }
}
