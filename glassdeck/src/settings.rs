//! Overlay settings, persisted as JSON in the platform config directory.
//!
//! Missing or unreadable settings silently fall back to the defaults; a
//! pretty-printed default file is written on first run so there is
//! something to edit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Window size in points.
    pub window_size: [f32; 2],
    /// Frame cap while animations run.
    pub fps: u32,
    /// Fill color behind the wallpaper (shows through when no wallpaper
    /// is available).
    pub background: [u8; 3],
    /// Whether the window keeps its chrome. Off by default; when on, the
    /// wallpaper crop compensates for the title bar.
    pub decorated: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: [500.0, 260.0],
            fps: 60,
            background: [24, 26, 32],
            decorated: false,
        }
    }
}

/// Path of the settings file (~/.config/glassdeck/settings.json on Linux).
fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "glassdeck")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/glassdeck"))
        .join("settings.json")
}

impl Settings {
    /// Load the settings, falling back to (and writing) the defaults when
    /// the file is absent or unreadable.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::read(&path) {
            Ok(settings) => settings,
            Err(_) => {
                let settings = Self::default();
                let _ = settings.write(&path);
                settings
            }
        }
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.window_size[0], self.window_size[1])
    }

    pub fn background_color(&self) -> egui::Color32 {
        let [r, g, b] = self.background;
        egui::Color32::from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Settings = serde_json::from_str(r#"{ "fps": 30 }"#).unwrap();
        assert_eq!(back.fps, 30);
        assert_eq!(back.window_size, Settings::default().window_size);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let back: Settings = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(back, Settings::default());
    }
}
