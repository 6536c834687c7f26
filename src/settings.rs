//! User settings stored as settings.json in the app data directory

use crate::constants::{DATA_FILE_ENV, DATA_FILE_NAME, SETTINGS_FILE_NAME};
use crate::types::{ChartMode, RecordType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub chart_mode: ChartMode,
    pub entry_type: RecordType,

    // Paths
    pub data_file: Option<String>,
    pub export_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            chart_mode: ChartMode::Breakdown,
            entry_type: RecordType::Expense,
            data_file: None,
            export_dir: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Records file: `POCKET_TRACK_DATA`, then the saved override, then the data dir
    pub fn data_file_or_default(&self, data_dir: &Path) -> PathBuf {
        std::env::var(DATA_FILE_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.data_file.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DATA_FILE_NAME))
    }

    pub fn export_dir_or_default(&self) -> PathBuf {
        self.export_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_and_partial_file() {
        let dir = std::env::temp_dir().join(format!("pocket-track-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let settings = Settings {
            window_w: Some(1150.0),
            chart_mode: ChartMode::Compare,
            entry_type: RecordType::Income,
            export_dir: Some("/tmp/bills".into()),
            ..Default::default()
        };
        settings.save(&dir);

        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(1150.0));
        assert_eq!(loaded.chart_mode, ChartMode::Compare);
        assert_eq!(loaded.entry_type, RecordType::Income);
        assert_eq!(loaded.export_dir_or_default(), PathBuf::from("/tmp/bills"));

        // missing keys fall back to defaults
        std::fs::write(dir.join(SETTINGS_FILE_NAME), r#"{"chart_mode":"daily_trend"}"#).unwrap();
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.chart_mode, ChartMode::DailyTrend);
        assert_eq!(loaded.entry_type, RecordType::Expense);
    }

    #[test]
    fn test_saved_data_file_override() {
        if std::env::var(DATA_FILE_ENV).is_ok() {
            return;
        }
        let data_dir = Path::new("/data");
        let settings = Settings::default();
        assert_eq!(settings.data_file_or_default(data_dir), data_dir.join(DATA_FILE_NAME));

        let settings = Settings {
            data_file: Some("/elsewhere/records.json".into()),
            ..Default::default()
        };
        assert_eq!(
            settings.data_file_or_default(data_dir),
            PathBuf::from("/elsewhere/records.json")
        );
    }
}
