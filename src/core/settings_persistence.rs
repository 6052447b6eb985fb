//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings live in `settings.json` inside the platform configuration
//! directory (e.g. `~/.config/chessduel/settings.json` on Linux). If no such
//! directory can be resolved, the current directory is used.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing, unreadable or malformed file
//!   yields default settings and a warning
//! - [`save_settings`] reports failures to the caller, who decides whether
//!   they matter

use crate::core::{CoreResult, GameSettings};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chessduel", "chessduel") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from the default location, falling back to defaults
pub fn load_settings() -> GameSettings {
    load_settings_or_default(&settings_path())
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_settings_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match load_settings_from(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Read and parse settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    Ok(settings.sanitized())
}

/// Save settings to the default location, returning the path written
pub fn save_settings(settings: &GameSettings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings_to(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;
    use crate::game::ai::{PlayMode, PlayerSide};

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chessduel-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save-load");
        let path = dir.join("nested").join(SETTINGS_FILENAME);
        let settings = GameSettings {
            clock_seconds: 180,
            increment_seconds: 2,
            search_depth: 4,
            think_delay_ms: 0,
            mode: PlayMode::VsHuman,
            player_side: PlayerSide::Random,
        };

        save_settings_to(&settings, &path).expect("save should succeed");
        let loaded = load_settings_from(&path).expect("load should succeed");

        assert_eq!(loaded, settings);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_dir("missing").join(SETTINGS_FILENAME);

        assert_eq!(load_settings_or_default(&path), GameSettings::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join(SETTINGS_FILENAME);
        fs::write(&path, "{ not json").expect("write scratch file");

        assert!(matches!(
            load_settings_from(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_clamps_depth() {
        let dir = scratch_dir("clamp");
        fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join(SETTINGS_FILENAME);
        fs::write(&path, r#"{ "search_depth": 99 }"#).expect("write scratch file");

        let loaded = load_settings_from(&path).expect("load should succeed");

        assert_eq!(loaded.search_depth, chess_engine::constants::MAX_SEARCH_DEPTH);
        let _ = fs::remove_dir_all(dir);
    }
}
