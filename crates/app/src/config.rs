//! Settings persistence: one JSON file under the platform config dir.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use shared::AppSettings;

fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("com.local", "Soulingo", "Soulingo")
        .map(|p| p.config_dir().join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("./settings.json"))
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable. A malformed file is reported, not fatal.
pub fn load_settings() -> AppSettings {
    let path = settings_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "malformed settings, using defaults");
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
