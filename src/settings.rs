//! Persisted user settings and the toggles the settings screen exposes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use grid_watchface_graphics::{
    ActiveDirections, DisplaySettings, ScrollDirection, WatchFaceState,
};
use serde_derive::{Deserialize, Serialize};

pub const KEY_ACTIVE_DIRECTION: &str = "active_direction";
pub const KEY_USE_24H: &str = "use_24h";

fn default_use_24h() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSettings {
    #[serde(default)]
    active_direction: Vec<String>,
    #[serde(default = "default_use_24h")]
    use_24h: bool,
}

impl From<DisplaySettings> for PersistedSettings {
    fn from(settings: DisplaySettings) -> Self {
        Self {
            active_direction: settings
                .directions
                .iter()
                .map(|direction| direction.name().to_string())
                .collect(),
            use_24h: settings.use_24h,
        }
    }
}

impl TryFrom<PersistedSettings> for DisplaySettings {
    type Error = anyhow::Error;

    fn try_from(persisted: PersistedSettings) -> anyhow::Result<Self> {
        let parsed = persisted
            .active_direction
            .iter()
            .map(|name| name.parse::<ScrollDirection>())
            .collect::<Result<Vec<_>, _>>()?;

        let directions: ActiveDirections = parsed.iter().copied().collect();
        if has_axis_conflict(&parsed) {
            log::warn!(
                "Conflicting scroll directions {:?}, keeping {:?}",
                persisted.active_direction,
                directions.iter().map(ScrollDirection::name).collect::<Vec<_>>()
            );
        }

        Ok(DisplaySettings {
            directions,
            use_24h: persisted.use_24h,
        })
    }
}

/// True when both directions of one axis were requested.
fn has_axis_conflict(parsed: &[ScrollDirection]) -> bool {
    parsed
        .iter()
        .any(|direction| parsed.contains(&direction.opposite()))
}

pub fn parse_settings(json: &str) -> anyhow::Result<DisplaySettings> {
    let persisted: PersistedSettings = serde_json::from_str(json)?;
    persisted.try_into()
}

pub fn settings_to_json(settings: DisplaySettings) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&PersistedSettings::from(
        settings,
    ))?)
}

/// Settings file plus the shared state the render loop reads.
///
/// Every change is written to disk and published before the call returns.
pub struct SettingsStore {
    path: PathBuf,
    settings: DisplaySettings,
    state: Arc<WatchFaceState>,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults if it does not
    /// exist yet.
    pub fn open(path: impl AsRef<Path>, state: Arc<WatchFaceState>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let settings = if path.exists() {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            parse_settings(&json)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        } else {
            log::info!("No settings at {}, using defaults", path.display());
            DisplaySettings::default()
        };

        state.publish_settings(settings);
        Ok(Self {
            path,
            settings,
            state,
        })
    }

    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    pub fn toggle_direction(&mut self, direction: ScrollDirection) -> anyhow::Result<()> {
        let mut settings = self.settings;
        settings.directions.toggle(direction);
        self.update(settings)
    }

    pub fn toggle_24h(&mut self) -> anyhow::Result<()> {
        let mut settings = self.settings;
        settings.use_24h = !settings.use_24h;
        self.update(settings)
    }

    fn update(&mut self, settings: DisplaySettings) -> anyhow::Result<()> {
        let json = settings_to_json(settings)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        self.settings = settings;
        self.state.publish_settings(settings);
        log::info!(
            "Settings updated: directions {:?}, 24h {}",
            settings.directions.iter().map(ScrollDirection::name).collect::<Vec<_>>(),
            settings.use_24h
        );
        Ok(())
    }
}
