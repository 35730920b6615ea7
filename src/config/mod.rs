// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted panel layout settings: default panel
//! size, the side panels open on, and which panel kinds are maximized.
//! Settings are stored in a `layout.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use panel_lens::config::{self, LayoutSettings};
//! use panel_lens::domain::panel::PositionSide;
//! use std::path::PathBuf;
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! settings.position_side = PositionSide::Right;
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("layout.toml");
//! config::save_to_path(&settings, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.position_side, PositionSide::Right);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;
mod pin;
mod store;

use crate::domain::panel::{ModalType, PositionSide};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use pin::PinRegister;
pub use store::{FileSettingsStore, LayoutStore, MemorySettingsStore, SettingsStore};

const CONFIG_FILE: &str = "layout.toml";
const APP_NAME: &str = "PanelLens";

/// Persisted panel layout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Width new panels open with.
    pub default_width: f32,
    /// Height new panels open with.
    pub default_height: f32,
    /// Side new panels open on.
    pub position_side: PositionSide,
    /// Maximized flag per panel kind, keyed by [`ModalType::key`].
    pub maximized: BTreeMap<String, bool>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_PANEL_WIDTH,
            default_height: DEFAULT_PANEL_HEIGHT,
            position_side: PositionSide::default(),
            maximized: BTreeMap::new(),
        }
    }
}

impl LayoutSettings {
    /// Returns whether panels of this kind open maximized.
    #[must_use]
    pub fn is_maximized(&self, modal: ModalType) -> bool {
        self.maximized.get(modal.key()).copied().unwrap_or(false)
    }

    /// Applies every field present in `patch`.
    pub fn apply(&mut self, patch: LayoutSettingsPatch) {
        if let Some(width) = patch.default_width {
            self.default_width = width;
        }
        if let Some(height) = patch.default_height {
            self.default_height = height;
        }
        if let Some(side) = patch.position_side {
            self.position_side = side;
        }
        for (modal, flag) in patch.maximized {
            self.maximized.insert(modal.key().to_string(), flag);
        }
    }
}

/// Partial update for [`LayoutSettings`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSettingsPatch {
    pub default_width: Option<f32>,
    pub default_height: Option<f32>,
    pub position_side: Option<PositionSide>,
    pub maximized: Vec<(ModalType, bool)>,
}

impl LayoutSettingsPatch {
    /// Patch that only changes the default size.
    #[must_use]
    pub fn size(width: f32, height: f32) -> Self {
        Self {
            default_width: Some(width),
            default_height: Some(height),
            ..Self::default()
        }
    }

    /// Patch that only changes one maximized flag.
    #[must_use]
    pub fn maximized(modal: ModalType, flag: bool) -> Self {
        Self {
            maximized: vec![(modal, flag)],
            ..Self::default()
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<LayoutSettings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(LayoutSettings::default())
}

pub fn save(settings: &LayoutSettings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

/// Loads settings from `path`; unparsable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<LayoutSettings> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid layout settings, using defaults");
            Ok(LayoutSettings::default())
        }
    }
}

pub fn save_to_path(settings: &LayoutSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
