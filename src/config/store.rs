// SPDX-License-Identifier: MPL-2.0
//! Settings stores and the layout store handed to panels.

use super::{load_from_path, save_to_path, LayoutSettings, LayoutSettingsPatch, PinRegister};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Synchronous key-value access to the persisted layout settings.
pub trait SettingsStore: Send + Sync {
    /// Returns a snapshot of the current settings.
    fn get(&self) -> LayoutSettings;

    /// Applies a partial update.
    fn set(&self, patch: LayoutSettingsPatch);
}

fn lock(settings: &Mutex<LayoutSettings>) -> MutexGuard<'_, LayoutSettings> {
    settings.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Settings kept in memory only.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<LayoutSettings>,
}

impl MemorySettingsStore {
    /// Creates a store holding `settings`.
    #[must_use]
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self) -> LayoutSettings {
        lock(&self.settings).clone()
    }

    fn set(&self, patch: LayoutSettingsPatch) {
        lock(&self.settings).apply(patch);
    }
}

/// Settings backed by a TOML file, written through on every `set`.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    settings: Mutex<LayoutSettings>,
}

impl FileSettingsStore {
    /// Opens the store at `path`, starting from defaults if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = if path.exists() {
            load_from_path(&path)?
        } else {
            LayoutSettings::default()
        };
        Ok(Self {
            path,
            settings: Mutex::new(settings),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self) -> LayoutSettings {
        lock(&self.settings).clone()
    }

    fn set(&self, patch: LayoutSettingsPatch) {
        let snapshot = {
            let mut settings = lock(&self.settings);
            settings.apply(patch);
            settings.clone()
        };
        // A failed write keeps the in-memory value; the next set retries.
        if let Err(err) = save_to_path(&snapshot, &self.path) {
            tracing::warn!(path = %self.path.display(), %err, "failed to save layout settings");
        }
    }
}

/// Layout store shared by every panel: persisted settings plus the
/// ephemeral dock pin.
#[derive(Clone)]
pub struct LayoutStore {
    settings: Arc<dyn SettingsStore>,
    pins: PinRegister,
}

impl LayoutStore {
    /// Creates a layout store over a settings store with a fresh pin slot.
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            settings,
            pins: PinRegister::new(),
        }
    }

    /// In-memory store with default settings.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySettingsStore::default()))
    }

    /// Returns a snapshot of the settings.
    #[must_use]
    pub fn settings(&self) -> LayoutSettings {
        self.settings.get()
    }

    /// Applies a partial settings update.
    pub fn update(&self, patch: LayoutSettingsPatch) {
        self.settings.set(patch);
    }

    /// The shared pin register.
    #[must_use]
    pub fn pins(&self) -> &PinRegister {
        &self.pins
    }
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("settings", &self.settings.get())
            .field("pins", &self.pins)
            .finish()
    }
}
