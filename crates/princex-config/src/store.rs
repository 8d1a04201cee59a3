//! Settings stores: where the resolver reads its per-request snapshot.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::ConfigError;
use crate::loader::ConfigLoader;
use crate::schema::Settings;

/// Read access to the user's settings.
///
/// Each call returns an independent snapshot; callers never observe a
/// settings change halfway through a resolution.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<Settings, ConfigError>;
}

/// Settings backed by a TOML file, re-read on every load.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> Result<Settings, ConfigError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => ConfigLoader::load_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }
}

/// In-memory settings, for embedding and tests.
#[derive(Clone, Default)]
pub struct StaticSettingsStore {
    settings: Arc<RwLock<Settings>>,
}

impl StaticSettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the stored settings; later loads see the new value.
    pub fn set(&self, settings: Settings) {
        *self.settings.write() = settings;
    }
}

#[async_trait]
impl SettingsStore for StaticSettingsStore {
    async fn load(&self) -> Result<Settings, ConfigError> {
        Ok(self.settings.read().clone())
    }
}
