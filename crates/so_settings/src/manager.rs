use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::defaults::default_config_path;
use crate::geometry::WindowGeometry;
use crate::window_config::WindowConfig;

/// Loads the window record once, caches it, and writes geometry changes back.
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<WindowConfig>>,
}

impl ConfigManager {
    /// Manager for the default config location.
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = WindowConfig::load_or_default(&path);
        tracing::debug!(path = %path.display(), geometry = ?config.geometry, "Loaded window config");
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot copy of the current record.
    pub fn get(&self) -> WindowConfig {
        self.config.read().clone()
    }

    /// Geometry the main window should open with.
    pub fn initial_geometry(&self) -> WindowGeometry {
        self.config.read().resolved_geometry()
    }

    /// Store and persist a new geometry descriptor.
    ///
    /// The cached value is updated even when writing fails.
    pub fn save_geometry(&self, geometry: &str) -> anyhow::Result<()> {
        let snapshot = {
            let mut guard = self.config.write();
            guard.geometry = Some(geometry.to_string());
            guard.clone()
        };
        snapshot.save_to(&self.path)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
