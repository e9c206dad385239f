use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_GEOMETRY, MIN_WINDOW_SIZE};
use crate::geometry::WindowGeometry;

/// Persisted window state. Only the geometry descriptor is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub geometry: Option<String>,
}

impl WindowConfig {
    pub fn with_geometry(geometry: impl Into<String>) -> Self {
        Self {
            geometry: Some(geometry.into()),
        }
    }

    /// Read the record at `path`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Read the record at `path`, falling back to an empty record.
    ///
    /// A missing file is the normal first-run case and is not reported.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Failed to load window config, using defaults");
                Self::default()
            }
        }
    }

    /// Write the record to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string(self)?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Geometry to open the window with: the stored one if it parses, else the default.
    pub fn resolved_geometry(&self) -> WindowGeometry {
        let stored = self.geometry.as_deref().and_then(|g| match g.parse() {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring stored window geometry");
                None
            }
        });

        stored
            .unwrap_or_else(default_geometry)
            .clamp_to_min(MIN_WINDOW_SIZE)
    }
}

fn default_geometry() -> WindowGeometry {
    // The constant is a valid descriptor.
    DEFAULT_GEOMETRY
        .parse()
        .unwrap_or(WindowGeometry::new(800, 600, 100, 100))
}
