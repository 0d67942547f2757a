//! Stored defaults.
//!
//! An optional `mcmap.toml` (or the file named by `MCMAP_CONFIG`) can change
//! the built-in defaults. It is applied before the command line, so flags
//! always win.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::dimension::Dimension;
use crate::settings::WorldOptions;

pub const CONFIG_FILE: &str = "mcmap.toml";
pub const CONFIG_ENV: &str = "MCMAP_CONFIG";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct McmapConfig {
    /// Output image path.
    pub output: Option<PathBuf>,
    /// Color table path. Not checked here; `-colors` is.
    pub colors: Option<PathBuf>,
    /// Dimension in `id` or `namespace:id` form.
    pub dimension: Option<String>,
    pub padding: Option<u16>,
    pub splits: Option<u16>,
    pub shading: Option<bool>,
    pub hide_water: Option<bool>,
    pub hide_beacons: Option<bool>,
    pub memory_limit_mb: Option<u64>,
}

impl McmapConfig {
    /// Where to look: `$MCMAP_CONFIG`, else `mcmap.toml` in `cwd`.
    pub fn locate(env_value: Option<PathBuf>, cwd: &Path) -> PathBuf {
        env_value.unwrap_or_else(|| cwd.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse settings file");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read settings file");
                Self::default()
            }
        }
    }

    /// Built-in defaults with this file's values on top.
    pub fn world_options(&self) -> WorldOptions {
        let mut opts = WorldOptions::default();
        if let Some(output) = &self.output {
            opts.out_file = output.clone();
        }
        if let Some(colors) = &self.colors {
            opts.color_file = colors.clone();
        }
        if let Some(dimension) = &self.dimension {
            opts.dimension = Dimension::parse(dimension);
        }
        if let Some(padding) = self.padding {
            opts.padding = padding;
        }
        // A zero split count would be rejected on the command line; ignore it here.
        if let Some(splits) = self.splits.filter(|s| *s > 0) {
            opts.splits = splits;
        }
        if let Some(shading) = self.shading {
            opts.shading = shading;
        }
        if let Some(hide_water) = self.hide_water {
            opts.hide_water = hide_water;
        }
        if let Some(hide_beacons) = self.hide_beacons {
            opts.hide_beacons = hide_beacons;
        }
        if let Some(megabytes) = self.memory_limit_mb.filter(|m| *m > 0) {
            opts.set_mem_limit_mb(megabytes);
        }
        opts
    }
}
