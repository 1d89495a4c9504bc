//! Configuration for paragen.
//!
//! Loads config from:
//! 1. Global: ~/.config/paragen/config.toml
//! 2. Per-project: .paragen/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [output]
//! out_dir = "src/generated"
//! imports = ["use crate::convert::*;"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory generated modules are written under.
    pub out_dir: Option<PathBuf>,
    /// Import lines added to every generated file.
    pub imports: Vec<String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ParagenConfig {
    pub output: OutputConfig,
}

impl ParagenConfig {
    /// Output root used when neither the command line nor config names one.
    pub const DEFAULT_OUT_DIR: &'static str = "src";

    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/paragen/config.toml,
    /// then merges with per-project config from .paragen/config.toml.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = Self::global_config_path().and_then(|p| Self::load_file(&p)) {
            config = config.merge(global);
        }

        let project_path = root.join(".paragen").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// The output root, resolved against `root` when relative.
    pub fn out_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .output
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUT_DIR));
        root.join(dir)
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("paragen").join("config.toml"))
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Merge another config into this one. `other` wins where it sets a value;
    /// imports accumulate.
    fn merge(self, other: Self) -> Self {
        let mut imports = self.output.imports;
        for import in other.output.imports {
            if !imports.contains(&import) {
                imports.push(import);
            }
        }
        Self {
            output: OutputConfig {
                out_dir: other.output.out_dir.or(self.output.out_dir),
                imports,
            },
        }
    }
}
