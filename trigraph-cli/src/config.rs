//! Configuration loading from `.trigraphrc.toml`.
//!
//! Configuration is optional: every setting has a default, and command-line
//! flags override whatever the file says.
//!
//! # Example Configuration
//!
//! ```toml
//! [graph]
//! file = "data/graph.json"
//!
//! [search]
//! max_depth = 4
//!
//! [output]
//! format = "json"
//! color = false
//! compact = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use trigraph_core::DEFAULT_MAX_DEPTH;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".trigraphrc.toml";

/// Graph file used when neither `--file` nor `[graph].file` is given.
pub const DEFAULT_GRAPH_FILE: &str = "graph.json";

/// Root configuration structure loaded from `.trigraphrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct TrigraphConfig {
    /// Where the graph document lives.
    #[serde(default)]
    pub graph: GraphSection,

    /// Deep search defaults.
    #[serde(default)]
    pub search: SearchSection,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct GraphSection {
    /// Path of the JSON graph file, relative to the working directory.
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchSection {
    /// Default `--depth` for `trigraph search` and interactive deep search.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Output formatting preferences.
///
/// `--format` on the command line overrides `format`.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`
    #[serde(default)]
    pub format: Option<String>,

    /// Force colors on or off. Unset means auto-detect from the TTY.
    #[serde(default)]
    pub color: Option<bool>,

    /// Single-line JSON and borderless tables. `--compact` turns it on too.
    #[serde(default)]
    pub compact: bool,
}

impl TrigraphConfig {
    /// Load configuration from `.trigraphrc.toml` in the given directory.
    ///
    /// Missing files yield defaults. Read and parse errors are logged as
    /// warnings and also yield defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Graph file path: explicit override, then config, then `graph.json`.
    pub fn graph_file(&self, root: &Path, cli_override: Option<&Path>) -> PathBuf {
        match cli_override {
            Some(path) => root.join(path),
            None => root.join(self.graph.file.as_deref().unwrap_or(DEFAULT_GRAPH_FILE)),
        }
    }

    /// Default DFS depth.
    pub fn max_depth(&self) -> usize {
        self.search.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn compact(&self) -> bool {
        self.output.compact
    }
}
