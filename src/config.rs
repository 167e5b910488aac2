//! Configuration module for Mimoto
//!
//! Loads `mimoto.config.json` from the project root:
//!
//! ```json
//! {
//!   "combine": {
//!     "sources": ["src/templates", "src/pages"],
//!     "output": "dist/templates.html"
//!   },
//!   "components": {
//!     "mimoto-components": { "card": "widgets/card" }
//!   }
//! }
//! ```
//!
//! Component mappings use [`IndexMap`] so fragment order follows the order
//! entries appear in the config file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{MimotoError, MimotoResult};

/// Default config file name, resolved against the project root
pub const CONFIG_FILE: &str = "mimoto.config.json";

/// Top-level configuration (`mimoto.config.json`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub combine: CombineConfig,

    /// package name -> (component name -> path within the package)
    #[serde(default)]
    pub components: IndexMap<String, IndexMap<String, String>>,
}

/// The `combine` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CombineConfig {
    /// Source folders to collect and watch, relative to the project root
    #[serde(default)]
    pub sources: Vec<String>,

    /// Output file, relative to the project root
    #[serde(default)]
    pub output: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> MimotoResult<Self> {
        let raw = fs::read_to_string(path).map_err(|_| MimotoError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;

        serde_json::from_str(&raw).map_err(|e| MimotoError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check the invariants the engine relies on: both `combine.sources`
    /// and `combine.output` must be present and non-empty.
    pub fn validate(&self) -> MimotoResult<()> {
        if self.combine.sources.is_empty() {
            return Err(MimotoError::MissingSources);
        }
        if self.combine.output.is_empty() {
            return Err(MimotoError::MissingOutput);
        }
        Ok(())
    }

    /// Validate and resolve into engine options rooted at `project_root`.
    pub fn into_options(self, project_root: PathBuf) -> MimotoResult<CombineOptions> {
        self.validate()?;
        Ok(CombineOptions {
            project_root,
            sources: self.combine.sources,
            output: self.combine.output,
            components: self.components,
        })
    }
}

/// Resolved, validated options handed to the combine engine and watcher.
///
/// Constructed once at startup; there is no process-wide config state.
#[derive(Debug, Clone)]
pub struct CombineOptions {
    /// Absolute project root all relative paths resolve against
    pub project_root: PathBuf,
    /// Source folders, in configured order
    pub sources: Vec<String>,
    /// Output file
    pub output: String,
    /// Component mappings, insertion order preserved
    pub components: IndexMap<String, IndexMap<String, String>>,
}

impl CombineOptions {
    /// Source folders resolved against the project root
    pub fn source_roots(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .map(|s| self.project_root.join(s))
            .collect()
    }

    /// Output file resolved against the project root
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output)
    }
}
