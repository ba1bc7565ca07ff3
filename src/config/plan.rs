use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, Result};

pub const DEFAULT_TARGET: &str = "RenderWindow.cpp";
/// Zero-based index of the duplicated line
pub const DEFAULT_DELETE_LINE: usize = 2709;
pub const DEFAULT_NEEDLE: &str = "vkUnmapMemory(dev, mBufferMemory)";
pub const DEFAULT_REPLACEMENT: &str = "vkUnmapMemory(device, mBufferMemory)";

/// What to patch and how
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PatchPlan {
    /// File rewritten in place by both steps
    pub target: PathBuf,

    /// Zero-based line index removed by the first step
    pub delete_line: usize,

    /// Literal text searched for by the second step
    pub needle: String,

    /// Literal text written in place of each match
    pub replacement: String,
}

impl Default for PatchPlan {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            delete_line: DEFAULT_DELETE_LINE,
            needle: DEFAULT_NEEDLE.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

impl PatchPlan {
    /// Load a plan from a TOML file; omitted keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading patch plan from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|e| PatchError::io_error(e, path))?;
        Self::from_toml(&raw).map_err(|e| PatchError::plan_error(e, path))
    }

    pub fn from_toml(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }
}
