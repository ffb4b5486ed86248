use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-project settings, read from `lessonplay.toml` in the working
/// directory. Flags always win over config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Transcript root holding the lesson folders.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// High/Low label table joined during summarize.
    #[serde(default)]
    pub labels: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
