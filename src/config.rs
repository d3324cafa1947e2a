use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;

static DEFAULT_EVENTS_PATH: &str = "~/parish/events.toml";
static DEFAULT_ANNOTATIONS_PATH: &str = "~/parish/annotations.json";

fn default_events_path() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_PATH)
}

fn default_annotations_path() -> PathBuf {
    PathBuf::from(DEFAULT_ANNOTATIONS_PATH)
}

/// Global configuration at ~/.config/parish/config.toml
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_events_path")]
    pub events_file: PathBuf,

    #[serde(default = "default_annotations_path")]
    pub annotations_file: PathBuf,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("parish");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// The events dataset path with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        expand(&self.events_file)
    }

    /// The annotations file path with `~` expanded.
    pub fn annotations_path(&self) -> PathBuf {
        expand(&self.annotations_file)
    }
}

fn expand(path: &std::path::Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
