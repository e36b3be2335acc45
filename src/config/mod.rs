#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{DirectoryConfig, SourceType};

use crate::adapters::{EmbeddedSample, LocalJsonFile};
use crate::core::{Dataset, DatasetSource};
use crate::utils::error::Result;

/// A dataset source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Embedded(EmbeddedSample),
    JsonFile(LocalJsonFile),
}

impl DatasetSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Embedded(source) => source.describe(),
            ConfiguredSource::JsonFile(source) => source.describe(),
        }
    }

    async fn load(&self) -> Result<Dataset> {
        match self {
            ConfiguredSource::Embedded(source) => source.load().await,
            ConfiguredSource::JsonFile(source) => source.load().await,
        }
    }
}
