use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::artifacts_config::ArtifactsConfig;
use crate::structs::config::cache_config::CacheConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Action inputs keyed by their hyphenated name, e.g. `export-resolved-dependencies`.
    #[serde(default = "ConfigHelper::default_inputs")]
    pub inputs: HashMap<String, toml::Value>,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: ConfigHelper::default_inputs(),
            cache: CacheConfig::default(),
            artifacts: ArtifactsConfig::default(),
        }
    }
}
