use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "ConfigHelper::default_cache_enabled")]
    pub enabled: bool,

    /// Falls back to `<home>/.gradle-action/cache` when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_cache_enabled(),
            directory: None,
        }
    }
}
