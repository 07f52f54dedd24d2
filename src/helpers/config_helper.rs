use std::collections::HashMap;
use std::path::{Path, PathBuf};
use crate::config::constants::{ARTIFACTS_DIR, CACHE_DIR, CONFIG_DIR, CONFIG_FILE};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_config_path(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE)
    }

    pub fn default_cache_directory(home: &Path) -> PathBuf {
        home.join(CONFIG_DIR).join(CACHE_DIR)
    }

    pub fn default_artifacts_directory(home: &Path) -> PathBuf {
        home.join(CONFIG_DIR).join(ARTIFACTS_DIR)
    }

    pub fn default_cache_enabled() -> bool {
        true
    }

    pub fn default_inputs() -> HashMap<String, toml::Value> {
        HashMap::new()
    }
}
