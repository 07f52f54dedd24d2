use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::config::constants::{CONFIGURATION_CACHE_ENTRY, CONFIGURATION_CACHE_TARGET};
use crate::errors::GradleActionResult;
use crate::helpers::fs_helper::FsHelper;
use crate::traits::configuration_cache::ConfigurationCache;

/// Restores `<cache_dir>/configuration` into `<root>/.gradle/configuration-cache`.
pub struct LocalConfigurationCache {
    cache_dir: PathBuf,
    enabled: bool,
}

impl LocalConfigurationCache {
    pub fn new(cache_dir: PathBuf, enabled: bool) -> Self {
        Self { cache_dir, enabled }
    }
}

#[async_trait]
impl ConfigurationCache for LocalConfigurationCache {
    async fn restore_cached_configuration(&self, root: &Path) -> GradleActionResult<()> {
        if !self.enabled {
            log::info!("Configuration cache is disabled");
            return Ok(());
        }

        let entry = self.cache_dir.join(CONFIGURATION_CACHE_ENTRY);
        if !entry.is_dir() {
            log::info!("Configuration cache miss for {}", root.display());
            return Ok(());
        }

        let target = root.join(CONFIGURATION_CACHE_TARGET);
        match FsHelper::restore_directory(entry.clone(), target.clone()).await {
            Ok(copied) => log::info!("♻️ Restored {} configuration cache file(s) into {}", copied, target.display()),
            Err(e) => log::warn!("⚠️ Failed to restore configuration cache from {}: {}", entry.display(), e),
        }

        Ok(())
    }
}
