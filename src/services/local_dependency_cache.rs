use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::config::constants::DEPENDENCIES_CACHE_ENTRY;
use crate::errors::GradleActionResult;
use crate::helpers::fs_helper::FsHelper;
use crate::traits::dependency_cache::DependencyCache;

/// Restores `<cache_dir>/dependencies` into `<gradle_user_home>/caches`.
/// Restore problems are logged and never fail the build.
pub struct LocalDependencyCache {
    cache_dir: PathBuf,
    gradle_user_home: PathBuf,
    enabled: bool,
}

impl LocalDependencyCache {
    pub fn new(cache_dir: PathBuf, gradle_user_home: PathBuf, enabled: bool) -> Self {
        Self {
            cache_dir,
            gradle_user_home,
            enabled,
        }
    }
}

#[async_trait]
impl DependencyCache for LocalDependencyCache {
    async fn restore_cached_dependencies(&self, root: &Path) -> GradleActionResult<()> {
        if !self.enabled {
            log::info!("Dependency cache is disabled");
            return Ok(());
        }

        let entry = self.cache_dir.join(DEPENDENCIES_CACHE_ENTRY);
        if !entry.is_dir() {
            log::info!("Dependency cache miss for {}", root.display());
            return Ok(());
        }

        let target = self.gradle_user_home.join("caches");
        match FsHelper::restore_directory(entry.clone(), target.clone()).await {
            Ok(copied) => log::info!("♻️ Restored {} dependency file(s) into {}", copied, target.display()),
            Err(e) => log::warn!("⚠️ Failed to restore dependency cache from {}: {}", entry.display(), e),
        }

        Ok(())
    }
}
