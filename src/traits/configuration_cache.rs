use std::path::Path;
use async_trait::async_trait;
use crate::errors::GradleActionResult;

/// Restores the project's configuration cache before a build.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigurationCache: Send + Sync {
    async fn restore_cached_configuration(&self, root: &Path) -> GradleActionResult<()>;
}
