use std::path::Path;
use async_trait::async_trait;
use crate::errors::GradleActionResult;

/// Restores Gradle's downloaded dependencies before a build.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependencyCache: Send + Sync {
    async fn restore_cached_dependencies(&self, root: &Path) -> GradleActionResult<()>;
}
