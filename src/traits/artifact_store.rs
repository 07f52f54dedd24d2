use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::errors::GradleActionResult;
use crate::structs::upload_response::UploadResponse;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Publishes `files` under `name`; item names are relative to `base_path`.
    async fn upload_artifact(&self, name: &str, files: &[PathBuf], base_path: &Path) -> GradleActionResult<UploadResponse>;
}
