use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use crate::errors::{GradleActionError, GradleActionResult};
use crate::structs::upload_response::UploadResponse;
use crate::traits::artifact_store::ArtifactStore;

/// Stores artifacts as plain directories: `<artifacts_dir>/<name>/<relative path>`.
pub struct LocalArtifactStore {
    artifacts_dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(artifacts_dir: PathBuf) -> Self {
        Self { artifacts_dir }
    }

    fn item_name(name: &str, file: &Path, base_path: &Path) -> GradleActionResult<PathBuf> {
        let file = std::path::absolute(file).map_err(|e| GradleActionError::upload_error(name, e))?;
        let base_path = std::path::absolute(base_path).map_err(|e| GradleActionError::upload_error(name, e))?;

        match file.strip_prefix(&base_path) {
            Ok(relative) if !relative.as_os_str().is_empty() => Ok(relative.to_path_buf()),
            _ => file
                .file_name()
                .map(PathBuf::from)
                .ok_or_else(|| GradleActionError::upload_error(name, format!("{} has no file name", file.display()))),
        }
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn upload_artifact(&self, name: &str, files: &[PathBuf], base_path: &Path) -> GradleActionResult<UploadResponse> {
        let artifact_dir = self.artifacts_dir.join(name);
        let mut response = UploadResponse {
            artifact_name: name.to_string(),
            ..Default::default()
        };

        for file in files {
            let item = Self::item_name(name, file, base_path)?;
            let destination = artifact_dir.join(&item);

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| GradleActionError::upload_error(name, e))?;
            }

            let bytes = fs::copy(file, &destination)
                .await
                .map_err(|e| GradleActionError::upload_error(name, format!("{}: {}", file.display(), e)))?;

            response.artifact_items.push(item.to_string_lossy().into_owned());
            response.size += bytes;
        }

        log::info!(
            "📤 Stored artifact '{}' ({} item(s), {} bytes) in {}",
            name,
            response.artifact_items.len(),
            response.size,
            artifact_dir.display()
        );

        Ok(response)
    }
}
