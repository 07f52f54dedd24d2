use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use crate::config::constants::{EXPORT_RESOLVED_DEPENDENCIES_INPUT, RESOLVED_DEPENDENCIES_ARTIFACT, RESOLVED_DEPENDENCIES_FILE};
use crate::errors::{GradleActionError, GradleActionResult};
use crate::services::build_scan_scraper::BuildScanScraper;
use crate::structs::build_result::BuildResult;
use crate::traits::artifact_store::ArtifactStore;
use crate::traits::configuration_cache::ConfigurationCache;
use crate::traits::dependency_cache::DependencyCache;
use crate::traits::input_source::InputSource;

pub struct BuildExecutor {
    dependency_cache: Arc<dyn DependencyCache>,
    configuration_cache: Arc<dyn ConfigurationCache>,
    inputs: Arc<dyn InputSource>,
    artifact_store: Arc<dyn ArtifactStore>,
}

impl BuildExecutor {
    pub fn new(
        dependency_cache: Arc<dyn DependencyCache>,
        configuration_cache: Arc<dyn ConfigurationCache>,
        inputs: Arc<dyn InputSource>,
        artifact_store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            dependency_cache,
            configuration_cache,
            inputs,
            artifact_store,
        }
    }

    /// Restores caches, runs `executable` in `root` and uploads the resolved
    /// dependencies report if requested.
    ///
    /// A non-zero exit code is reported through [`BuildResult::status`], never
    /// as an error. Errors come only from launching or reading the process and
    /// from the collaborators.
    pub async fn execute(&self, executable: &str, root: &Path, arguments: &[String]) -> GradleActionResult<BuildResult> {
        self.dependency_cache.restore_cached_dependencies(root).await?;
        self.configuration_cache.restore_cached_configuration(root).await?;

        let (status, build_scan_url) = Self::run_build(executable, root, arguments).await?;

        self.upload_resolved_dependencies(root).await?;

        Ok(BuildResult::new(status, build_scan_url))
    }

    async fn run_build(executable: &str, root: &Path, arguments: &[String]) -> GradleActionResult<(i32, Option<String>)> {
        log::info!("🐘 Running {} {} in {}", executable, arguments.join(" "), root.display());

        let mut child = Command::new(executable)
            .args(arguments)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| GradleActionError::launch_error(executable, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| GradleActionError::process_io_error(executable, "stdout was not captured"))?;

        let mut scraper = BuildScanScraper::new();
        let mut segments = BufReader::new(stdout).split(b'\n');

        while let Some(segment) = segments
            .next_segment()
            .await
            .map_err(|e| GradleActionError::process_io_error(executable, e))?
        {
            let line = Self::decode_line(&segment);
            println!("{}", line);
            scraper.process_line(&line);
        }

        let status = child
            .wait()
            .await
            .map_err(|e| GradleActionError::process_io_error(executable, e))?;

        let code = Self::exit_code(status);
        log::debug!("{} exited with status {}", executable, code);

        Ok((code, scraper.into_build_scan_url()))
    }

    async fn upload_resolved_dependencies(&self, base_directory: &Path) -> GradleActionResult<()> {
        if !self.inputs.input_boolean(EXPORT_RESOLVED_DEPENDENCIES_INPUT) {
            return Ok(());
        }

        let json_file = std::path::absolute(base_directory.join(RESOLVED_DEPENDENCIES_FILE))
            .map_err(|e| GradleActionError::file_error(base_directory, "resolve", e))?;

        if json_file.exists() {
            log::info!("📦 Uploading resolved dependencies artifact");
            let response = self
                .artifact_store
                .upload_artifact(RESOLVED_DEPENDENCIES_ARTIFACT, &[json_file], base_directory)
                .await?;
            log::debug!("Uploaded {} item(s), {} bytes", response.artifact_items.len(), response.size);
        } else {
            log::info!("Resolved dependencies file {} not found", json_file.display());
        }

        Ok(())
    }

    fn decode_line(segment: &[u8]) -> String {
        let segment = segment.strip_suffix(b"\r").unwrap_or(segment);
        String::from_utf8_lossy(segment).into_owned()
    }

    fn exit_code(status: ExitStatus) -> i32 {
        if let Some(code) = status.code() {
            return code;
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return 128 + signal;
            }
        }

        1
    }
}
