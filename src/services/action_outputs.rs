use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use crate::config::constants::BUILD_SCAN_URL_OUTPUT;
use crate::errors::{GradleActionError, GradleActionResult};
use crate::structs::build_result::BuildResult;

pub struct ActionOutputs;

impl ActionOutputs {
    /// Appends the step outputs for `result` to a `$GITHUB_OUTPUT` style file.
    pub fn write_build_result(output_file: &Path, result: &BuildResult) -> GradleActionResult<()> {
        if let Some(url) = result.build_scan_url() {
            Self::set_output(output_file, BUILD_SCAN_URL_OUTPUT, url)?;
        }
        Ok(())
    }

    pub fn set_output(output_file: &Path, name: &str, value: &str) -> GradleActionResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_file)
            .map_err(|e| GradleActionError::file_error(output_file, "open", e))?;

        writeln!(file, "{}={}", name, value).map_err(|e| GradleActionError::file_error(output_file, "append", e))
    }
}
