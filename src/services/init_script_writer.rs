use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use crate::config::constants::{INIT_SCRIPT_DIR, INIT_SCRIPT_FILE};
use crate::errors::{GradleActionError, GradleActionResult};

/// Gradle init script that writes `resolved-dependencies.json` into the root
/// project directory when the build finishes.
pub const RESOLVED_DEPENDENCIES_INIT_SCRIPT: &str = include_str!("../../resources/resolved-dependencies.gradle");

pub struct InitScriptWriter;

impl InitScriptWriter {
    pub fn script_path(home: &Path) -> PathBuf {
        Self::script_dir(home).join(INIT_SCRIPT_FILE)
    }

    fn script_dir(home: &Path) -> PathBuf {
        home.join(INIT_SCRIPT_DIR)
    }

    /// Installs the init script under `<home>/.gradle/init.d` unless a script
    /// is already there. Returns whether anything was written.
    ///
    /// An existing script is never overwritten, even if its content differs.
    pub fn write_init_script(home: &Path) -> GradleActionResult<bool> {
        let script_path = Self::script_path(home);
        if script_path.exists() {
            log::debug!("Init script already present at {}", script_path.display());
            return Ok(false);
        }

        let script_dir = Self::script_dir(home);
        fs::create_dir_all(&script_dir)
            .map_err(|e| GradleActionError::file_error(&script_dir, "create directory", e))?;

        log::info!("Writing init script");

        // AlreadyExists here means another installer won the race
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&script_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(GradleActionError::file_error(&script_path, "create", e)),
        };

        file.write_all(RESOLVED_DEPENDENCIES_INIT_SCRIPT.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| GradleActionError::file_error(&script_path, "write", e))?;

        log::info!("✅ Init script written to {}", script_path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn script_lives_in_gradle_init_d() {
        let path = InitScriptWriter::script_path(Path::new("/home/runner"));
        assert_eq!(path, PathBuf::from("/home/runner/.gradle/init.d/resolved-dependencies.gradle"));
    }

    #[test]
    fn payload_exports_resolved_dependencies() {
        assert!(RESOLVED_DEPENDENCIES_INIT_SCRIPT.contains("resolved-dependencies.json"));
        assert!(RESOLVED_DEPENDENCIES_INIT_SCRIPT.contains("gradle.buildFinished"));
    }

    #[test]
    fn creates_missing_directories_then_writes() {
        let home = tempdir().unwrap();
        assert!(!home.path().join(".gradle").exists());

        let written = InitScriptWriter::write_init_script(home.path()).unwrap();

        assert!(written);
        assert!(home.path().join(".gradle/init.d").is_dir());
        let content = fs::read(InitScriptWriter::script_path(home.path())).unwrap();
        assert_eq!(content, RESOLVED_DEPENDENCIES_INIT_SCRIPT.as_bytes());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let home = tempdir().unwrap();

        assert!(InitScriptWriter::write_init_script(home.path()).unwrap());
        assert!(!InitScriptWriter::write_init_script(home.path()).unwrap());
    }

    #[test]
    fn never_overwrites_an_existing_script() {
        let home = tempdir().unwrap();
        let path = InitScriptWriter::script_path(home.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "// older version").unwrap();

        let written = InitScriptWriter::write_init_script(home.path()).unwrap();

        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// older version");
    }

    #[test]
    fn filesystem_errors_are_fatal() {
        let home = tempdir().unwrap();
        // a regular file where the .gradle directory should be
        fs::write(home.path().join(".gradle"), "").unwrap();

        let err = InitScriptWriter::write_init_script(home.path()).unwrap_err();

        assert!(matches!(err, GradleActionError::FileOperation { .. }));
    }
}
