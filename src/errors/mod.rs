use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradleActionError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    // Process errors
    #[error("Failed to launch '{executable}': {reason}")]
    ProcessLaunch {
        executable: String,
        reason: String,
    },
    #[error("I/O failure while running '{executable}': {reason}")]
    ProcessIo {
        executable: String,
        reason: String,
    },

    // File operation errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Collaborator errors
    #[error("Cache '{cache}' failed during {operation}: {reason}")]
    Cache {
        cache: String,
        operation: String,
        reason: String,
    },
    #[error("Upload of artifact '{artifact}' failed: {reason}")]
    Upload {
        artifact: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl GradleActionError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &Path, operation: &str, reason: impl ToString) -> Self {
        Self::FileOperation {
            file_path: file_path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn launch_error(executable: &str, reason: impl ToString) -> Self {
        Self::ProcessLaunch {
            executable: executable.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn process_io_error(executable: &str, reason: impl ToString) -> Self {
        Self::ProcessIo {
            executable: executable.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn cache_error(cache: &str, operation: &str, reason: impl ToString) -> Self {
        Self::Cache {
            cache: cache.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn upload_error(artifact: &str, reason: impl ToString) -> Self {
        Self::Upload {
            artifact: artifact.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ProcessLaunch { .. } => ErrorSeverity::Critical,
            Self::ProcessIo { .. } => ErrorSeverity::High,
            Self::FileOperation { .. } => ErrorSeverity::High,
            Self::Upload { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::HomeDirectoryNotFound => ErrorSeverity::High,
            Self::Cache { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { field: Some(field), .. } => {
                format!("{} (field: {})\n💡 Check the [inputs], [cache] and [artifacts] tables", self, field)
            }
            Self::ConfigurationFileError { .. } => {
                format!("{}\n💡 Check file permissions and TOML syntax", self)
            }
            Self::HomeDirectoryNotFound => {
                format!("{}\n💡 Pass --home explicitly", self)
            }
            Self::ProcessLaunch { .. } => {
                format!("{}\n💡 Check that the executable exists and is runnable", self)
            }
            Self::FileOperation { .. } => {
                format!("{}\n💡 Check file permissions and path", self)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for gradle-action operations
pub type GradleActionResult<T> = Result<T, GradleActionError>;

/// Error handler for consistent error reporting
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &GradleActionError) {
        let severity = error.severity();

        log::debug!("[{}] {:?}", severity.name(), error);
        log::error!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for GradleActionError {
    fn from(error: std::io::Error) -> Self {
        GradleActionError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GradleActionError {
    fn from(error: serde_json::Error) -> Self {
        GradleActionError::SystemError {
            operation: "JSON serialization".to_string(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_failures_are_critical() {
        let error = GradleActionError::launch_error("./gradlew", "No such file or directory");
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(error.to_string().contains("./gradlew"));
        assert!(error.user_message().contains("💡"));
    }

    #[test]
    fn severity_orders_from_low_to_critical() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::High < ErrorSeverity::Critical);
    }

    #[test]
    fn io_errors_become_system_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: GradleActionError = io.into();
        assert!(matches!(error, GradleActionError::SystemError { .. }));
    }
}
