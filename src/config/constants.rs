pub const BUILD_SCAN_MARKER: &str = "Publishing build scan...";
pub const BUILD_SCAN_URL_PREFIX: &str = "http";

pub const EXPORT_RESOLVED_DEPENDENCIES_INPUT: &str = "export-resolved-dependencies";
pub const RESOLVED_DEPENDENCIES_FILE: &str = "resolved-dependencies.json";
pub const RESOLVED_DEPENDENCIES_ARTIFACT: &str = "Resolved dependencies";

pub const GRADLE_USER_HOME_DIR: &str = ".gradle";
pub const INIT_SCRIPT_DIR: &str = ".gradle/init.d";
pub const INIT_SCRIPT_FILE: &str = "resolved-dependencies.gradle";

pub const CONFIG_DIR: &str = ".gradle-action";
pub const CONFIG_FILE: &str = ".gradle-action/config.toml";
pub const CACHE_DIR: &str = "cache";
pub const ARTIFACTS_DIR: &str = "artifacts";
pub const DEPENDENCIES_CACHE_ENTRY: &str = "dependencies";
pub const CONFIGURATION_CACHE_ENTRY: &str = "configuration";
pub const CONFIGURATION_CACHE_TARGET: &str = ".gradle/configuration-cache";

pub const INPUT_ENV_PREFIX: &str = "INPUT_";
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
pub const BUILD_SCAN_URL_OUTPUT: &str = "build-scan-url";

pub const DEFAULT_LOG_FILTER: &str = "info";
