use serde::{Deserialize, Serialize};

/// Outcome of one Gradle invocation.
///
/// A failed build is still a successful `BuildResult`: callers inspect
/// `status` rather than expecting an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_scan_url: Option<String>,
}

impl BuildResult {
    pub fn new(status: i32, build_scan_url: Option<String>) -> Self {
        Self { status, build_scan_url }
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn build_scan_url(&self) -> Option<&str> {
        self.build_scan_url.as_deref()
    }

    pub fn succeeded(&self) -> bool {
        self.status == 0
    }
}
