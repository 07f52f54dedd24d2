use crate::config::constants::{BUILD_SCAN_MARKER, BUILD_SCAN_URL_PREFIX};
use crate::enums::scrape_state::ScrapeState;

/// Picks the build scan URL out of Gradle's console output.
///
/// After a line containing `Publishing build scan...`, the first following
/// line that starts with `http` (once trimmed) is taken as the URL. Lines in
/// between are ignored. When several scans are published, the last one wins.
#[derive(Debug, Default)]
pub struct BuildScanScraper {
    state: ScrapeState,
    build_scan_url: Option<String>,
}

impl BuildScanScraper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_line(&mut self, line: &str) {
        match self.state {
            ScrapeState::Idle => {
                if line.contains(BUILD_SCAN_MARKER) {
                    log::debug!("Build scan publishing detected, waiting for URL");
                    self.state = ScrapeState::AwaitingUrl;
                }
            }
            ScrapeState::AwaitingUrl => {
                let trimmed = line.trim();
                if trimmed.starts_with(BUILD_SCAN_URL_PREFIX) {
                    log::debug!("Captured build scan URL: {}", trimmed);
                    self.build_scan_url = Some(trimmed.to_string());
                    self.state = ScrapeState::Idle;
                }
            }
        }
    }

    pub fn state(&self) -> ScrapeState {
        self.state
    }

    pub fn build_scan_url(&self) -> Option<&str> {
        self.build_scan_url.as_deref()
    }

    pub fn into_build_scan_url(self) -> Option<String> {
        self.build_scan_url
    }
}
