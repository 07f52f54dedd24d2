#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapeState {
    #[default]
    Idle,
    /// The publish marker was seen; the next URL-looking line is the scan.
    AwaitingUrl,
}
