use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ArtifactsConfig {
    /// Falls back to `<home>/.gradle-action/artifacts` when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
