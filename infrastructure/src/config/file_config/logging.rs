//! Log output configuration (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling log files. Logs go to stderr only when unset.
    pub directory: Option<PathBuf>,
    /// File name prefix inside `directory`
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "bergs-site.log".to_string(),
        }
    }
}
