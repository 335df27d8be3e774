//! blueutil adapter configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// How to invoke `blueutil`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlueutilConfig {
    /// Program to execute, looked up on `PATH` when not absolute.
    pub path: PathBuf,
    /// Kill an invocation that runs longer than this many seconds.
    ///
    /// Unset means wait forever: a hung `blueutil` then stalls the request.
    pub timeout_secs: Option<u64>,
}

impl BlueutilConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BlueutilConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("blueutil"),
            timeout_secs: None,
        }
    }
}
