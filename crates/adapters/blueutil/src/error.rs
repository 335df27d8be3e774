//! blueutil adapter error types.

use std::process::ExitStatus;
use std::time::Duration;

use btswitch_domain::error::BtSwitchError;

/// Errors raised while running `blueutil`.
#[derive(Debug, thiserror::Error)]
pub enum BlueutilError {
    /// The program could not be started (missing binary, permissions, …).
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but reported failure.
    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The program did not finish within the configured timeout and was killed.
    #[error("{program} timed out after {}s", .after.as_secs())]
    Timeout { program: String, after: Duration },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl BlueutilError {
    /// Convert into a [`BtSwitchError::Connectivity`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> BtSwitchError {
        BtSwitchError::Connectivity(Box::new(self))
    }
}

impl From<BlueutilError> for BtSwitchError {
    fn from(err: BlueutilError) -> Self {
        err.into_domain()
    }
}
