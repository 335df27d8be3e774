//! # btswitch-adapter-blueutil
//!
//! Connectivity adapter backed by [`blueutil`](https://github.com/toy/blueutil),
//! the command-line Bluetooth control utility.
//!
//! ## How it works
//!
//! Every port call spawns exactly one `blueutil` process and waits for it:
//!
//! | Port method | Invocation | Success |
//! |-------------|------------|---------|
//! | `is_connected` | `blueutil --is-connected <address>` | exit 0; connected iff stdout is `1\n` |
//! | `connect` | `blueutil --connect <address>` | exit 0 |
//! | `disconnect` | `blueutil --disconnect <address>` | exit 0 |
//!
//! Nothing is cached. Without a configured timeout a hung process blocks the
//! caller until it exits.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `btswitch-app` and `btswitch-domain`.

mod config;
mod error;

pub use config::BlueutilConfig;
pub use error::BlueutilError;

use std::process::Stdio;

use tokio::process::Command;

use btswitch_app::ports::Connectivity;
use btswitch_domain::address::HardwareAddress;
use btswitch_domain::error::BtSwitchError;

const IS_CONNECTED: &str = "--is-connected";
const CONNECT: &str = "--connect";
const DISCONNECT: &str = "--disconnect";

/// Interpret the stdout of `blueutil --is-connected`.
///
/// Only the exact output `1\n` means connected; anything else, including
/// `1` without a newline, is treated as disconnected.
#[must_use]
pub fn parse_connected(stdout: &[u8]) -> bool {
    stdout == b"1\n"
}

/// [`Connectivity`] implementation that shells out to `blueutil`.
#[derive(Debug, Clone, Default)]
pub struct BlueutilConnectivity {
    config: BlueutilConfig,
}

impl BlueutilConnectivity {
    #[must_use]
    pub fn new(config: BlueutilConfig) -> Self {
        Self { config }
    }

    /// Run `blueutil <flag> <address>` and return its stdout on success.
    async fn run(&self, flag: &str, address: &HardwareAddress) -> Result<Vec<u8>, BlueutilError> {
        let result = self.invoke(flag, address).await;
        if let Err(err) = &result {
            tracing::warn!(flag, %address, error = %err, "blueutil invocation failed");
        }
        result
    }

    async fn invoke(
        &self,
        flag: &str,
        address: &HardwareAddress,
    ) -> Result<Vec<u8>, BlueutilError> {
        let program = self.config.path.display().to_string();
        tracing::debug!(%program, flag, %address, "running blueutil");

        let mut command = Command::new(&self.config.path);
        command
            .arg(flag)
            .arg(address.as_str())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.config.timeout() {
            Some(after) => tokio::time::timeout(after, command.output())
                .await
                .map_err(|_| BlueutilError::Timeout {
                    program: program.clone(),
                    after,
                })?,
            None => command.output().await,
        }
        .map_err(|source| BlueutilError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(BlueutilError::Exit {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}

impl Connectivity for BlueutilConnectivity {
    async fn is_connected(&self, address: &HardwareAddress) -> Result<bool, BtSwitchError> {
        let stdout = self.run(IS_CONNECTED, address).await?;
        Ok(parse_connected(&stdout))
    }

    async fn connect(&self, address: &HardwareAddress) -> Result<(), BtSwitchError> {
        self.run(CONNECT, address).await?;
        Ok(())
    }

    async fn disconnect(&self, address: &HardwareAddress) -> Result<(), BtSwitchError> {
        self.run(DISCONNECT, address).await?;
        Ok(())
    }
}
