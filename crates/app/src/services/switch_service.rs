//! Switch service — report, connect and disconnect every registry device.

use std::fmt;

use btswitch_domain::device::{Device, DeviceRegistry};
use btswitch_domain::error::BtSwitchError;
use btswitch_domain::status::{DeviceStatus, StatusResponse};

use crate::ports::Connectivity;

/// A state change requested for every device in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Connect,
    Disconnect,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Disconnect => f.write_str("disconnect"),
        }
    }
}

/// Application service driving the whole device registry.
///
/// Devices are handled one after another in registry order. A failure on one
/// device is recorded in its [`DeviceStatus`] and never stops the others, so
/// every use-case is infallible at the request level.
pub struct SwitchService<C> {
    registry: DeviceRegistry,
    connectivity: C,
}

impl<C: Connectivity> SwitchService<C> {
    /// Create a new service over `registry`, driving devices through `connectivity`.
    pub fn new(registry: DeviceRegistry, connectivity: C) -> Self {
        Self {
            registry,
            connectivity,
        }
    }

    /// The devices this service manages.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Probe every device without changing anything.
    #[tracing::instrument(skip(self), fields(devices = self.registry.len()))]
    pub async fn status(&self) -> StatusResponse {
        let mut devices = Vec::with_capacity(self.registry.len());
        for device in &self.registry {
            let status = match self.connectivity.is_connected(&device.address).await {
                Ok(connected) => DeviceStatus::connected(&device.name, connected),
                Err(err) => {
                    let message = err.to_message();
                    tracing::warn!(
                        device = %device.name,
                        address = %device.address,
                        error = %message,
                        "connection probe failed"
                    );
                    DeviceStatus::failed(&device.name, false, message)
                }
            };
            devices.push(status);
        }
        StatusResponse { devices }
    }

    /// Connect every device, then report the observed state.
    pub async fn connect_all(&self) -> StatusResponse {
        self.apply(Action::Connect).await
    }

    /// Disconnect every device, then report the observed state.
    pub async fn disconnect_all(&self) -> StatusResponse {
        self.apply(Action::Disconnect).await
    }

    /// Run `action` on every device and re-probe each one afterwards.
    ///
    /// The reported `connected` flag always comes from the re-probe, not from
    /// the outcome of the action.
    #[tracing::instrument(skip(self), fields(devices = self.registry.len()))]
    pub async fn apply(&self, action: Action) -> StatusResponse {
        let mut devices = Vec::with_capacity(self.registry.len());
        for device in &self.registry {
            let outcome = match action {
                Action::Connect => self.connectivity.connect(&device.address).await,
                Action::Disconnect => self.connectivity.disconnect(&device.address).await,
            };
            let probe = self.connectivity.is_connected(&device.address).await;
            devices.push(report(device, action, outcome, probe));
        }
        StatusResponse { devices }
    }
}

fn report(
    device: &Device,
    action: Action,
    outcome: Result<(), BtSwitchError>,
    probe: Result<bool, BtSwitchError>,
) -> DeviceStatus {
    let mut errors = Vec::new();

    if let Err(err) = outcome {
        let message = format!("failed to {action}: {}", err.to_message());
        tracing::warn!(
            device = %device.name,
            address = %device.address,
            error = %message,
            "action failed"
        );
        errors.push(message);
    }

    let connected = match probe {
        Ok(connected) => connected,
        Err(err) => {
            let message = format!("failed to query connection state: {}", err.to_message());
            tracing::warn!(
                device = %device.name,
                address = %device.address,
                error = %message,
                "re-probe failed"
            );
            errors.push(message);
            false
        }
    };

    if errors.is_empty() {
        tracing::debug!(device = %device.name, %action, connected, "device switched");
        DeviceStatus::connected(&device.name, connected)
    } else {
        DeviceStatus::failed(&device.name, connected, errors.join("; "))
    }
}
