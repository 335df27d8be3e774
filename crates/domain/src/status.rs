//! Status reports — per-device connection state as returned by the API.

use serde::{Deserialize, Serialize};

/// Observed connection state of one device, produced fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Registry name of the device.
    pub device: String,
    pub connected: bool,
    /// Why the state could not be observed or changed, if anything failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeviceStatus {
    /// A status for a device whose tooling answered without error.
    #[must_use]
    pub fn connected(device: impl Into<String>, connected: bool) -> Self {
        Self {
            device: device.into(),
            connected,
            error: None,
        }
    }

    /// A status for a device whose probe or action failed.
    ///
    /// An empty message is stored as no error so the JSON field is omitted.
    #[must_use]
    pub fn failed(device: impl Into<String>, connected: bool, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            device: device.into(),
            connected,
            error: (!error.is_empty()).then_some(error),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Status of every registry device, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub devices: Vec<DeviceStatus>,
}

impl FromIterator<DeviceStatus> for StatusResponse {
    fn from_iter<I: IntoIterator<Item = DeviceStatus>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}
