//! Connectivity port — query and change the connection state of a peripheral.

use std::future::Future;

use btswitch_domain::address::HardwareAddress;
use btswitch_domain::error::BtSwitchError;

/// Drives the host's Bluetooth stack for a single device at a time.
///
/// Every call maps to exactly one interaction with the underlying tooling;
/// implementations must not cache results.
pub trait Connectivity {
    /// Report whether the device at `address` is currently connected.
    fn is_connected(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<bool, BtSwitchError>> + Send;

    /// Ask the host to connect the device at `address`.
    ///
    /// Success only means the request was accepted; callers should probe
    /// afterwards to learn the actual state.
    fn connect(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<(), BtSwitchError>> + Send;

    /// Ask the host to disconnect the device at `address`.
    fn disconnect(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<(), BtSwitchError>> + Send;
}

impl<T: Connectivity + Send + Sync> Connectivity for std::sync::Arc<T> {
    fn is_connected(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<bool, BtSwitchError>> + Send {
        (**self).is_connected(address)
    }

    fn connect(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<(), BtSwitchError>> + Send {
        (**self).connect(address)
    }

    fn disconnect(
        &self,
        address: &HardwareAddress,
    ) -> impl Future<Output = Result<(), BtSwitchError>> + Send {
        (**self).disconnect(address)
    }
}
