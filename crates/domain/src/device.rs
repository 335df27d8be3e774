//! Device — a named Bluetooth peripheral, and the registry of managed devices.

use std::collections::HashSet;

use crate::address::HardwareAddress;
use crate::error::{BtSwitchError, ValidationError};

/// A Bluetooth peripheral managed by btswitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub address: HardwareAddress,
}

impl Device {
    /// Create a device, checking that the name is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty or
    /// whitespace only.
    pub fn new(name: impl Into<String>, address: HardwareAddress) -> Result<Self, BtSwitchError> {
        let device = Self {
            name: name.into(),
            address,
        };
        device.validate()?;
        Ok(device)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BtSwitchError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), BtSwitchError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// The fixed, ordered set of devices served by the API.
///
/// Built once at start-up and never mutated. Iteration follows insertion
/// order so responses are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Build a registry from devices in the order they should be reported.
    ///
    /// # Errors
    ///
    /// Returns [`BtSwitchError::Validation`] when a device is invalid or two
    /// devices share a name.
    pub fn new(devices: Vec<Device>) -> Result<Self, BtSwitchError> {
        {
            let mut seen = HashSet::with_capacity(devices.len());
            for device in &devices {
                device.validate()?;
                if !seen.insert(device.name.as_str()) {
                    return Err(ValidationError::DuplicateName(device.name.clone()).into());
                }
            }
        }
        Ok(Self { devices })
    }

    /// Iterate over devices in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, address: &str) -> Device {
        Device::new(name, HardwareAddress::parse(address).unwrap()).unwrap()
    }

    #[test]
    fn should_reject_blank_name() {
        let address = HardwareAddress::parse("00:11:22:33:44:55").unwrap();
        let result = Device::new("  ", address);
        assert!(matches!(
            result,
            Err(BtSwitchError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_preserve_insertion_order() {
        let registry = DeviceRegistry::new(vec![
            device("trackpad", "00:11:22:33:44:55"),
            device("keyboard", "66:77:88:99:AA:BB"),
            device("headphones", "CC:DD:EE:FF:00:11"),
        ])
        .unwrap();

        let names: Vec<&str> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["trackpad", "keyboard", "headphones"]);
    }

    #[test]
    fn should_reject_duplicate_names() {
        let result = DeviceRegistry::new(vec![
            device("keyboard", "00:11:22:33:44:55"),
            device("keyboard", "66:77:88:99:AA:BB"),
        ]);
        assert!(matches!(
            result,
            Err(BtSwitchError::Validation(ValidationError::DuplicateName(name))) if name == "keyboard"
        ));
    }

    #[test]
    fn should_allow_same_address_under_different_names() {
        let registry = DeviceRegistry::new(vec![
            device("keyboard", "00:11:22:33:44:55"),
            device("keyboard-alias", "00:11:22:33:44:55"),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn should_build_empty_registry() {
        let registry = DeviceRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
