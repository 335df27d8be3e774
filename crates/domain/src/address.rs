//! Hardware (MAC) address of a Bluetooth peripheral.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const OCTETS: usize = 6;

/// A validated Bluetooth hardware address such as `A4:C1:38:0E:5B:11`.
///
/// Octets are separated uniformly by `:` or `-`. The text is kept exactly as
/// configured so it can be handed to external tools verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HardwareAddress(String);

impl HardwareAddress {
    /// Parse and validate an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when the text is not six
    /// two-digit hex octets joined by a single kind of separator.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidAddress(text.to_string());

        let separator = text.chars().nth(2).ok_or_else(invalid)?;
        if separator != ':' && separator != '-' {
            return Err(invalid());
        }

        let mut count = 0;
        for octet in text.split(separator) {
            count += 1;
            if octet.len() != 2 || !octet.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
        }
        if count != OCTETS {
            return Err(invalid());
        }

        Ok(Self(text.to_string()))
    }

    /// The address exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HardwareAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HardwareAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HardwareAddress> for String {
    fn from(value: HardwareAddress) -> Self {
        value.0
    }
}
