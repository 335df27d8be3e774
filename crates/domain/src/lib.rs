//! # btswitch-domain
//!
//! Pure domain model for the btswitch Bluetooth connection switch.
//!
//! ## Responsibilities
//! - Foundational types: hardware addresses and error conventions
//! - Define **Devices** (a human-readable name bound to a hardware address)
//! - Define the **Device registry** (the fixed, ordered set of managed devices)
//! - Define **Status reports** (per-device connection state as served over HTTP)
//! - Contain all invariant enforcement (address format, unique names, …)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod address;
pub mod error;

pub mod device;
pub mod status;
