//! # btswitch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Connectivity` — probe, connect and disconnect a device by hardware address
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SwitchService` — report status of, connect, or disconnect every registry device
//! - Orchestrate domain objects without knowing *how* Bluetooth is driven
//!
//! ## Dependency rule
//! Depends on `btswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
