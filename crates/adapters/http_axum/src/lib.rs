//! # btswitch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/status`, `/connect`, `/disconnect`)
//! - Reject non-`PUT` requests to the mutating endpoints with `405`
//! - Map HTTP requests into [`SwitchService`](btswitch_app::services::switch_service::SwitchService)
//!   calls (driving adapter) and its reports into JSON responses
//!
//! Per-device failures travel inside the JSON body; they never turn into an
//! HTTP error status.
//!
//! ## Dependency rule
//! Depends on `btswitch-app` (for port traits and services) and `btswitch-domain`
//! (for the response types). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
