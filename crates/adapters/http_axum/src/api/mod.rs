//! JSON API handler modules.

pub mod devices;

use axum::Router;
use axum::routing::{any, put};

use btswitch_app::ports::Connectivity;

use crate::error::method_not_allowed;
use crate::state::AppState;

/// Build the device API routes.
///
/// `/status` answers every method; `/connect` and `/disconnect` only `PUT`.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: Connectivity + Send + Sync + 'static,
{
    Router::new()
        .route("/status", any(devices::status::<C>))
        .route(
            "/connect",
            put(devices::connect::<C>).fallback(method_not_allowed),
        )
        .route(
            "/disconnect",
            put(devices::disconnect::<C>).fallback(method_not_allowed),
        )
}
