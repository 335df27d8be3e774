//! JSON handlers reporting and switching every registry device.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use btswitch_app::ports::Connectivity;
use btswitch_domain::status::StatusResponse;

use crate::state::AppState;

/// Possible responses from the device endpoints.
///
/// Always `200 OK`: per-device failures are reported in the body.
pub enum DevicesResponse {
    Ok(Json<StatusResponse>),
}

impl IntoResponse for DevicesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `ANY /status`
pub async fn status<C>(State(state): State<AppState<C>>) -> DevicesResponse
where
    C: Connectivity + Send + Sync + 'static,
{
    DevicesResponse::Ok(Json(state.switch_service.status().await))
}

/// `PUT /connect`
pub async fn connect<C>(State(state): State<AppState<C>>) -> DevicesResponse
where
    C: Connectivity + Send + Sync + 'static,
{
    DevicesResponse::Ok(Json(state.switch_service.connect_all().await))
}

/// `PUT /disconnect`
pub async fn disconnect<C>(State(state): State<AppState<C>>) -> DevicesResponse
where
    C: Connectivity + Send + Sync + 'static,
{
    DevicesResponse::Ok(Json(state.switch_service.disconnect_all().await))
}
