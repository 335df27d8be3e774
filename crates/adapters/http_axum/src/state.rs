//! Shared application state for axum handlers.

use std::sync::Arc;

use btswitch_app::ports::Connectivity;
use btswitch_app::services::switch_service::SwitchService;

/// Application state shared across all axum handlers.
///
/// Generic over the connectivity port to avoid dynamic dispatch.
/// `Clone` is implemented manually so the connectivity type itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Use-cases over the device registry.
    pub switch_service: Arc<SwitchService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            switch_service: Arc::clone(&self.switch_service),
        }
    }
}

impl<C> AppState<C>
where
    C: Connectivity + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(switch_service: SwitchService<C>) -> Self {
        Self {
            switch_service: Arc::new(switch_service),
        }
    }
}
