use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use verdant_core::config::VerdantConfig;

use crate::ws::{broadcast::Broadcaster, registry::Registry};

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: VerdantConfig,
    /// Live WS connections, keyed by connection id.
    pub registry: Arc<Registry>,
    /// Fan-out engine over the registry.
    pub broadcaster: Broadcaster,
    /// Shared watering switch. Exclusive access so two clients toggling
    /// at once can never lose an update; the value broadcast is always
    /// the one committed under this lock.
    pub watering: Mutex<bool>,
}

impl AppState {
    pub fn new(config: VerdantConfig) -> Self {
        let registry = Arc::new(Registry::new());
        Self {
            config,
            broadcaster: Broadcaster::new(Arc::clone(&registry)),
            registry,
            watering: Mutex::new(false),
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::http::ui::ui_handler))
        .route("/health", get(crate::http::health::health_handler))
        .route("/ws", get(crate::ws::connection::ws_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
