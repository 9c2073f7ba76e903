use std::sync::Arc;

use clientbook_core::clients::ClientService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Client business rules over the configured record store.
    pub clients: ClientService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
