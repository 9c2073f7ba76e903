pub mod client;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /clients              list, create
/// /clients/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/clients", client::router())
}
