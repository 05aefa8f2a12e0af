pub mod bikes;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /bikes          list (GET), create (POST)
/// /bikes/{id}     get, update (PUT), delete
/// /catalog        brand/model/year compatibility table (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bikes", bikes::router())
        .route("/catalog", get(handlers::catalog::get_catalog))
}
