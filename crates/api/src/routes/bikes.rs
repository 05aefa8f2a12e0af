//! Route definitions for the `/bikes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bikes;
use crate::state::AppState;

/// Routes mounted at `/bikes`.
///
/// ```text
/// GET    /       -> list_bikes
/// POST   /       -> create_bike
/// GET    /{id}   -> get_bike
/// PUT    /{id}   -> update_bike
/// DELETE /{id}   -> delete_bike
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bikes::list_bikes).post(bikes::create_bike))
        .route(
            "/{id}",
            get(bikes::get_bike)
                .put(bikes::update_bike)
                .delete(bikes::delete_bike),
        )
}
