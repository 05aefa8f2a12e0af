//! Handlers for the `/bikes` resource.
//!
//! Every create/update runs the candidate through the validation engine
//! before touching storage; a rejected submission returns 400 with the
//! per-field messages and writes nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bikematrix_core::error::CoreError;
use bikematrix_core::types::DbId;
use bikematrix_core::validation;
use bikematrix_db::models::bike::{Bike, BikeInput};
use bikematrix_db::repositories::BikeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a bike exists, returning the full row.
async fn ensure_bike_exists(pool: &bikematrix_db::DbPool, id: DbId) -> AppResult<Bike> {
    BikeRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound { entity: "Bike", id })
    })
}

/// Run the validation engine over a submission, rejecting invalid input.
fn ensure_valid(input: &BikeInput) -> AppResult<()> {
    let outcome = validation::validate(&input.as_candidate());
    if outcome.is_valid() {
        Ok(())
    } else {
        tracing::debug!(fields = outcome.errors.len(), "Submission rejected");
        Err(AppError::Validation(outcome))
    }
}

// ---------------------------------------------------------------------------
// GET /bikes
// ---------------------------------------------------------------------------

/// List all bikes.
pub async fn list_bikes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = BikeRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed bikes");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /bikes
// ---------------------------------------------------------------------------

/// Create a new bike. Any submitted id is ignored; storage assigns identity.
pub async fn create_bike(
    State(state): State<AppState>,
    Json(input): Json<BikeInput>,
) -> AppResult<impl IntoResponse> {
    ensure_valid(&input)?;

    let created = BikeRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, brand = %created.brand, model = %created.model, "Bike created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /bikes/{id}
// ---------------------------------------------------------------------------

/// Get a single bike by id.
pub async fn get_bike(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bike = ensure_bike_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: bike }))
}

// ---------------------------------------------------------------------------
// PUT /bikes/{id}
// ---------------------------------------------------------------------------

/// Replace an existing bike. A non-zero body id must match the path id.
pub async fn update_bike(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BikeInput>,
) -> AppResult<impl IntoResponse> {
    if input.id != 0 && input.id != id {
        return Err(AppError::BadRequest("Id mismatch".to_string()));
    }
    ensure_valid(&input)?;

    let updated = BikeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bike", id }))?;
    tracing::info!(id = updated.id, "Bike updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /bikes/{id}
// ---------------------------------------------------------------------------

/// Delete a bike by id.
pub async fn delete_bike(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = BikeRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound { entity: "Bike", id }));
    }
    tracing::info!(id, "Bike deleted");
    Ok(StatusCode::NO_CONTENT)
}
