//! Handler for the `/catalog` resource.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use bikematrix_core::catalog;

use crate::response::DataResponse;

/// One brand with its models and their valid years.
#[derive(Debug, Serialize)]
pub struct BrandEntry {
    pub brand: &'static str,
    pub models: Vec<ModelEntry>,
}

/// One model with its valid years.
#[derive(Debug, Serialize)]
pub struct ModelEntry {
    pub model: &'static str,
    pub years: &'static [&'static str],
}

/// Serve the full compatibility table so form clients can build their
/// dependent dropdowns from the same data the engine validates against.
pub async fn get_catalog() -> impl IntoResponse {
    let data: Vec<BrandEntry> = catalog::brands()
        .into_iter()
        .map(|brand| BrandEntry {
            brand,
            models: catalog::models_for(brand)
                .into_iter()
                .map(|model| ModelEntry {
                    model,
                    years: catalog::years_for(brand, model),
                })
                .collect(),
        })
        .collect();

    Json(DataResponse { data })
}
