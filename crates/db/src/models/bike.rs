//! Bike model and submission DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bikematrix_core::types::DbId;
use bikematrix_core::validation::BikeCandidate;

/// A row from the `bikes` table.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Bike {
    pub id: DbId,
    pub email: String,
    pub brand: String,
    pub model: String,
    pub year: String,
}

/// DTO for creating or updating a bike.
///
/// Every field defaults, so a missing JSON field arrives as an empty string
/// and fails validation with a field message instead of a deserialization
/// error. `id` is ignored on create and cross-checked against the path on
/// update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BikeInput {
    pub id: DbId,
    pub email: String,
    pub brand: String,
    pub model: String,
    pub year: String,
}

impl BikeInput {
    /// Borrow the user-supplied fields as a validation candidate.
    pub fn as_candidate(&self) -> BikeCandidate<'_> {
        BikeCandidate {
            email: &self.email,
            brand: &self.brand,
            model: &self.model,
            year: &self.year,
        }
    }
}
