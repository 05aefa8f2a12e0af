//! Repository for the `bikes` table.

use bikematrix_core::types::DbId;

use crate::models::bike::{Bike, BikeInput};
use crate::DbPool;

const COLUMNS: &str = "id, email, brand, model, year";

/// Provides CRUD operations for bikes.
pub struct BikeRepo;

impl BikeRepo {
    /// Insert a new bike, returning the created row with its assigned id.
    pub async fn create(pool: &DbPool, input: &BikeInput) -> Result<Bike, sqlx::Error> {
        let query = format!(
            "INSERT INTO bikes (email, brand, model, year) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bike>(&query)
            .bind(&input.email)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a bike by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Bike>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bikes WHERE id = ?");
        sqlx::query_as::<_, Bike>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bikes, oldest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Bike>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bikes ORDER BY id ASC");
        sqlx::query_as::<_, Bike>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of an existing bike. Returns `None` if the id
    /// is not in the table.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &BikeInput,
    ) -> Result<Option<Bike>, sqlx::Error> {
        let query = format!(
            "UPDATE bikes SET email = ?, brand = ?, model = ?, year = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bike>(&query)
            .bind(&input.email)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.year)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bike by id. Returns whether a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bikes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
