//! Repository for the `clients` table.

use clientbook_core::clients::{Client, ClientFields};
use clientbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::ClientRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date_of_birth, main_language, secondary_language, \
                       funding_source, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &ClientFields) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients
                (name, date_of_birth, main_language, secondary_language, funding_source)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .bind(&input.main_language)
            .bind(&input.secondary_language)
            .bind(input.funding_source.as_str())
            .fetch_one(pool)
            .await?;
        into_client(row)
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(into_client).transpose()
    }

    /// Find a client by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE name = $1");
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        row.map(into_client).transpose()
    }

    /// Find a client with the given name whose id is not `exclude_id`.
    pub async fn find_by_name_excluding(
        pool: &PgPool,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE name = $1 AND id <> $2");
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(name)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await?;
        row.map(into_client).transpose()
    }

    /// List all clients ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, ClientRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(into_client)
            .collect()
    }

    /// Overwrite every editable column of a client and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ClientFields,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = $2,
                date_of_birth = $3,
                main_language = $4,
                secondary_language = $5,
                funding_source = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .bind(&input.main_language)
            .bind(&input.secondary_language)
            .bind(input.funding_source.as_str())
            .fetch_optional(pool)
            .await?;
        row.map(into_client).transpose()
    }

    /// Permanently delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Narrow a raw row into the domain type. A funding code outside the known
/// set is reported as a decode error.
fn into_client(row: ClientRow) -> Result<Client, sqlx::Error> {
    Client::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
