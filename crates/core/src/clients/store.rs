use async_trait::async_trait;

use crate::clients::model::{Client, ClientFields};
use crate::error::StoreError;
use crate::types::DbId;

/// Persistence contract for client records.
///
/// Implemented by the PostgreSQL store in `clientbook-db` and by
/// [`InMemoryClientStore`](crate::clients::InMemoryClientStore). Errors are
/// backend failures only; absence is reported through `Option`/`bool`.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// All records, in the store's natural order.
    async fn list(&self) -> Result<Vec<Client>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Client>, StoreError>;

    /// A record named `name` whose id is not `exclude_id`.
    async fn find_by_name_excluding(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Client>, StoreError>;

    /// Insert a new record, assigning its id and timestamps.
    async fn insert(&self, fields: &ClientFields) -> Result<Client, StoreError>;

    /// Overwrite every editable field of record `id`.
    ///
    /// Returns `None` if no such record exists.
    async fn update(&self, id: DbId, fields: &ClientFields)
        -> Result<Option<Client>, StoreError>;

    /// Remove record `id`. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
