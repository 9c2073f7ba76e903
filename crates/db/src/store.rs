//! [`ClientStore`] backed by PostgreSQL.

use async_trait::async_trait;
use clientbook_core::clients::{Client, ClientFields, ClientStore};
use clientbook_core::error::StoreError;
use clientbook_core::types::DbId;

use crate::repositories::ClientRepo;
use crate::DbPool;

/// Delegates to [`ClientRepo`]; `sqlx::Error`s are wrapped in [`StoreError`]
/// untouched.
#[derive(Debug, Clone)]
pub struct PgClientStore {
    pool: DbPool,
}

impl PgClientStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        ClientRepo::list(&self.pool).await.map_err(StoreError::new)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError> {
        ClientRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Client>, StoreError> {
        ClientRepo::find_by_name(&self.pool, name)
            .await
            .map_err(StoreError::new)
    }

    async fn find_by_name_excluding(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Client>, StoreError> {
        ClientRepo::find_by_name_excluding(&self.pool, name, exclude_id)
            .await
            .map_err(StoreError::new)
    }

    async fn insert(&self, fields: &ClientFields) -> Result<Client, StoreError> {
        ClientRepo::create(&self.pool, fields)
            .await
            .map_err(StoreError::new)
    }

    async fn update(
        &self,
        id: DbId,
        fields: &ClientFields,
    ) -> Result<Option<Client>, StoreError> {
        ClientRepo::update(&self.pool, id, fields)
            .await
            .map_err(StoreError::new)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        ClientRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::new)
    }
}
