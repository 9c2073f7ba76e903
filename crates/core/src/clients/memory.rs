//! In-process [`ClientStore`] used by tests and local tooling.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::clients::model::{Client, ClientFields};
use crate::clients::store::ClientStore;
use crate::error::StoreError;
use crate::types::DbId;

/// Keeps records in id order. Ids start at 1 and are never reused.
///
/// Performs no uniqueness checks of its own.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Client>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Client>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().find(|c| c.name == name).cloned())
    }

    async fn find_by_name_excluding(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Client>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .find(|c| c.name == name && c.id != exclude_id)
            .cloned())
    }

    async fn insert(&self, fields: &ClientFields) -> Result<Client, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let client = Client {
            id: inner.last_id,
            name: fields.name.clone(),
            date_of_birth: fields.date_of_birth,
            main_language: fields.main_language.clone(),
            secondary_language: fields.secondary_language.clone(),
            funding_source: fields.funding_source,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(client.id, client.clone());
        Ok(client)
    }

    async fn update(
        &self,
        id: DbId,
        fields: &ClientFields,
    ) -> Result<Option<Client>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(client) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        client.name = fields.name.clone();
        client.date_of_birth = fields.date_of_birth;
        client.main_language = fields.main_language.clone();
        client.secondary_language = fields.secondary_language.clone();
        client.funding_source = fields.funding_source;
        client.updated_at = Utc::now();
        Ok(Some(client.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
