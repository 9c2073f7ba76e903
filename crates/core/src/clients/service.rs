//! Business rules around the client record store.
//!
//! Every operation does a few sequential reads followed by at most one write.
//! The read-then-write pairs in [`ClientService::create_client`] and
//! [`ClientService::update_client`] are not atomic; a concurrent writer can
//! slip a duplicate name in between, and the store's own unique constraint
//! is what catches it.

use std::sync::Arc;

use crate::clients::model::{Client, ClientFields, ClientUpdate};
use crate::clients::store::ClientStore;
use crate::clients::ENTITY;
use crate::error::CoreError;
use crate::types::DbId;

/// Orchestrates store reads and writes for client records.
///
/// Cheap to clone; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn ClientStore>,
}

impl ClientService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ClientStore> {
        &self.store
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, CoreError> {
        let clients = self.store.list().await?;
        tracing::debug!(count = clients.len(), "Clients listed");
        Ok(clients)
    }

    /// Look up one record. Absence is not an error here.
    pub async fn get_client(&self, id: DbId) -> Result<Option<Client>, CoreError> {
        let client = self.store.find_by_id(id).await?;
        tracing::debug!(client_id = id, found = client.is_some(), "Client looked up");
        Ok(client)
    }

    /// Create a record, failing with `Conflict` if the name is taken.
    pub async fn create_client(&self, fields: ClientFields) -> Result<Client, CoreError> {
        if self.store.find_by_name(&fields.name).await?.is_some() {
            tracing::debug!(name = %fields.name, "Client create rejected: name taken");
            return Err(CoreError::Conflict("client already exists".to_string()));
        }

        let client = self.store.insert(&fields).await?;
        tracing::info!(client_id = client.id, name = %client.name, "Client created");
        Ok(client)
    }

    /// Delete a record, returning its state from before the delete.
    pub async fn delete_client(&self, id: DbId) -> Result<Client, CoreError> {
        let client = self.require(id).await?;

        if !self.store.delete(id).await? {
            // Removed by someone else between the read and the delete.
            return Err(not_found(id));
        }

        tracing::info!(client_id = id, "Client deleted");
        Ok(client)
    }

    /// Overwrite a record.
    ///
    /// Fails with `NotFound` if `id` does not exist and with `Conflict` if a
    /// *different* record already uses the new name. A record may always
    /// keep its own name. An omitted secondary language is carried forward.
    pub async fn update_client(&self, id: DbId, update: ClientUpdate) -> Result<Client, CoreError> {
        let existing = self.require(id).await?;

        if self
            .store
            .find_by_name_excluding(&update.name, id)
            .await?
            .is_some()
        {
            tracing::debug!(client_id = id, name = %update.name, "Client update rejected: name taken");
            return Err(CoreError::Conflict("name already exists".to_string()));
        }

        let fields = update.apply_to(&existing);
        let client = self
            .store
            .update(id, &fields)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(client_id = id, name = %client.name, "Client updated");
        Ok(client)
    }

    async fn require(&self, id: DbId) -> Result<Client, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}
