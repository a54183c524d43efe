//! # Client Repository
//!
//! Persistence for client records. Read-only to the sales ledger; sales
//! snapshot the client name at commit time.

use std::sync::Arc;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::{keys, KeyValueStore};
use crate::repository::{read_collection, write_collection};
use tienda_core::Client;

/// Repository for the client collection.
#[derive(Clone)]
pub struct ClientRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        ClientRepository { kv }
    }

    /// Lists the full client collection in stored order.
    pub fn list(&self) -> StoreResult<Vec<Client>> {
        read_collection(self.kv.as_ref(), keys::CLIENTS)
    }

    /// Gets a client by its id.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Client>> {
        let clients = self.list()?;
        Ok(clients.into_iter().find(|c| c.id == id))
    }

    /// Inserts a new client or replaces the stored record with the same id.
    pub fn upsert(&self, client: &Client) -> StoreResult<()> {
        debug!(id = %client.id, name = %client.name, "Upserting client");

        let mut clients = self.list()?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }

        write_collection(self.kv.as_ref(), keys::CLIENTS, &clients)
    }

    /// Deletes a client by id.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting client");

        let mut clients = self.list()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);

        if clients.len() == before {
            return Err(StoreError::not_found("Client", id));
        }

        write_collection(self.kv.as_ref(), keys::CLIENTS, &clients)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn repo() -> ClientRepository {
        ClientRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_upsert_and_get() {
        let repo = repo();
        let client = Client::new("c-1", "Maria Lopez");

        repo.upsert(&client).unwrap();

        let stored = repo.get_by_id("c-1").unwrap().unwrap();
        assert_eq!(stored.name, "Maria Lopez");
    }

    #[test]
    fn test_delete_missing_errors() {
        let repo = repo();
        assert!(matches!(
            repo.delete("c-1"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let repo = repo();
        repo.upsert(&Client::new("c-1", "Maria")).unwrap();

        let mut renamed = Client::new("c-1", "Maria Lopez");
        renamed.phone = Some("555-0101".to_string());
        repo.upsert(&renamed).unwrap();

        let clients = repo.list().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Maria Lopez");
        assert_eq!(clients[0].phone.as_deref(), Some("555-0101"));
    }
}
