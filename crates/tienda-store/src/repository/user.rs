//! # User & Session Repositories
//!
//! Persistence for store accounts and the logged-in session snapshot.
//!
//! The session is a single `User` snapshot under its own key, so a process
//! restart can resume the last login without touching the user collection.

use std::sync::Arc;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::{keys, KeyValueStore};
use crate::repository::{read_collection, write_collection};
use tienda_core::User;

// =============================================================================
// User Repository
// =============================================================================

/// Repository for the user account collection.
#[derive(Clone)]
pub struct UserRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        UserRepository { kv }
    }

    /// Lists all accounts.
    pub fn list(&self) -> StoreResult<Vec<User>> {
        read_collection(self.kv.as_ref(), keys::USERS)
    }

    /// Gets an account by username.
    pub fn get_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.list()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    /// Inserts a new account or replaces the stored record with the same id.
    pub fn upsert(&self, user: &User) -> StoreResult<()> {
        debug!(id = %user.id, username = %user.username, "Upserting user");

        let mut users = self.list()?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }

        write_collection(self.kv.as_ref(), keys::USERS, &users)
    }

    /// Deletes an account by id.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut users = self.list()?;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(StoreError::not_found("User", id));
        }

        write_collection(self.kv.as_ref(), keys::USERS, &users)
    }
}

// =============================================================================
// Session Repository
// =============================================================================

/// Repository for the logged-in user snapshot.
#[derive(Clone)]
pub struct SessionRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        SessionRepository { kv }
    }

    /// The persisted session, if a user is logged in.
    pub fn get(&self) -> StoreResult<Option<User>> {
        match self.kv.read(keys::SESSION)? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Persists the logged-in user snapshot.
    pub fn set(&self, user: &User) -> StoreResult<()> {
        debug!(username = %user.username, "Persisting session");
        let payload = serde_json::to_string_pretty(user)?;
        self.kv.write(keys::SESSION, &payload)
    }

    /// Clears the persisted session.
    pub fn clear(&self) -> StoreResult<()> {
        debug!("Clearing session");
        self.kv.remove(keys::SESSION)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
