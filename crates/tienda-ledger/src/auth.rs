//! # Account Sessions
//!
//! Register, login, logout, and the persisted session snapshot used for
//! auto-login at startup.
//!
//! Passwords are compared as stored; credential hardening is outside the
//! scope of this library.

use tracing::info;

use tienda_core::validation::{validate_name, validate_username};
use tienda_core::{User, ValidationError};
use tienda_store::{new_record_id, Store};

use crate::error::{LedgerError, LedgerResult};

/// Input for registering a new store account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub store_name: String,
    pub store_image: Option<String>,
}

/// Account session manager over the user collection and the session key.
pub struct Auth {
    store: Store,
}

impl Auth {
    /// Creates a session manager over a store.
    pub fn new(store: Store) -> Self {
        Auth { store }
    }

    /// Registers a new account and leaves it logged in.
    ///
    /// ## Failures
    /// - `ValidationError::Required` - missing username/password/store name
    /// - `ValidationError::Duplicate` - username already registered
    pub fn register(&self, account: NewAccount) -> LedgerResult<User> {
        validate_username(&account.username)?;
        if account.password.is_empty() {
            return Err(ValidationError::Required {
                field: "password".to_string(),
            }
            .into());
        }
        validate_name("store name", &account.store_name)?;

        if self
            .store
            .users()
            .get_by_username(&account.username)?
            .is_some()
        {
            return Err(ValidationError::Duplicate {
                field: "username".to_string(),
                value: account.username,
            }
            .into());
        }

        let user = User {
            id: new_record_id(),
            username: account.username,
            password: account.password,
            store_name: account.store_name,
            store_image: account.store_image,
        };

        self.store.users().upsert(&user)?;
        self.store.session().set(&user)?;

        info!(username = %user.username, "Account registered");
        Ok(user)
    }

    /// Logs in with a username and password and persists the session.
    pub fn login(&self, username: &str, password: &str) -> LedgerResult<User> {
        let user = self
            .store
            .users()
            .get_by_username(username)?
            .filter(|u| u.password == password)
            .ok_or(LedgerError::InvalidCredentials)?;

        self.store.session().set(&user)?;

        info!(username = %user.username, "Logged in");
        Ok(user)
    }

    /// The persisted session, if a user is logged in. Used for auto-login
    /// at startup.
    pub fn current(&self) -> LedgerResult<Option<User>> {
        Ok(self.store.session().get()?)
    }

    /// Logs out and clears the persisted session.
    pub fn logout(&self) -> LedgerResult<()> {
        self.store.session().clear()?;
        info!("Logged out");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
