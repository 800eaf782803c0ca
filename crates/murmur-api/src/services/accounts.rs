use std::sync::Arc;

use murmur_db::{AccountStore, Result};
use murmur_types::models::{Account, NewAccount};
use tracing::{info, warn};

pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Persists a candidate whose fields were already validated by the caller.
    ///
    /// Returns `Ok(None)` when the username is taken or the store rejects the
    /// insert. The existence check runs first; the UNIQUE constraint on
    /// `account.username` still catches two registrations racing past it.
    pub fn create_account(&self, candidate: NewAccount) -> Result<Option<Account>> {
        if self.store.account_by_username(&candidate.username)?.is_some() {
            warn!(username = %candidate.username, "Registration rejected: username taken");
            return Ok(None);
        }

        let created = self.store.insert_account(candidate)?;
        if let Some(account) = &created {
            info!(account_id = account.account_id, username = %account.username, "Account registered");
        }
        Ok(created)
    }

    /// Looks the account up by username. Password comparison is left to the
    /// caller.
    pub fn login(&self, username: &str) -> Result<Option<Account>> {
        self.store.account_by_username(username)
    }

    pub fn all_accounts(&self) -> Result<Vec<Account>> {
        self.store.all_accounts()
    }
}
