//! In-memory stores injected through the same traits the SQLite database
//! implements.

use std::sync::Mutex;

use murmur_db::{AccountStore, DbError, MessageStore, Result};
use murmur_types::models::{Account, Message, NewAccount, NewMessage};

#[derive(Default)]
pub struct FakeStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    messages: Vec<Message>,
    next_message_id: i64,
    account_inserts: usize,
}

impl FakeStore {
    pub fn account_inserts(&self) -> usize {
        self.inner.lock().unwrap().account_inserts
    }
}

impl AccountStore for FakeStore {
    fn insert_account(&self, candidate: NewAccount) -> Result<Option<Account>> {
        let mut t = self.inner.lock().unwrap();
        t.account_inserts += 1;
        if t.accounts.iter().any(|a| a.username == candidate.username) {
            return Ok(None);
        }
        let account = Account::from_new(t.accounts.len() as i64 + 1, candidate);
        t.accounts.push(account.clone());
        Ok(Some(account))
    }

    fn account_by_username(&self, username: &str) -> Result<Option<Account>> {
        let t = self.inner.lock().unwrap();
        Ok(t.accounts.iter().find(|a| a.username == username).cloned())
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.inner.lock().unwrap().accounts.clone())
    }
}

impl MessageStore for FakeStore {
    fn insert_message(&self, candidate: NewMessage) -> Result<Option<Message>> {
        let mut t = self.inner.lock().unwrap();
        t.next_message_id += 1;
        let msg = Message::from_new(t.next_message_id, candidate);
        t.messages.push(msg.clone());
        Ok(Some(msg))
    }

    fn all_messages(&self) -> Result<Vec<Message>> {
        Ok(self.inner.lock().unwrap().messages.clone())
    }

    fn message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        let t = self.inner.lock().unwrap();
        Ok(t.messages.iter().find(|m| m.message_id == message_id).cloned())
    }

    fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        let mut t = self.inner.lock().unwrap();
        match t.messages.iter_mut().find(|m| m.message_id == message_id) {
            Some(msg) => {
                msg.message_text = message_text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_message(&self, message_id: i64) -> Result<usize> {
        let mut t = self.inner.lock().unwrap();
        let before = t.messages.len();
        t.messages.retain(|m| m.message_id != message_id);
        Ok(before - t.messages.len())
    }

    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        let t = self.inner.lock().unwrap();
        Ok(t
            .messages
            .iter()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect())
    }
}

/// Simulates a registration that lost the race: the existence check sees
/// nothing, then the UNIQUE constraint refuses the insert.
pub struct RacedStore;

impl AccountStore for RacedStore {
    fn insert_account(&self, _candidate: NewAccount) -> Result<Option<Account>> {
        Ok(None)
    }

    fn account_by_username(&self, _username: &str) -> Result<Option<Account>> {
        Ok(None)
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        Ok(Vec::new())
    }
}

/// Every call fails as if the database were unreachable.
pub struct BrokenStore;

fn unavailable() -> DbError {
    DbError::LockPoisoned("test store is down".into())
}

impl AccountStore for BrokenStore {
    fn insert_account(&self, _candidate: NewAccount) -> Result<Option<Account>> {
        Err(unavailable())
    }

    fn account_by_username(&self, _username: &str) -> Result<Option<Account>> {
        Err(unavailable())
    }

    fn all_accounts(&self) -> Result<Vec<Account>> {
        Err(unavailable())
    }
}

impl MessageStore for BrokenStore {
    fn insert_message(&self, _candidate: NewMessage) -> Result<Option<Message>> {
        Err(unavailable())
    }

    fn all_messages(&self) -> Result<Vec<Message>> {
        Err(unavailable())
    }

    fn message_by_id(&self, _message_id: i64) -> Result<Option<Message>> {
        Err(unavailable())
    }

    fn update_message_text(&self, _message_id: i64, _message_text: &str) -> Result<usize> {
        Err(unavailable())
    }

    fn delete_message(&self, _message_id: i64) -> Result<usize> {
        Err(unavailable())
    }

    fn messages_by_account(&self, _account_id: i64) -> Result<Vec<Message>> {
        Err(unavailable())
    }
}
