use murmur_types::models::{Account, Message, NewAccount, NewMessage};

use crate::Result;

/// Account persistence as seen by the service layer.
///
/// Every lookup distinguishes three outcomes: `Ok(Some(_))` found,
/// `Ok(None)` absent, `Err(_)` storage failure. Inserts return `Ok(None)`
/// when the store rejects the row on a constraint.
pub trait AccountStore: Send + Sync {
    fn insert_account(&self, candidate: NewAccount) -> Result<Option<Account>>;

    fn account_by_username(&self, username: &str) -> Result<Option<Account>>;

    fn all_accounts(&self) -> Result<Vec<Account>>;
}

/// Message persistence as seen by the service layer.
pub trait MessageStore: Send + Sync {
    fn insert_message(&self, candidate: NewMessage) -> Result<Option<Message>>;

    /// All messages in insertion order.
    fn all_messages(&self) -> Result<Vec<Message>>;

    fn message_by_id(&self, message_id: i64) -> Result<Option<Message>>;

    /// Returns the number of rows changed (0 or 1).
    fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<usize>;

    /// Returns the number of rows removed (0 or 1).
    fn delete_message(&self, message_id: i64) -> Result<usize>;

    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>>;
}
