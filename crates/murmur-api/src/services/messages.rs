use std::sync::Arc;

use murmur_db::{MessageStore, Result};
use murmur_types::models::{Message, NewMessage};
use tracing::{debug, info};

/// Thin layer over [`MessageStore`]; text validation happens in the handlers.
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub fn create_message(&self, candidate: NewMessage) -> Result<Option<Message>> {
        let created = self.store.insert_message(candidate)?;
        if let Some(msg) = &created {
            info!(message_id = msg.message_id, posted_by = msg.posted_by, "Message created");
        }
        Ok(created)
    }

    pub fn all_messages(&self) -> Result<Vec<Message>> {
        self.store.all_messages()
    }

    pub fn message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        self.store.message_by_id(message_id)
    }

    /// Writes the new text, then re-reads the row. The two steps are separate
    /// round trips: a delete landing in between yields `Ok(None)` even though
    /// the update went through.
    pub fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<Option<Message>> {
        if self.store.update_message_text(message_id, message_text)? == 0 {
            debug!(message_id, "Update matched no message");
            return Ok(None);
        }
        self.store.message_by_id(message_id)
    }

    pub fn delete_message(&self, message_id: i64) -> Result<bool> {
        let removed = self.store.delete_message(message_id)? > 0;
        if removed {
            info!(message_id, "Message deleted");
        }
        Ok(removed)
    }

    /// Empty when the account has no messages, including when the account
    /// itself does not exist.
    pub fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        self.store.messages_by_account(account_id)
    }
}
