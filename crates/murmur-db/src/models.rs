//! Row types and their decoders. Columns are looked up by name, so a query
//! that forgets a column fails here with `DbError::Decode` instead of
//! silently shifting positional reads.

use murmur_types::models::{Account, Message};
use rusqlite::Row;

use crate::DbError;

pub struct AccountRow {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

pub struct MessageRow {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl AccountRow {
    pub const COLUMNS: &'static str = "account_id, username, password";

    pub fn decode(row: &Row<'_>) -> Result<Self, DbError> {
        Self::from_row(row).map_err(|source| DbError::Decode {
            entity: "account",
            source,
        })
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            account_id: row.get("account_id")?,
            username: row.get("username")?,
            password: row.get("password")?,
        })
    }
}

impl MessageRow {
    pub const COLUMNS: &'static str = "message_id, posted_by, message_text, time_posted_epoch";

    pub fn decode(row: &Row<'_>) -> Result<Self, DbError> {
        Self::from_row(row).map_err(|source| DbError::Decode {
            entity: "message",
            source,
        })
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            message_id: row.get("message_id")?,
            posted_by: row.get("posted_by")?,
            message_text: row.get("message_text")?,
            time_posted_epoch: row.get("time_posted_epoch")?,
        })
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            account_id: row.account_id,
            username: row.username,
            password: row.password,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            message_id: row.message_id,
            posted_by: row.posted_by,
            message_text: row.message_text,
            time_posted_epoch: row.time_posted_epoch,
        }
    }
}
