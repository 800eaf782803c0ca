use serde::{Deserialize, Serialize};

/// A registered account. The wire names match the `account` table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

/// A text post authored by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    /// Seconds since the Unix epoch.
    pub time_posted_epoch: i64,
}

/// Account candidate before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

/// Message candidate before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl Account {
    pub fn from_new(account_id: i64, candidate: NewAccount) -> Self {
        Self {
            account_id,
            username: candidate.username,
            password: candidate.password,
        }
    }
}

impl Message {
    pub fn from_new(message_id: i64, candidate: NewMessage) -> Self {
        Self {
            message_id,
            posted_by: candidate.posted_by,
            message_text: candidate.message_text,
            time_posted_epoch: candidate.time_posted_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_serializes_with_column_names() {
        let account = Account {
            account_id: 7,
            username: "bob".into(),
            password: "secret1".into(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "account_id": 7, "username": "bob", "password": "secret1" })
        );
    }

    #[test]
    fn message_from_new_keeps_candidate_fields() {
        let msg = Message::from_new(
            3,
            NewMessage {
                posted_by: 1,
                message_text: "hi".into(),
                time_posted_epoch: 1_700_000_000,
            },
        );

        assert_eq!(msg.message_id, 3);
        assert_eq!(msg.posted_by, 1);
        assert_eq!(msg.message_text, "hi");
        assert_eq!(msg.time_posted_epoch, 1_700_000_000);
    }
}
