use serde::{Deserialize, Serialize};

// -- Accounts --

/// Body of `POST /register`. Clients commonly echo an `account_id` field;
/// it is ignored because the store assigns ids.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// -- Messages --

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub posted_by: i64,
    pub message_text: String,
    /// Stamped with the current time when omitted.
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub message_text: String,
}

// -- Health --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
