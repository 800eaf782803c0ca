use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use murmur_types::api::{CreateMessageRequest, UpdateMessageRequest};
use murmur_types::models::{Message, NewMessage};

use crate::error::ApiError;
use crate::state::{AppState, run_blocking};
use crate::validation::validate_message_text;

/// Missing messages answer 200 with an empty body, never 404. Existing
/// clients depend on it.
fn found_or_empty(message: Option<Message>) -> Response {
    match message {
        Some(msg) => Json(msg).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Json(req) = payload?;
    validate_message_text(&req.message_text)?;

    let candidate = NewMessage {
        posted_by: req.posted_by,
        message_text: req.message_text,
        time_posted_epoch: req
            .time_posted_epoch
            .unwrap_or_else(|| chrono::Utc::now().timestamp()),
    };

    let created = run_blocking(move || state.messages.create_message(candidate)).await??;

    created
        .map(Json)
        .ok_or(ApiError::Rejected("message insert refused"))
}

/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = run_blocking(move || state.messages.all_messages()).await??;
    Ok(Json(messages))
}

/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(message_id) = path?;
    let found = run_blocking(move || state.messages.message_by_id(message_id)).await??;
    Ok(found_or_empty(found))
}

/// DELETE /messages/{message_id}
///
/// Echoes the message that was removed.
pub async fn delete_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(message_id) = path?;

    let removed = run_blocking(move || -> murmur_db::Result<Option<Message>> {
        let Some(existing) = state.messages.message_by_id(message_id)? else {
            return Ok(None);
        };
        let deleted = state.messages.delete_message(message_id)?;
        Ok(deleted.then_some(existing))
    })
    .await??;

    Ok(found_or_empty(removed))
}

/// PATCH /messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(message_id) = path?;
    let Json(req) = payload?;
    validate_message_text(&req.message_text)?;

    let updated = run_blocking(move || {
        state
            .messages
            .update_message_text(message_id, &req.message_text)
    })
    .await??;

    updated
        .map(Json)
        .ok_or(ApiError::Rejected("no message with that id"))
}

/// GET /accounts/{account_id}/messages
pub async fn list_account_messages(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let Path(account_id) = path?;
    let messages = run_blocking(move || state.messages.messages_by_account(account_id)).await??;
    Ok(Json(messages))
}
