use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error};

use murmur_types::api::{LoginRequest, RegisterRequest};
use murmur_types::models::{Account, NewAccount};

use crate::error::ApiError;
use crate::state::{AppState, run_blocking};
use crate::validation::validate_registration;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Account>, ApiError> {
    let Json(req) = payload?;
    validate_registration(&req.username, &req.password)?;

    let candidate = NewAccount {
        username: req.username,
        password: req.password,
    };

    let created = run_blocking(move || state.accounts.create_account(candidate)).await??;

    created
        .map(Json)
        .ok_or(ApiError::Rejected("username taken or insert refused"))
}

/// POST /login
///
/// Unknown username, wrong password and a failed lookup all answer 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Account>, ApiError> {
    let Json(req) = payload?;

    let username = req.username.clone();
    let found = match run_blocking(move || state.accounts.login(&username)).await? {
        Ok(found) => found,
        Err(e) => {
            error!(username = %req.username, "Login lookup failed: {}", e);
            None
        }
    };

    match found {
        Some(account) if password_matches(&account.password, &req.password) => Ok(Json(account)),
        Some(_) => {
            debug!(username = %req.username, "Login refused: password mismatch");
            Err(ApiError::Unauthorized)
        }
        None => {
            debug!(username = %req.username, "Login refused: no such account");
            Err(ApiError::Unauthorized)
        }
    }
}

fn password_matches(stored: &str, supplied: &str) -> bool {
    stored == supplied
}
