//! HTTP surface for murmur: account registration/login and message CRUD.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/health` | GET | Liveness check |
//! | `/register` | POST | Create an account |
//! | `/login` | POST | Check credentials, return the account |
//! | `/messages` | POST / GET | Create a message / list all |
//! | `/messages/{id}` | GET / PATCH / DELETE | Read, edit text, remove |
//! | `/accounts/{id}/messages` | GET | Messages by author |

pub mod auth;
pub mod error;
pub mod messages;
pub mod services;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use state::{AppState, AppStateInner};

use axum::{
    Json, Router,
    routing::{get, post},
};
use murmur_types::api::HealthResponse;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::list_account_messages),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
