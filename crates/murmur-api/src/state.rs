use std::sync::Arc;

use murmur_db::{AccountStore, Database, MessageStore};
use tracing::error;

use crate::error::ApiError;
use crate::services::{AccountService, MessageService};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

impl AppStateInner {
    /// Both services share the one database handle opened at startup.
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_stores(db.clone(), db)
    }

    pub fn with_stores(accounts: Arc<dyn AccountStore>, messages: Arc<dyn MessageStore>) -> Self {
        Self {
            accounts: AccountService::new(accounts),
            messages: MessageService::new(messages),
        }
    }
}

/// Runs blocking service/DB work off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal(e.to_string())
    })
}
