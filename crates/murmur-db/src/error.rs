use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A row did not have the shape its decoder expects (missing column,
    /// wrong type). Usually means the schema drifted from the queries.
    #[error("failed to decode {entity} row: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("connection lock poisoned: {0}")]
    LockPoisoned(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// True when SQLite refused the statement because of a UNIQUE, NOT NULL
    /// or FOREIGN KEY constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
