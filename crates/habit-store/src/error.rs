//! Database error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while opening or using a user session.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The Telegram-supplied identifier is not a valid integer.
    #[error("invalid telegram id: {0:?}")]
    InvalidTelegramId(String),

    /// A database could not be opened.
    #[error("failed to connect to {db}: {source}")]
    Connection {
        db: String,
        #[source]
        source: sqlx::Error,
    },

    /// No username mapping exists for the Telegram id.
    #[error("telegram id {telegram_id} is not registered")]
    UserNotRegistered { telegram_id: i64 },

    /// The stored username is not usable as a database name.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] ValidationError),

    /// SQLx error (query, insert, lost connection, constraint violation).
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
