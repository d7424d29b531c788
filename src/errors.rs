//! Unified error type for the dashboard.
//!
//! Every data-access operation returns [`Result`]. Database failures are
//! classified on conversion from [`DbErr`] so the presentation layer can pick a
//! user-facing message from [`Error::kind`] without ever showing raw driver
//! output to the end user.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Coarse classification of an [`Error`], used to choose what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Could not reach the database, or a statement failed to execute
    Connectivity,
    /// A write violated a unique or foreign-key constraint
    IntegrityViolation,
    /// Anything else
    Unknown,
}

/// All errors raised by the dashboard.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Connection failure or SQL execution error
    #[error("Query failed: {0}")]
    Connectivity(String),

    /// Unique or foreign-key constraint violation on write
    #[error("Integrity constraint violated: {0}")]
    IntegrityViolation(String),

    /// The requested claim does not exist
    #[error("Claim {claim_id} not found")]
    ClaimNotFound {
        /// Identifier that was looked up
        claim_id: i64,
    },

    /// User input could not be interpreted
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Database error that is neither connectivity nor integrity related
    #[error("Unexpected database error: {0}")]
    Database(String),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serenity/Poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connectivity(_) => ErrorKind::Connectivity,
            Self::IntegrityViolation(_) => ErrorKind::IntegrityViolation,
            _ => ErrorKind::Unknown,
        }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg)) =
            err.sql_err()
        {
            return Self::IntegrityViolation(msg);
        }

        let message = err.to_string();
        // Some drivers surface constraint failures without a structured code
        if message.contains("UNIQUE constraint failed")
            || message.contains("FOREIGN KEY constraint failed")
        {
            return Self::IntegrityViolation(message);
        }

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) | DbErr::Exec(_) | DbErr::Query(_) => {
                Self::Connectivity(message)
            }
            _ => Self::Database(message),
        }
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
