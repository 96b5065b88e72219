//! Error types for globetrotter.
//!
//! Only storage and configuration failures are errors. A rejected login is a
//! normal [`LoginOutcome`](crate::store::LoginOutcome), and a missing trip or
//! session is an `Option::None` at the store level.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for globetrotter operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// A stored record could not be read back.
    #[error("corrupt record under key '{key}': {source}")]
    CorruptRecord {
        /// Storage key holding the record.
        key: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// The command needs a logged-in user.
    #[error("not logged in; run `globetrotter login` first")]
    NotAuthenticated,

    /// No trip carries the requested id.
    #[error("no trip with id '{id}'")]
    TripNotFound {
        /// The id that was looked up.
        id: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for globetrotter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a trip-not-found error.
    #[must_use]
    pub fn trip_not_found(id: impl Into<String>) -> Self {
        Self::TripNotFound { id: id.into() }
    }

    /// Create a corrupt-record error for the given storage key.
    #[must_use]
    pub fn corrupt_record(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CorruptRecord {
            key: key.into(),
            source,
        }
    }

    /// Check if this error means no session is active.
    #[must_use]
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }

    /// Check if this error came from the backing store rather than the caller.
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::DatabaseMigration { .. }
                | Self::CorruptRecord { .. }
                | Self::Io(_)
                | Self::DirectoryCreate { .. }
        )
    }
}
