//! Error types for the roster library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The backend could not be opened, initialized or closed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Statement execution or commit errors
    #[error("Query error: {message}")]
    Query {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration file deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Terminal read or write errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    /// The interactive input channel reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Builder for backend errors with a message and a `rusqlite` source.
pub struct BackendErrorBuilder {
    message: String,
    connection: bool,
}

impl BackendErrorBuilder {
    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RosterError {
        if self.connection {
            RosterError::Connection {
                message: self.message,
                source,
            }
        } else {
            RosterError::Query {
                message: self.message,
                source,
            }
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RosterError {
        RosterError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RosterError {
    /// Creates a builder for statement execution errors.
    pub fn query(message: impl Into<String>) -> BackendErrorBuilder {
        BackendErrorBuilder {
            message: message.into(),
            connection: false,
        }
    }

    /// Creates a builder for connection errors.
    pub fn connection(message: impl Into<String>) -> BackendErrorBuilder {
        BackendErrorBuilder {
            message: message.into(),
            connection: true,
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Message including every source in the chain, for the event log.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map statement errors with a message.
    fn db_context(self, message: &str) -> Result<T>;

    /// Map connection lifecycle errors with a message.
    fn connect_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RosterError::query(message).with_source(e))
    }

    fn connect_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RosterError::connection(message).with_source(e))
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
