//! Error types for the client core.
//!
//! Every failure that reaches a store is flattened to a display message via
//! [`ClientError::user_message`]; nothing propagates past the store boundary
//! as a structured error.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::api::Operation;

/// Failures raised by API calls and local checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server answered with an error status.
    #[error("{operation} failed with status {status}: {message}")]
    Api {
        /// Call that failed.
        operation: Operation,
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or the call's fallback.
        message: String,
    },

    /// The request never produced a response.
    #[error("{operation} failed: {message}")]
    Network {
        /// Call that failed.
        operation: Operation,
        /// Transport error description.
        message: String,
    },

    /// The server answered but the body was not the expected shape.
    #[error("{operation} returned an unreadable body: {message}")]
    Decode {
        /// Call that failed.
        operation: Operation,
        /// Decoder error description.
        message: String,
    },

    /// Input was rejected before any request was sent.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Offending input field.
        field: &'static str,
        /// Human readable reason.
        message: String,
    },

    /// Client settings are unusable.
    #[error("invalid client configuration: {message}")]
    Config {
        /// Description of the problem.
        message: String,
    },

    /// Durable session storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Message suitable for showing next to a form.
    ///
    /// Transport failures collapse to the call's generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Validation { message, .. } => message.clone(),
            Self::Network { operation, .. } | Self::Decode { operation, .. } => {
                operation.fallback_message().to_owned()
            }
            Self::Config { .. } | Self::Storage(_) => self.to_string(),
        }
    }
}

/// Failures raised by durable session storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage directory could not be created or opened.
    #[error("failed to open session directory '{path}': {message}")]
    Open {
        /// Directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The entry could not be written.
    #[error("failed to write session entry '{path}': {message}")]
    Write {
        /// Entry path relative to the storage directory.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The entry could not be removed.
    #[error("failed to remove session entry '{path}': {message}")]
    Remove {
        /// Entry path relative to the storage directory.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
