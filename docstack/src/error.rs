//! Error types for the docstack library.
//!
//! Collaborators (providers, catalogs, configuration loaders) report failures
//! through this hierarchy. Resolution itself never returns these errors to the
//! caller: the resolver logs them and collapses the outcome to an absent stack.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a docstack error.
///
/// # Examples
///
/// ```
/// use docstack::{Error, Result};
///
/// fn authority() -> Result<String> {
///     Ok("com.example.docs".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the docstack library.
#[derive(Debug, Error)]
pub enum Error {
    /// A document identifier could not be parsed.
    #[error("invalid document uri '{uri}': {reason}")]
    InvalidDocumentUri {
        /// The rejected input.
        uri: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A document identifier has no authority component.
    #[error("document uri '{uri}' has no authority")]
    MissingAuthority {
        /// The rejected input.
        uri: String,
    },

    /// A document provider failed while serving a request.
    #[error("provider {authority} failed: {message}")]
    Provider {
        /// The provider's authority.
        authority: String,
        /// Description of the failure.
        message: String,
    },

    /// A provider call did not complete in time.
    #[error("provider {authority} timed out after {millis}ms")]
    Timeout {
        /// The provider's authority.
        authority: String,
        /// How long the call was allowed to run.
        millis: u64,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A document stack could not be assembled from the looked-up parts.
    #[error("invalid document stack: {details}")]
    StackInvariant {
        /// Which invariant was violated.
        details: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use docstack::Error;
    ///
    /// let err = Error::NotFound { resource: "root home".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a transient provider condition worth retrying by the caller.
    ///
    /// The resolver never retries; this is informational for hosts.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Io(_))
    }
}
