//! Error types for metadata query operations.

use thiserror::Error;

/// Result alias used throughout the query engine.
pub type MetadataQueryResult<T> = Result<T, MetadataQueryError>;

/// Errors that can occur while resolving a metadata query.
///
/// Every variant is terminal for the current invocation: nothing is
/// retried, and a miss is never collapsed into an empty success.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataQueryError {
    /// The supplied access-level label is not one of the five accepted
    /// values. Raised before any datastore access.
    #[error("invalid access level '{label}' (expected one of: read, write, list, tagging, permissions-management)")]
    InvalidAccessLevel { label: String },

    /// A single-action lookup missed.
    #[error("action '{name}' not found under service '{service}'")]
    ActionNotFound { service: String, name: String },

    /// A single-ARN-type lookup missed.
    #[error("ARN type '{name}' not found under service '{service}'")]
    ArnTypeNotFound { service: String, name: String },

    /// A single-condition-key lookup missed.
    #[error("condition key '{name}' not found under service '{service}'")]
    ConditionKeyNotFound { service: String, name: String },

    /// The service prefix is absent from the datastore. Surfaced by the
    /// store adapter and passed through unmodified.
    #[error("service '{service}' not found in the metadata store")]
    UnknownService { service: String },

    /// The metadata dataset could not be loaded or parsed.
    #[error("failed to load metadata store: {0}")]
    Datastore(String),
}
