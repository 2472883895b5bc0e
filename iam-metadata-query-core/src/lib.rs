//! This crate provides the core logic for querying IAM permission
//! metadata:
//! - a read-only adapter over the pre-populated metadata store
//! - access-level normalization
//! - query resolution for the action, ARN, and condition tables
//!
//! Resolution is single-threaded and synchronous: one query per
//! invocation, with the store connection scoped to that invocation.

mod access_level;
mod datastore;
mod error;
mod model;
mod query;

// Re-exports for a small, focused public API
pub use access_level::AccessLevel;
pub use datastore::Datastore;
pub use error::{MetadataQueryError, MetadataQueryResult};
pub use model::{
    Action, ActionDetail, ArnType, ArnTypeDetail, ArnTypePair, ConditionKey, ConditionKeyDetail,
};
pub use query::{
    resolve_action_query, resolve_arn_query, resolve_condition_query, ActionQueryFilters,
    ActionRule, ArnQueryFilters, ArnRule, ConditionQueryFilters, ConditionRule, QueryOutput,
    QueryRecord, ALL_SERVICES,
};
