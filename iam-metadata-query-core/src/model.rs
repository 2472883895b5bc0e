//! Entity records for the three metadata tables.
//!
//! These mirror the rows of the pre-populated store: actions, resource
//! ARN types, and condition keys, each scoped to one service. The
//! `*Detail` records are the fully-qualified views returned by
//! single-record lookups.

use crate::access_level::AccessLevel;
use serde::{Deserialize, Serialize};

/// One IAM action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action name, unique within its service (e.g. `GetObject`).
    pub name: String,
    /// The single access level classifying this action.
    pub access_level: AccessLevel,
    /// Condition keys the action supports (service-specific and global).
    #[serde(default)]
    pub condition_keys: Vec<String>,
    /// Short names of the ARN types the action can be scoped to. An
    /// empty-string entry is the documentation placeholder for the
    /// wildcard row and does not count as a usable ARN type.
    #[serde(default)]
    pub resource_types: Vec<String>,
    /// Actions that must be granted alongside this one.
    #[serde(default)]
    pub dependent_actions: Vec<String>,
}

impl Action {
    /// True iff the action supports no ARN type other than the full
    /// wildcard resource, i.e. it can only apply to `Resource: "*"`.
    pub fn is_wildcard_only(&self) -> bool {
        self.resource_types.iter().all(|name| name.is_empty())
    }
}

/// One resource ARN type row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArnType {
    /// Short name, unique within its service (e.g. `bucket`).
    pub name: String,
    /// Raw ARN template with `${...}` placeholders. Not required to be
    /// unique within a service.
    pub arn: String,
    /// Condition keys usable when a policy is scoped to this ARN type.
    #[serde(default)]
    pub condition_keys: Vec<String>,
}

/// One condition key row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionKey {
    /// Key name (e.g. `s3:prefix`, or `aws:TagKeys` for global keys).
    pub name: String,
    pub description: String,
    /// The condition value type (e.g. `String`, `ArrayOfString`).
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Full view of one action, as returned by a single-record lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDetail {
    /// Qualified action name, `service:Name`.
    pub action: String,
    pub access_level: AccessLevel,
    pub resource_types: Vec<String>,
    pub condition_keys: Vec<String>,
    pub dependent_actions: Vec<String>,
    pub wildcard_only: bool,
}

impl ActionDetail {
    pub(crate) fn from_action(service: &str, action: &Action) -> Self {
        Self {
            action: format!("{}:{}", service, action.name),
            access_level: action.access_level,
            resource_types: action
                .resource_types
                .iter()
                .filter(|name| !name.is_empty())
                .cloned()
                .collect(),
            condition_keys: action.condition_keys.clone(),
            dependent_actions: action.dependent_actions.clone(),
            wildcard_only: action.is_wildcard_only(),
        }
    }
}

/// Full view of one ARN type, as returned by a single-record lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArnTypeDetail {
    pub resource_type_name: String,
    pub raw_arn: String,
    pub condition_keys: Vec<String>,
}

impl ArnTypeDetail {
    pub(crate) fn from_arn_type(arn_type: &ArnType) -> Self {
        Self {
            resource_type_name: arn_type.name.clone(),
            raw_arn: arn_type.arn.clone(),
            condition_keys: arn_type.condition_keys.clone(),
        }
    }
}

/// `(short name, raw ARN)` pair listed by the ARN-types query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArnTypePair {
    pub resource_type_name: String,
    pub raw_arn: String,
}

/// Full view of one condition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionKeyDetail {
    pub name: String,
    pub description: String,
    pub condition_value_type: String,
}

impl ConditionKeyDetail {
    pub(crate) fn from_condition_key(key: &ConditionKey) -> Self {
        Self {
            name: key.name.clone(),
            description: key.description.clone(),
            condition_value_type: key.value_type.clone(),
        }
    }
}
