//! Condition-table query resolution.
//!
//! Two rules: no name lists every condition key name applicable to the
//! service (including global keys its actions reference); a name is a
//! single-record lookup, missing with `ConditionKeyNotFound`.

use crate::datastore::Datastore;
use crate::error::MetadataQueryResult;
use crate::model::ConditionKeyDetail;
use crate::query::output::{QueryOutput, QueryRecord};

/// Filter set for a condition-table query.
#[derive(Debug, Clone, Default)]
pub struct ConditionQueryFilters {
    /// Service prefix. Required.
    pub service: String,
    /// Condition key name.
    pub name: Option<String>,
}

/// The single lookup a condition-table filter set resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionRule {
    Names,
    Single,
}

impl ConditionQueryFilters {
    /// Pick the one rule this filter set resolves to.
    pub fn rule(&self) -> ConditionRule {
        if self.name.is_some() {
            ConditionRule::Single
        } else {
            ConditionRule::Names
        }
    }
}

/// Resolve and execute a condition-table query.
pub fn resolve_condition_query(
    store: &Datastore,
    filters: &ConditionQueryFilters,
) -> MetadataQueryResult<QueryOutput> {
    let rule = filters.rule();
    log::debug!(
        "condition query for service '{}' resolved to rule {:?}",
        filters.service,
        rule
    );
    match rule {
        ConditionRule::Names => Ok(QueryOutput::StringList(
            store.condition_key_names(&filters.service)?,
        )),
        ConditionRule::Single => {
            let name = filters.name.as_deref().unwrap_or_default();
            let key = store.get_condition_key(&filters.service, name)?;
            Ok(QueryOutput::SingleRecord(QueryRecord::ConditionKey(
                ConditionKeyDetail::from_condition_key(key),
            )))
        }
    }
}
