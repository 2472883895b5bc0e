//! ARN-table query resolution.
//!
//! Precedence, first match wins:
//!
//! 1. `RawArns` — no name, list flag unset: every raw ARN template of
//!    the service, duplicates preserved.
//! 2. `ArnTypeList` — no name, list flag set: `(short name, raw ARN)`
//!    pairs.
//! 3. `Single` — a name is set: single-record lookup, missing with
//!    `ArnTypeNotFound`.

use crate::datastore::Datastore;
use crate::error::MetadataQueryResult;
use crate::model::ArnTypeDetail;
use crate::query::output::{QueryOutput, QueryRecord};

/// Filter set for an ARN-table query.
#[derive(Debug, Clone, Default)]
pub struct ArnQueryFilters {
    /// Service prefix. Required.
    pub service: String,
    /// ARN type short name (e.g. `bucket` under `s3`).
    pub name: Option<String>,
    /// List `(short name, raw ARN)` pairs instead of raw ARNs only.
    pub list_arn_types: bool,
}

/// The single lookup an ARN-table filter set resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArnRule {
    RawArns,
    ArnTypeList,
    Single,
}

impl ArnQueryFilters {
    /// Pick the one rule this filter set resolves to.
    pub fn rule(&self) -> ArnRule {
        if self.name.is_some() {
            ArnRule::Single
        } else if self.list_arn_types {
            ArnRule::ArnTypeList
        } else {
            ArnRule::RawArns
        }
    }
}

/// Resolve and execute an ARN-table query.
pub fn resolve_arn_query(
    store: &Datastore,
    filters: &ArnQueryFilters,
) -> MetadataQueryResult<QueryOutput> {
    let rule = filters.rule();
    log::debug!(
        "ARN query for service '{}' resolved to rule {:?}",
        filters.service,
        rule
    );
    match rule {
        ArnRule::RawArns => Ok(QueryOutput::StringList(store.raw_arns(&filters.service)?)),
        ArnRule::ArnTypeList => Ok(QueryOutput::RecordList(
            store
                .arn_types(&filters.service)?
                .into_iter()
                .map(QueryRecord::ArnTypePair)
                .collect(),
        )),
        ArnRule::Single => {
            let name = filters.name.as_deref().unwrap_or_default();
            let arn_type = store.get_arn_type(&filters.service, name)?;
            Ok(QueryOutput::SingleRecord(QueryRecord::ArnType(
                ArnTypeDetail::from_arn_type(arn_type),
            )))
        }
    }
}
