//! Result assembly.
//!
//! Every resolved query produces exactly one of three shapes, tagged so
//! the presentation layer can pick its serialization without inspecting
//! the values. The assembler fixes the shape contract only: values pass
//! through unfiltered and untransformed, and a single-record miss is a
//! typed error upstream, never a null shape here.

use crate::model::{ActionDetail, ArnTypeDetail, ArnTypePair, ConditionKeyDetail};
use serde::Serialize;

/// One structured record inside a [`QueryOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryRecord {
    Action(ActionDetail),
    ArnType(ArnTypeDetail),
    ArnTypePair(ArnTypePair),
    ConditionKey(ConditionKeyDetail),
}

/// The uniform result of a resolved query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    /// Ordered sequence of plain identifiers.
    StringList(Vec<String>),
    /// Ordered sequence of structured records.
    RecordList(Vec<QueryRecord>),
    /// Exactly one structured record.
    SingleRecord(QueryRecord),
}
