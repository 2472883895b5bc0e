//! Query resolution engine for the three metadata tables.

mod actions;
mod arns;
mod conditions;
mod output;

pub use actions::{resolve_action_query, ActionQueryFilters, ActionRule, ALL_SERVICES};
pub use arns::{resolve_arn_query, ArnQueryFilters, ArnRule};
pub use conditions::{resolve_condition_query, ConditionQueryFilters, ConditionRule};
pub use output::{QueryOutput, QueryRecord};
