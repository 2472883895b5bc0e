//! Action-table query resolution.
//!
//! The caller may combine several filters; resolution picks exactly one
//! lookup by walking an ordered rule table. The table is a pure
//! function of the filter set ([`ActionQueryFilters::rule`]), kept
//! separate from execution so the precedence itself is testable.
//!
//! Precedence, first match wins:
//!
//! 1. `AllServicesAtLevel` — service is `all` and an access level is
//!    set: aggregate that level across every service, in sorted
//!    service order, without de-duplication.
//! 2. `AllServicePrefixes` — service is `all`: list the known service
//!    prefixes.
//! 3. `AtLevel` — no name, access level set, wildcard-only unset.
//! 4. `AtLevelWildcardOnly` — no name, access level set, wildcard-only
//!    set.
//! 5. `SupportingCondition` — a condition key is set. Overrides a
//!    wildcard-only flag supplied alongside it, never rules 1–4.
//! 6. `WildcardOnly` — the wildcard-only flag is set.
//! 7. `Single` — a name is set and no access level: single-record
//!    lookup, missing with `ActionNotFound`.
//! 8. `All` — no discriminating filter: every action of the service.
//!
//! Lower-precedence filters a caller supplies alongside a
//! higher-matching rule are silently ignored, as in the original tool.

use crate::access_level::AccessLevel;
use crate::datastore::Datastore;
use crate::error::MetadataQueryResult;
use crate::model::{Action, ActionDetail};
use crate::query::output::{QueryOutput, QueryRecord};

/// Sentinel service identifier meaning "no service scoping".
pub const ALL_SERVICES: &str = "all";

/// Filter set for an action-table query.
#[derive(Debug, Clone, Default)]
pub struct ActionQueryFilters {
    /// Service prefix, or [`ALL_SERVICES`]. Required.
    pub service: String,
    /// Action name within the service.
    pub name: Option<String>,
    /// Raw access-level label, normalized only by the rule that uses it.
    pub access_level: Option<String>,
    /// Condition key name.
    pub condition: Option<String>,
    /// Restrict to actions that only apply to `Resource: "*"`.
    pub wildcard_only: bool,
}

/// The single lookup an action-table filter set resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRule {
    AllServicesAtLevel,
    AllServicePrefixes,
    AtLevel,
    AtLevelWildcardOnly,
    SupportingCondition,
    WildcardOnly,
    Single,
    All,
}

impl ActionQueryFilters {
    /// Pick the one rule this filter set resolves to. Pure; performs no
    /// validation and no store access.
    pub fn rule(&self) -> ActionRule {
        if self.service == ALL_SERVICES {
            if self.access_level.is_some() {
                ActionRule::AllServicesAtLevel
            } else {
                ActionRule::AllServicePrefixes
            }
        } else if self.name.is_none() && self.access_level.is_some() {
            if self.wildcard_only {
                ActionRule::AtLevelWildcardOnly
            } else {
                ActionRule::AtLevel
            }
        } else if self.condition.is_some() {
            ActionRule::SupportingCondition
        } else if self.wildcard_only {
            ActionRule::WildcardOnly
        } else if self.name.is_some() && self.access_level.is_none() {
            ActionRule::Single
        } else {
            ActionRule::All
        }
    }

    /// Normalize the access-level label. Only called by rules that
    /// consume the level, so an unused invalid label never errors.
    fn level(&self) -> MetadataQueryResult<AccessLevel> {
        AccessLevel::from_cli_label(self.access_level.as_deref().unwrap_or_default())
    }
}

/// Resolve and execute an action-table query.
pub fn resolve_action_query(
    store: &Datastore,
    filters: &ActionQueryFilters,
) -> MetadataQueryResult<QueryOutput> {
    let rule = filters.rule();
    log::debug!(
        "action query for service '{}' resolved to rule {:?}",
        filters.service,
        rule
    );
    match rule {
        ActionRule::AllServicesAtLevel => {
            let level = filters.level()?;
            let mut names = Vec::new();
            for service in store.service_prefixes() {
                let actions = store.actions_at_level(&service, level)?;
                names.extend(qualified_names(&service, &actions));
            }
            Ok(QueryOutput::StringList(names))
        }
        ActionRule::AllServicePrefixes => Ok(QueryOutput::StringList(store.service_prefixes())),
        ActionRule::AtLevel => {
            let actions = store.actions_at_level(&filters.service, filters.level()?)?;
            Ok(QueryOutput::StringList(qualified_names(
                &filters.service,
                &actions,
            )))
        }
        ActionRule::AtLevelWildcardOnly => {
            let actions =
                store.actions_at_level_wildcard_only(&filters.service, filters.level()?)?;
            Ok(QueryOutput::StringList(qualified_names(
                &filters.service,
                &actions,
            )))
        }
        ActionRule::SupportingCondition => {
            let condition = filters.condition.as_deref().unwrap_or_default();
            let actions = store.actions_supporting_condition(&filters.service, condition)?;
            Ok(QueryOutput::StringList(qualified_names(
                &filters.service,
                &actions,
            )))
        }
        ActionRule::WildcardOnly => {
            let actions = store.actions_wildcard_only(&filters.service)?;
            Ok(QueryOutput::StringList(qualified_names(
                &filters.service,
                &actions,
            )))
        }
        ActionRule::Single => {
            let name = filters.name.as_deref().unwrap_or_default();
            let action = store.get_action(&filters.service, name)?;
            Ok(QueryOutput::SingleRecord(QueryRecord::Action(
                ActionDetail::from_action(&filters.service, action),
            )))
        }
        ActionRule::All => {
            let actions = store.actions(&filters.service)?;
            Ok(QueryOutput::StringList(qualified_names(
                &filters.service,
                &actions,
            )))
        }
    }
}

fn qualified_names(service: &str, actions: &[&Action]) -> Vec<String> {
    actions
        .iter()
        .map(|action| format!("{}:{}", service, action.name))
        .collect()
}
