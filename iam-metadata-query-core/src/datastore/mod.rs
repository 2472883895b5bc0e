//! Read-only adapter over the pre-populated IAM metadata store.
//!
//! The store is one JSON document holding three logical tables per
//! service (actions, ARN types, condition keys) plus a shared table of
//! global (`aws:`-prefixed) condition keys. [`Datastore::connect`]
//! parses the embedded dataset once per invocation; the connection is
//! released when the value drops, on every exit path.
//!
//! Services enumerate in sorted prefix order, and rows within a service
//! keep dataset order, so repeated queries against an unchanged store
//! return identical results.

mod embedded;

use crate::access_level::AccessLevel;
use crate::error::{MetadataQueryError, MetadataQueryResult};
use crate::model::{Action, ArnType, ArnTypePair, ConditionKey};
use embedded::EmbeddedDefinition;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// All metadata rows belonging to one service.
#[derive(Debug, Deserialize)]
struct ServiceDefinition {
    #[serde(default)]
    actions: Vec<Action>,
    #[serde(default)]
    resources: Vec<ArnType>,
    #[serde(default)]
    conditions: Vec<ConditionKey>,
}

/// The full metadata document: services keyed by prefix, plus the
/// global condition-key table shared across services.
#[derive(Debug, Deserialize)]
struct IamDefinition {
    #[serde(default)]
    global_condition_keys: Vec<ConditionKey>,
    services: BTreeMap<String, ServiceDefinition>,
}

/// Handle to the pre-populated metadata store.
#[derive(Debug)]
pub struct Datastore {
    definition: IamDefinition,
}

impl Datastore {
    /// Open the embedded metadata store.
    pub fn connect() -> MetadataQueryResult<Self> {
        let bytes = EmbeddedDefinition::definition_bytes().ok_or_else(|| {
            MetadataQueryError::Datastore("embedded IAM definition not found".to_string())
        })?;
        Self::from_json(&bytes)
    }

    /// Open a metadata store from an alternate dataset file.
    pub fn connect_path(path: &Path) -> MetadataQueryResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            MetadataQueryError::Datastore(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&bytes)
    }

    fn from_json(bytes: &[u8]) -> MetadataQueryResult<Self> {
        let definition: IamDefinition = serde_json::from_slice(bytes)
            .map_err(|e| MetadataQueryError::Datastore(format!("invalid IAM definition: {}", e)))?;
        log::debug!(
            "connected to metadata store ({} services, {} global condition keys)",
            definition.services.len(),
            definition.global_condition_keys.len()
        );
        Ok(Self { definition })
    }

    fn service(&self, service: &str) -> MetadataQueryResult<&ServiceDefinition> {
        self.definition
            .services
            .get(service)
            .ok_or_else(|| MetadataQueryError::UnknownService {
                service: service.to_string(),
            })
    }

    /// All known service prefixes, in sorted order.
    pub fn service_prefixes(&self) -> Vec<String> {
        self.definition.services.keys().cloned().collect()
    }

    /// Fetch a single action by `(service, name)`.
    pub fn get_action(&self, service: &str, name: &str) -> MetadataQueryResult<&Action> {
        self.service(service)?
            .actions
            .iter()
            .find(|action| action.name == name)
            .ok_or_else(|| MetadataQueryError::ActionNotFound {
                service: service.to_string(),
                name: name.to_string(),
            })
    }

    /// All actions of a service, in dataset order.
    pub fn actions(&self, service: &str) -> MetadataQueryResult<Vec<&Action>> {
        Ok(self.service(service)?.actions.iter().collect())
    }

    /// Actions of a service at one access level.
    pub fn actions_at_level(
        &self,
        service: &str,
        level: AccessLevel,
    ) -> MetadataQueryResult<Vec<&Action>> {
        Ok(self
            .service(service)?
            .actions
            .iter()
            .filter(|action| action.access_level == level)
            .collect())
    }

    /// Actions of a service at one access level that can only apply to
    /// the wildcard resource.
    pub fn actions_at_level_wildcard_only(
        &self,
        service: &str,
        level: AccessLevel,
    ) -> MetadataQueryResult<Vec<&Action>> {
        Ok(self
            .service(service)?
            .actions
            .iter()
            .filter(|action| action.access_level == level && action.is_wildcard_only())
            .collect())
    }

    /// Actions of a service that can only apply to the wildcard resource.
    pub fn actions_wildcard_only(&self, service: &str) -> MetadataQueryResult<Vec<&Action>> {
        Ok(self
            .service(service)?
            .actions
            .iter()
            .filter(|action| action.is_wildcard_only())
            .collect())
    }

    /// Actions of a service whose supported condition keys include
    /// `condition_name`.
    pub fn actions_supporting_condition(
        &self,
        service: &str,
        condition_name: &str,
    ) -> MetadataQueryResult<Vec<&Action>> {
        Ok(self
            .service(service)?
            .actions
            .iter()
            .filter(|action| action.condition_keys.iter().any(|key| key == condition_name))
            .collect())
    }

    /// Fetch a single ARN type by `(service, short name)`.
    pub fn get_arn_type(&self, service: &str, name: &str) -> MetadataQueryResult<&ArnType> {
        self.service(service)?
            .resources
            .iter()
            .find(|arn_type| arn_type.name == name)
            .ok_or_else(|| MetadataQueryError::ArnTypeNotFound {
                service: service.to_string(),
                name: name.to_string(),
            })
    }

    /// All raw ARN templates of a service, in dataset order. Templates
    /// shared by several ARN types appear once per ARN type.
    pub fn raw_arns(&self, service: &str) -> MetadataQueryResult<Vec<String>> {
        Ok(self
            .service(service)?
            .resources
            .iter()
            .map(|arn_type| arn_type.arn.clone())
            .collect())
    }

    /// All `(short name, raw ARN)` pairs of a service, in dataset order.
    pub fn arn_types(&self, service: &str) -> MetadataQueryResult<Vec<ArnTypePair>> {
        Ok(self
            .service(service)?
            .resources
            .iter()
            .map(|arn_type| ArnTypePair {
                resource_type_name: arn_type.name.clone(),
                raw_arn: arn_type.arn.clone(),
            })
            .collect())
    }

    /// Fetch a single condition key by `(service, name)`. Names with the
    /// `aws:` prefix fall back to the global table when the service does
    /// not define them itself.
    pub fn get_condition_key(
        &self,
        service: &str,
        name: &str,
    ) -> MetadataQueryResult<&ConditionKey> {
        let definition = self.service(service)?;
        if let Some(key) = definition.conditions.iter().find(|key| key.name == name) {
            return Ok(key);
        }
        if name.starts_with("aws:") {
            if let Some(key) = self
                .definition
                .global_condition_keys
                .iter()
                .find(|key| key.name == name)
            {
                return Ok(key);
            }
        }
        Err(MetadataQueryError::ConditionKeyNotFound {
            service: service.to_string(),
            name: name.to_string(),
        })
    }

    /// Names of all condition keys applicable to a service: its own keys
    /// in dataset order, followed by the global keys its actions
    /// reference, de-duplicated.
    pub fn condition_key_names(&self, service: &str) -> MetadataQueryResult<Vec<String>> {
        let definition = self.service(service)?;
        let mut names: Vec<String> = definition
            .conditions
            .iter()
            .map(|key| key.name.clone())
            .collect();
        for action in &definition.actions {
            for key in &action.condition_keys {
                if key.starts_with("aws:")
                    && self
                        .definition
                        .global_condition_keys
                        .iter()
                        .any(|global| global.name == *key)
                    && !names.contains(key)
                {
                    names.push(key.clone());
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "global_condition_keys": [
            {
                "name": "aws:TagKeys",
                "description": "Tag keys present in the request",
                "type": "ArrayOfString"
            }
        ],
        "services": {
            "tiny": {
                "actions": [
                    {
                        "name": "GetWidget",
                        "access_level": "Read",
                        "condition_keys": ["tiny:WidgetColor"],
                        "resource_types": ["widget"]
                    },
                    {
                        "name": "ListWidgets",
                        "access_level": "List",
                        "condition_keys": ["aws:TagKeys"],
                        "resource_types": []
                    }
                ],
                "resources": [
                    {
                        "name": "widget",
                        "arn": "arn:${Partition}:tiny:${Region}:${Account}:widget/${WidgetId}"
                    },
                    {
                        "name": "legacy-widget",
                        "arn": "arn:${Partition}:tiny:${Region}:${Account}:widget/${WidgetId}"
                    }
                ],
                "conditions": [
                    {
                        "name": "tiny:WidgetColor",
                        "description": "Color of the widget",
                        "type": "String"
                    }
                ]
            }
        }
    }"#;

    fn store() -> Datastore {
        Datastore::from_json(FIXTURE.as_bytes()).expect("fixture should parse")
    }

    #[test]
    fn test_unknown_service_is_surfaced_by_every_primitive() {
        let store = store();
        assert_eq!(
            store.actions("nope").expect_err("should fail"),
            MetadataQueryError::UnknownService {
                service: "nope".to_string()
            }
        );
        assert!(store.raw_arns("nope").is_err());
        assert!(store.condition_key_names("nope").is_err());
    }

    #[test]
    fn test_get_action_miss_is_a_typed_error_not_an_empty_result() {
        let store = store();
        let err = store.get_action("tiny", "PutWidget").expect_err("should miss");
        assert_eq!(
            err,
            MetadataQueryError::ActionNotFound {
                service: "tiny".to_string(),
                name: "PutWidget".to_string()
            }
        );
    }

    #[test]
    fn test_actions_at_level_all_carry_that_level() {
        let store = store();
        let actions = store
            .actions_at_level("tiny", AccessLevel::Read)
            .expect("should list");
        assert_eq!(actions.len(), 1);
        assert!(actions
            .iter()
            .all(|action| action.access_level == AccessLevel::Read));
    }

    #[test]
    fn test_wildcard_only_listing() {
        let store = store();
        let actions = store.actions_wildcard_only("tiny").expect("should list");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "ListWidgets");
    }

    #[test]
    fn test_raw_arns_preserve_duplicate_templates() {
        let store = store();
        let arns = store.raw_arns("tiny").expect("should list");
        assert_eq!(arns.len(), 2);
        assert_eq!(arns[0], arns[1]);
    }

    #[test]
    fn test_condition_key_names_include_referenced_global_keys() {
        let store = store();
        let names = store.condition_key_names("tiny").expect("should list");
        assert_eq!(
            names,
            vec!["tiny:WidgetColor".to_string(), "aws:TagKeys".to_string()]
        );
    }

    #[test]
    fn test_get_condition_key_falls_back_to_global_table() {
        let store = store();
        let key = store
            .get_condition_key("tiny", "aws:TagKeys")
            .expect("should resolve globally");
        assert_eq!(key.value_type, "ArrayOfString");
    }

    #[test]
    fn test_get_condition_key_miss_is_typed() {
        let store = store();
        let err = store
            .get_condition_key("tiny", "aws:Nope")
            .expect_err("should miss");
        assert_eq!(
            err,
            MetadataQueryError::ConditionKeyNotFound {
                service: "tiny".to_string(),
                name: "aws:Nope".to_string()
            }
        );
    }

    #[test]
    fn test_connect_path_reads_a_dataset_file() {
        let dir = tempfile::tempdir().expect("should create tempdir");
        let path = dir.path().join("definition.json");
        std::fs::write(&path, FIXTURE).expect("should write fixture");
        let store = Datastore::connect_path(&path).expect("should connect");
        assert_eq!(store.service_prefixes(), vec!["tiny".to_string()]);
    }

    #[test]
    fn test_connect_path_reports_unreadable_dataset() {
        let err = Datastore::connect_path(Path::new("/definitely/not/here.json"))
            .expect_err("should fail");
        assert!(matches!(err, MetadataQueryError::Datastore(_)));
    }
}
