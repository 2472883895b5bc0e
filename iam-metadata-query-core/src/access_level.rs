//! Access-level normalization.
//!
//! The CLI and the metadata store use different spellings for the same
//! five CRUD-style levels: callers supply lowercase hyphenated labels
//! (`permissions-management`), the store carries the documentation-style
//! labels (`Permissions management`). This module owns the closed enum
//! and the mapping between the two.

use crate::error::{MetadataQueryError, MetadataQueryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five canonical access levels an IAM action can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    Read,
    Write,
    List,
    Tagging,
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
}

impl AccessLevel {
    /// Normalize a caller-facing label into a canonical level.
    ///
    /// Accepts `read`, `write`, `list`, `tagging`, and
    /// `permissions-management`, case-insensitively. Any other input
    /// fails with [`MetadataQueryError::InvalidAccessLevel`]; no store
    /// access happens before this check.
    pub fn from_cli_label(label: &str) -> MetadataQueryResult<Self> {
        match label.to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "list" => Ok(Self::List),
            "tagging" => Ok(Self::Tagging),
            "permissions-management" => Ok(Self::PermissionsManagement),
            _ => Err(MetadataQueryError::InvalidAccessLevel {
                label: label.to_string(),
            }),
        }
    }

    /// The label used in the metadata store.
    pub fn storage_label(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::List => "List",
            Self::Tagging => "Tagging",
            Self::PermissionsManagement => "Permissions management",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_label())
    }
}
