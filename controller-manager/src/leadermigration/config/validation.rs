//! Semantic validation of a leader migration configuration.

use super::{LeaderMigrationConfiguration, ResourceLock};
use std::collections::HashSet;
use std::str::FromStr;

/// A single validation failure, tagged with the offending field path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{path}: Required value: {detail}")]
    Required { path: String, detail: String },
    #[error("{path}: Invalid value: {value:?}: {detail}")]
    Invalid {
        path: String,
        value: String,
        detail: String,
    },
    #[error("{path}: Duplicate value: {value:?}")]
    Duplicate { path: String, value: String },
}

impl FieldError {
    /// Path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            FieldError::Required { path, .. }
            | FieldError::Invalid { path, .. }
            | FieldError::Duplicate { path, .. } => path,
        }
    }
}

/// Validate `config`, collecting all violations.
///
/// An empty result means the configuration is valid.
pub fn validate(config: &LeaderMigrationConfiguration) -> Vec<FieldError> {
    let mut errs = Vec::new();

    if config.leader_name.is_empty() {
        errs.push(FieldError::Required {
            path: "leaderName".to_string(),
            detail: "leaderName must be set for LeaderMigrationConfiguration".to_string(),
        });
    }

    if ResourceLock::from_str(&config.resource_lock).is_err() {
        errs.push(FieldError::Invalid {
            path: "resourceLock".to_string(),
            value: config.resource_lock.clone(),
            detail: format!(
                "resource lock must be one of '{}' or '{}'",
                ResourceLock::Leases,
                ResourceLock::Endpoints
            ),
        });
    }

    let mut seen = HashSet::new();
    for (i, leader) in config.controller_leaders().iter().enumerate() {
        let path = format!("controllerLeaders[{}]", i);
        if leader.name.is_empty() {
            errs.push(FieldError::Required {
                path: format!("{}.name", path),
                detail: "name must be set".to_string(),
            });
        } else if !seen.insert(leader.name.as_str()) {
            errs.push(FieldError::Duplicate {
                path: format!("{}.name", path),
                value: leader.name.clone(),
            });
        }
        if leader.component.is_empty() {
            errs.push(FieldError::Required {
                path: format!("{}.component", path),
                detail: "component must be set".to_string(),
            });
        }
    }

    errs
}
