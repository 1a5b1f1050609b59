//! Built-in default configuration.

use super::{ControllerLeaderConfiguration, LeaderMigrationConfiguration, ResourceLock};
use super::COMPONENT_WILDCARD;

/// Version of the built-in default configuration.
///
/// Bump this whenever the content of the default changes.
pub static DEFAULT_CONFIG_VERSION: u32 = 1;

/// Lock name used by the default configuration.
static DEFAULT_LEADER_NAME: &str = "cloud-provider-extraction-migration";

/// Controllers migrated by the default configuration.
static DEFAULT_MIGRATED_CONTROLLERS: &[&str] = &["route", "service", "cloud-node-lifecycle"];

lazy_static! {
    static ref DEFAULT_LEADER_MIGRATION: LeaderMigrationConfiguration =
        LeaderMigrationConfiguration {
            leader_name: DEFAULT_LEADER_NAME.to_string(),
            resource_lock: ResourceLock::Leases.to_string(),
            controller_leaders: Some(
                DEFAULT_MIGRATED_CONTROLLERS
                    .iter()
                    .map(|name| ControllerLeaderConfiguration::new(*name, COMPONENT_WILDCARD))
                    .collect()
            ),
        };
}

/// Configuration used when migration is enabled without a config file.
pub fn default_leader_migration_configuration() -> LeaderMigrationConfiguration {
    DEFAULT_LEADER_MIGRATION.clone()
}
