//! Per-controller view over a leader migration configuration.

use super::config::{LeaderMigrationConfiguration, COMPONENT_WILDCARD};
use std::collections::HashMap;

/// How a controller is affected by leader migration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterResult {
    /// Not part of the migration, runs under the main lock.
    NonMigrated,
    /// Part of the migration and owned by this component, runs under the
    /// migration lock.
    Migrated,
    /// Part of the migration but owned by another component.
    Unowned,
}

/// Decides, for a given component, which controllers are migrated.
#[derive(Clone, Debug)]
pub struct LeaderMigrator {
    leader_name: String,
    component: String,
    owned: HashMap<String, bool>,
    migrated: Vec<String>,
}

impl LeaderMigrator {
    /// Build the filter for `component` from a resolved configuration.
    pub fn new<S>(config: &LeaderMigrationConfiguration, component: S) -> Self
    where
        S: Into<String>,
    {
        let component = component.into();
        let mut owned = HashMap::new();
        let mut migrated = Vec::new();
        for leader in config.controller_leaders() {
            let is_owned = leader.component == COMPONENT_WILDCARD || leader.component == component;
            owned.insert(leader.name.clone(), is_owned);
            if is_owned {
                migrated.push(leader.name.clone());
            }
        }

        Self {
            leader_name: config.leader_name.clone(),
            component,
            owned,
            migrated,
        }
    }

    /// Classify `controller_name` for this component.
    pub fn filter(&self, controller_name: &str) -> FilterResult {
        match self.owned.get(controller_name) {
            None => FilterResult::NonMigrated,
            Some(true) => FilterResult::Migrated,
            Some(false) => FilterResult::Unowned,
        }
    }

    /// Names of the controllers this component runs under the migration
    /// lock, in configuration order.
    pub fn migrated_controllers(&self) -> &[String] {
        &self.migrated
    }

    /// Name of the migration lock.
    pub fn leader_name(&self) -> &str {
        &self.leader_name
    }

    /// Component this filter was built for.
    pub fn component(&self) -> &str {
        &self.component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leadermigration::config::{
        default_leader_migration_configuration, ControllerLeaderConfiguration,
    };

    #[test]
    fn default_config_migrates_cloud_controllers() {
        let migrator = LeaderMigrator::new(
            &default_leader_migration_configuration(),
            "kube-controller-manager",
        );
        assert_eq!(migrator.filter("route"), FilterResult::Migrated);
        assert_eq!(migrator.filter("service"), FilterResult::Migrated);
        assert_eq!(migrator.filter("cloud-node-lifecycle"), FilterResult::Migrated);
        assert_eq!(migrator.filter("deployment"), FilterResult::NonMigrated);
        assert_eq!(
            migrator.migrated_controllers(),
            ["route", "service", "cloud-node-lifecycle"]
        );
        assert_eq!(migrator.leader_name(), "cloud-provider-extraction-migration");
    }

    #[test]
    fn component_ownership() {
        let config = LeaderMigrationConfiguration {
            leader_name: "migration".to_string(),
            resource_lock: "leases".to_string(),
            controller_leaders: Some(vec![
                ControllerLeaderConfiguration::new("route", "kube-controller-manager"),
                ControllerLeaderConfiguration::new("service", "cloud-controller-manager"),
            ]),
        };

        let kcm = LeaderMigrator::new(&config, "kube-controller-manager");
        assert_eq!(kcm.filter("route"), FilterResult::Migrated);
        assert_eq!(kcm.filter("service"), FilterResult::Unowned);
        assert_eq!(kcm.migrated_controllers(), ["route"]);

        let ccm = LeaderMigrator::new(&config, "cloud-controller-manager");
        assert_eq!(ccm.filter("route"), FilterResult::Unowned);
        assert_eq!(ccm.filter("service"), FilterResult::Migrated);
        assert_eq!(ccm.component(), "cloud-controller-manager");
    }

    #[test]
    fn unset_controller_leaders() {
        let migrator = LeaderMigrator::new(&LeaderMigrationConfiguration::default(), "any");
        assert_eq!(migrator.filter("route"), FilterResult::NonMigrated);
        assert!(migrator.migrated_controllers().is_empty());
    }
}
