//! Runtime configuration shared by all controllers.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::leadermigration::config::{LeaderMigrationConfiguration, ResourceLock};

/// Generic controller-manager configuration.
#[derive(Clone, Debug, PartialEq, Eq, SmartDefault)]
pub struct GenericControllerManagerConfiguration {
    /// Address on which the secure endpoint listens.
    #[default(IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub address: IpAddr,

    /// Port on which the secure endpoint listens.
    #[default(10257)]
    pub port: u16,

    /// Resync period for informers.
    #[default(Duration::from_secs(12 * 60 * 60))]
    pub min_resync_period: Duration,

    /// Controllers to run: `*` for all, `name` to enable, `-name` to disable.
    #[default(vec!["*".to_string()])]
    pub controllers: Vec<String>,

    /// Leader election for the main lock.
    pub leader_election: LeaderElectionConfiguration,

    /// Whether controller leader migration is enabled.
    pub leader_migration_enabled: bool,

    /// Leader migration configuration, zero value unless enabled.
    pub leader_migration: LeaderMigrationConfiguration,
}

impl GenericControllerManagerConfiguration {
    /// Whether `name` is selected by the `controllers` list.
    ///
    /// An explicit entry (`name` or `-name`) wins over `*`.
    pub fn is_controller_enabled(&self, name: &str) -> bool {
        let mut wildcard = false;
        for entry in &self.controllers {
            if entry == name {
                return true;
            }
            if entry.strip_prefix('-') == Some(name) {
                return false;
            }
            if entry == "*" {
                wildcard = true;
            }
        }
        wildcard
    }
}

/// Leader election for the main controller-manager lock.
#[derive(Clone, Debug, PartialEq, Eq, SmartDefault)]
pub struct LeaderElectionConfiguration {
    /// Whether to run leader election at all.
    #[default(true)]
    pub leader_elect: bool,

    /// Kind of lock resource.
    #[default(ResourceLock::Leases.to_string())]
    pub resource_lock: String,

    /// Name of the lock resource.
    #[default("kube-controller-manager".to_string())]
    pub resource_name: String,

    /// Namespace of the lock resource.
    #[default("kube-system".to_string())]
    pub resource_namespace: String,

    #[default(Duration::from_secs(15))]
    pub lease_duration: Duration,
    #[default(Duration::from_secs(10))]
    pub renew_deadline: Duration,
    #[default(Duration::from_secs(2))]
    pub retry_period: Duration,
}
