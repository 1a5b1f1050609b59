//! Options shared by CLI and TOML.

use super::AppSettings;
use crate::leadermigration::config::ResourceLock;
use commons::prelude_errors::*;
use commons::MergeOptions;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

/// Generic controller-manager options.
#[derive(Debug, Default, Deserialize, Serialize, StructOpt)]
#[serde(deny_unknown_fields)]
pub struct GenericOptions {
    /// Address on which the secure endpoint will listen
    #[structopt(long = "bind-address")]
    pub address: Option<IpAddr>,

    /// Port to which the secure endpoint will bind
    #[structopt(long = "secure-port")]
    pub port: Option<u16>,

    /// Comma-separated list of controllers to enable. '*' enables all,
    /// 'foo' enables 'foo', '-foo' disables 'foo'
    #[structopt(long = "controllers")]
    pub controllers: Option<String>,

    /// Resync period for informers, in seconds
    #[structopt(long = "min-resync-period")]
    pub min_resync_period: Option<u64>,
}

impl MergeOptions<Option<GenericOptions>> for AppSettings {
    fn try_merge(&mut self, opts: Option<GenericOptions>) -> Fallible<()> {
        if let Some(generic) = opts {
            assign_if_some!(self.generic.address, generic.address);
            assign_if_some!(self.generic.port, generic.port);
            assign_if_some!(
                self.generic.controllers,
                generic.controllers.map(commons::parse_list)
            );
            assign_if_some!(
                self.generic.min_resync_period,
                generic.min_resync_period.map(Duration::from_secs)
            );
        }
        Ok(())
    }
}

/// Leader election options for the main lock.
#[derive(Debug, Default, Deserialize, Serialize, StructOpt)]
#[serde(deny_unknown_fields)]
pub struct LeaderElectionOptions {
    /// Whether to run leader election before executing the main loop
    #[structopt(long = "leader-elect")]
    pub leader_elect: Option<bool>,

    /// Kind of lock object used for leader election ('leases' or 'endpoints')
    #[structopt(name = "leader_elect_resource_lock", long = "leader-elect-resource-lock")]
    pub resource_lock: Option<String>,

    /// Name of the lock object used for leader election
    #[structopt(name = "leader_elect_resource_name", long = "leader-elect-resource-name")]
    pub resource_name: Option<String>,

    /// Namespace of the lock object used for leader election
    #[structopt(
        name = "leader_elect_resource_namespace",
        long = "leader-elect-resource-namespace"
    )]
    pub resource_namespace: Option<String>,
}

impl MergeOptions<Option<LeaderElectionOptions>> for AppSettings {
    fn try_merge(&mut self, opts: Option<LeaderElectionOptions>) -> Fallible<()> {
        if let Some(election) = opts {
            if let Some(lock) = &election.resource_lock {
                ResourceLock::from_str(lock)
                    .map_err(|_| format_err!("unsupported leader election resource lock '{}'", lock))?;
            }
            assign_if_some!(self.generic.leader_election.leader_elect, election.leader_elect);
            assign_if_some!(
                self.generic.leader_election.resource_lock,
                election.resource_lock
            );
            assign_if_some!(
                self.generic.leader_election.resource_name,
                election.resource_name
            );
            assign_if_some!(
                self.generic.leader_election.resource_namespace,
                election.resource_namespace
            );
        }
        Ok(())
    }
}
