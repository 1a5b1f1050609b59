//! Leader migration options and their resolution.

use super::config::{
    default_leader_migration_configuration, ConfigLoader, FileLoader,
    LeaderMigrationConfiguration, DEFAULT_CONFIG_VERSION,
};
use super::LeaderMigrationError;
use crate::config::GenericControllerManagerConfiguration;
use crate::features::Feature;
use commons::prelude_errors::*;
use commons::MergeOptions;
use std::path::{Path, PathBuf};

/// Leader migration flags, as given by the operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, StructOpt)]
pub struct LeaderMigrationOptions {
    /// Whether to enable controller leader migration
    #[structopt(long = "enable-leader-migration")]
    pub enabled: bool,

    /// Path to the config file for controller leader migration, or empty to use
    /// the default configuration. Ignored unless leader migration is enabled
    #[structopt(long = "leader-migration-config", parse(from_os_str))]
    pub config: Option<PathBuf>,
}

/// Outcome of a successful resolution.
///
/// Carries exactly the leader migration fields of
/// [`GenericControllerManagerConfiguration`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLeaderMigration {
    /// Whether leader migration is enabled.
    pub enabled: bool,
    /// Effective configuration, zero value when disabled.
    pub configuration: LeaderMigrationConfiguration,
}

impl LeaderMigrationOptions {
    /// Configured file path, if any. An empty path counts as unset.
    pub fn config_path(&self) -> Option<&Path> {
        self.config
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Resolve options against the state of the leader migration feature gate,
    /// reading any configuration file from the local filesystem.
    pub fn resolve(&self, gate_enabled: bool) -> Result<ResolvedLeaderMigration, LeaderMigrationError> {
        self.resolve_with(gate_enabled, &FileLoader)
    }

    /// Resolve options, loading any configuration file through `loader`.
    ///
    /// The feature gate is checked before touching the loader.
    pub fn resolve_with<L>(
        &self,
        gate_enabled: bool,
        loader: &L,
    ) -> Result<ResolvedLeaderMigration, LeaderMigrationError>
    where
        L: ConfigLoader + ?Sized,
    {
        if !self.enabled {
            if let Some(path) = self.config_path() {
                debug!(
                    "leader migration disabled, ignoring config file {}",
                    path.display()
                );
            }
            return Ok(ResolvedLeaderMigration::default());
        }

        if !gate_enabled {
            return Err(LeaderMigrationError::GateDisabled {
                feature: Feature::ControllerManagerLeaderMigration,
            });
        }

        let configuration = match self.config_path() {
            None => {
                debug!(
                    "leader migration enabled, using default configuration v{}",
                    DEFAULT_CONFIG_VERSION
                );
                default_leader_migration_configuration()
            }
            Some(path) => {
                debug!("leader migration enabled, loading {}", path.display());
                loader
                    .load(path)
                    .map_err(|e| LeaderMigrationError::ConfigLoad {
                        path: path.to_path_buf(),
                        source: e.into(),
                    })?
            }
        };

        info!(
            "leader migration enabled with lock '{}' ({})",
            configuration.leader_name, configuration.resource_lock
        );
        Ok(ResolvedLeaderMigration {
            enabled: true,
            configuration,
        })
    }

    /// Resolve options and write the outcome into `generic`.
    ///
    /// On error, `generic` is left untouched.
    pub fn apply_to(
        &self,
        gate_enabled: bool,
        generic: &mut GenericControllerManagerConfiguration,
    ) -> Fallible<()> {
        let resolved = self.resolve(gate_enabled)?;
        generic.try_merge(resolved)
    }
}

impl MergeOptions<ResolvedLeaderMigration> for GenericControllerManagerConfiguration {
    fn try_merge(&mut self, resolved: ResolvedLeaderMigration) -> Fallible<()> {
        self.leader_migration_enabled = resolved.enabled;
        self.leader_migration = resolved.configuration;
        Ok(())
    }
}
