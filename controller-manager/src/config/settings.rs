//! Application settings for controller-manager.

use super::{cli, file, GenericControllerManagerConfiguration};
use crate::features::{Feature, FeatureGate};
use crate::leadermigration::config::ResourceLock;
use crate::leadermigration::LeaderMigrationOptions;
use commons::prelude_errors::*;
use std::ffi::OsString;
use std::str::FromStr;
use structopt::StructOpt;

/// Component name used when none is configured.
pub static DEFAULT_COMPONENT: &str = "kube-controller-manager";

/// Runtime application settings (validated config).
#[derive(Debug, SmartDefault)]
pub struct AppSettings {
    /// Global log level.
    #[default(log::LevelFilter::Warn)]
    pub verbosity: log::LevelFilter,

    /// Name of this controller-manager component.
    #[default(DEFAULT_COMPONENT.to_string())]
    pub component: String,

    /// Feature gates for this process.
    pub feature_gates: FeatureGate,

    /// Raw leader migration options, resolved by `resolve_leader_migration`.
    pub leader_migration: LeaderMigrationOptions,

    /// Runtime configuration handed to controllers.
    pub generic: GenericControllerManagerConfiguration,
}

impl AppSettings {
    /// Lookup all optional configs, merge them with defaults, and
    /// transform into valid runtime settings.
    pub fn assemble() -> Fallible<Self> {
        Self::assemble_from_cli(cli::CliOptions::from_args())
    }

    /// Same as `assemble`, with arguments taken from `args`.
    pub fn assemble_from_iter<I>(args: I) -> Fallible<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        Self::assemble_from_cli(cli::CliOptions::from_iter_safe(args)?)
    }

    fn assemble_from_cli(cli_opts: cli::CliOptions) -> Fallible<Self> {
        use commons::MergeOptions;

        let defaults = Self::default();

        // Source options.
        let file_opts = match &cli_opts.config_path {
            Some(ref path) => Some(file::FileOptions::read_filepath(path)?),
            None => None,
        };

        // Combine options into a single config, CLI taking precedence.
        let mut cfg = defaults;
        cfg.try_merge(file_opts)?;
        cfg.try_merge(cli_opts)?;

        // Validate and convert to settings.
        Self::try_validate(cfg)
    }

    /// Resolve leader migration options into the generic configuration.
    ///
    /// Any error here is fatal to startup.
    pub fn resolve_leader_migration(&mut self) -> Fallible<()> {
        let gate_enabled = self
            .feature_gates
            .enabled(Feature::ControllerManagerLeaderMigration);
        self.leader_migration
            .apply_to(gate_enabled, &mut self.generic)
    }

    /// Validate and build runtime settings.
    fn try_validate(self) -> Fallible<Self> {
        ensure!(!self.component.is_empty(), "empty component name");
        ensure!(
            !self.generic.controllers.is_empty(),
            "no controllers selected, use '*' to run all of them"
        );

        let election = &self.generic.leader_election;
        if election.leader_elect {
            ResourceLock::from_str(&election.resource_lock).map_err(|_| {
                format_err!(
                    "unsupported leader election resource lock '{}'",
                    election.resource_lock
                )
            })?;
            ensure!(
                !election.resource_name.is_empty() && !election.resource_namespace.is_empty(),
                "leader election requires a resource name and namespace"
            );
        }

        Ok(self)
    }
}
