//! Command-line options for controller-manager.

use super::options;
use super::AppSettings;
use crate::leadermigration::LeaderMigrationOptions;
use commons::prelude_errors::*;
use commons::MergeOptions;

/// CLI configuration flags, top-level.
#[derive(Debug, StructOpt)]
#[structopt(name = "controller-manager")]
pub struct CliOptions {
    /// Verbosity level
    #[structopt(short = "v", parse(from_occurrences))]
    pub verbosity: u64,

    /// Path to configuration file
    #[structopt(short = "c", long = "config-path")]
    pub config_path: Option<String>,

    /// Name of this controller-manager component
    #[structopt(long = "component")]
    pub component: Option<String>,

    /// Comma-separated list of 'Name=bool' pairs for alpha/experimental features.
    /// Known features: ControllerManagerLeaderMigration (Alpha - default=false)
    #[structopt(long = "feature-gates")]
    pub feature_gates: Option<String>,

    // Generic options
    #[structopt(flatten)]
    pub generic: options::GenericOptions,

    // Leader election options
    #[structopt(flatten)]
    pub leader_election: options::LeaderElectionOptions,

    // Leader migration options
    #[structopt(flatten)]
    pub leader_migration: LeaderMigrationOptions,
}

impl MergeOptions<CliOptions> for AppSettings {
    fn try_merge(&mut self, opts: CliOptions) -> Fallible<()> {
        if opts.verbosity > 0 {
            self.verbosity = commons::de::verbosity_to_loglevel(opts.verbosity);
        }
        assign_if_some!(self.component, opts.component);
        if let Some(gates) = &opts.feature_gates {
            self.feature_gates.set_from_str(gates)?;
        }

        self.try_merge(Some(opts.generic))?;
        self.try_merge(Some(opts.leader_election))?;

        // The flag can only turn migration on.
        if opts.leader_migration.enabled {
            self.leader_migration.enabled = true;
        }
        assign_if_some!(self.leader_migration.config, opts.leader_migration.config);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CliOptions;
    use crate::config::AppSettings;
    use crate::features::Feature;
    use commons::MergeOptions;
    use std::path::Path;
    use structopt::StructOpt;

    #[test]
    fn cli_basic() {
        let no_args = vec!["argv0"];
        let no_args_cli = CliOptions::from_iter_safe(no_args).unwrap();
        assert_eq!(no_args_cli.verbosity, 0);
        assert!(!no_args_cli.leader_migration.enabled);

        let verbose_args = vec!["argv0", "-vvv"];
        let verbose_cli = CliOptions::from_iter_safe(verbose_args).unwrap();
        assert_eq!(verbose_cli.verbosity, 3);

        let port_args = vec!["argv0", "--secure-port", "9999"];
        let port_cli = CliOptions::from_iter_safe(port_args).unwrap();
        assert_eq!(port_cli.generic.port, Some(9999));

        let migration_args = vec![
            "argv0",
            "--enable-leader-migration",
            "--leader-migration-config",
            "/a/b.yaml",
        ];
        let migration_cli = CliOptions::from_iter_safe(migration_args).unwrap();
        assert!(migration_cli.leader_migration.enabled);
        assert_eq!(
            migration_cli.leader_migration.config_path(),
            Some(Path::new("/a/b.yaml"))
        );

        CliOptions::from_iter_safe(vec!["argv0", "--secure-port", "abc"]).unwrap_err();
    }

    #[test]
    fn cli_override_toml() {
        use crate::config::file::FileOptions;

        let mut settings = AppSettings::default();
        assert_eq!(settings.verbosity, log::LevelFilter::Warn);

        let toml_input = r#"
            verbosity = 3
            feature_gates = "ControllerManagerLeaderMigration=true"
            [leader_migration]
            config = "/from/file.yaml"
        "#;
        let file_opts: FileOptions = toml::from_str(toml_input).unwrap();
        assert_eq!(file_opts.verbosity, Some(log::LevelFilter::Trace));

        settings.try_merge(Some(file_opts)).unwrap();
        assert_eq!(settings.verbosity, log::LevelFilter::Trace);
        assert!(settings
            .feature_gates
            .enabled(Feature::ControllerManagerLeaderMigration));

        let args = vec![
            "argv0",
            "-vv",
            "--feature-gates",
            "ControllerManagerLeaderMigration=false",
            "--leader-migration-config",
            "/from/cli.yaml",
        ];
        let cli_opts = CliOptions::from_iter_safe(args).unwrap();
        assert_eq!(cli_opts.verbosity, 2);

        settings.try_merge(cli_opts).unwrap();
        assert_eq!(settings.verbosity, log::LevelFilter::Debug);
        assert!(!settings
            .feature_gates
            .enabled(Feature::ControllerManagerLeaderMigration));
        assert_eq!(
            settings.leader_migration.config_path(),
            Some(Path::new("/from/cli.yaml"))
        );
    }

    #[test]
    fn cli_unknown_feature_gate() {
        let mut settings = AppSettings::default();
        let cli_opts =
            CliOptions::from_iter_safe(vec!["argv0", "--feature-gates", "NoSuchFeature=true"])
                .unwrap();
        settings.try_merge(cli_opts).unwrap_err();
    }
}
