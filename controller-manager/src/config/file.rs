//! TOML file configuration options.

use super::options;
use super::AppSettings;
use commons::de::de_loglevel;
use commons::prelude_errors::*;
use commons::MergeOptions;
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, path};

/// TOML configuration, top-level.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOptions {
    /// Verbosity level.
    #[serde(default = "Option::default", deserialize_with = "de_loglevel")]
    pub verbosity: Option<log::LevelFilter>,

    /// Name of this controller-manager component.
    pub component: Option<String>,

    /// Feature gates, as comma-separated `Name=bool` pairs.
    pub feature_gates: Option<String>,

    /// Generic controller-manager options.
    pub generic: Option<options::GenericOptions>,

    /// Leader election options.
    pub leader_election: Option<options::LeaderElectionOptions>,

    /// Leader migration options.
    pub leader_migration: Option<LeaderMigrationFileOptions>,
}

/// Leader migration options, file flavor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeaderMigrationFileOptions {
    /// Whether to enable controller leader migration.
    pub enabled: Option<bool>,

    /// Path to the leader migration config file.
    pub config: Option<PathBuf>,
}

impl FileOptions {
    /// Parse a TOML configuration from path.
    pub fn read_filepath<P>(cfg_path: P) -> Fallible<Self>
    where
        P: AsRef<path::Path>,
    {
        let cfg_file = fs::File::open(&cfg_path).context(format!(
            "failed to open config path {:?}",
            cfg_path.as_ref()
        ))?;
        let mut bufrd = io::BufReader::new(cfg_file);

        let mut content = String::new();
        bufrd.read_to_string(&mut content)?;
        let cfg = toml::from_str(&content).context(format!(
            "failed to parse config file {}",
            cfg_path.as_ref().display()
        ))?;

        Ok(cfg)
    }
}

impl MergeOptions<Option<FileOptions>> for AppSettings {
    fn try_merge(&mut self, opts: Option<FileOptions>) -> Fallible<()> {
        if let Some(file) = opts {
            assign_if_some!(self.verbosity, file.verbosity);
            assign_if_some!(self.component, file.component);
            if let Some(gates) = &file.feature_gates {
                self.feature_gates.set_from_str(gates)?;
            }
            self.try_merge(file.generic)?;
            self.try_merge(file.leader_election)?;
            self.try_merge(file.leader_migration)?;
        }
        Ok(())
    }
}

impl MergeOptions<Option<LeaderMigrationFileOptions>> for AppSettings {
    fn try_merge(&mut self, opts: Option<LeaderMigrationFileOptions>) -> Fallible<()> {
        if let Some(migration) = opts {
            assign_if_some!(self.leader_migration.enabled, migration.enabled);
            assign_if_some!(self.leader_migration.config, migration.config);
        }
        Ok(())
    }
}
