//! Loading a leader migration configuration from file.

use super::{validate, ControllerLeaderConfiguration, LeaderMigrationConfiguration};
use super::{is_supported_api_version, API_GROUP, KIND, SUPPORTED_VERSIONS};
use commons::prelude_errors::*;
use std::io::Read;
use std::{fs, io, path};

/// Source of leader migration configurations.
pub trait ConfigLoader {
    /// Load a fully validated configuration from `cfg_path`.
    fn load(&self, cfg_path: &path::Path) -> Fallible<LeaderMigrationConfiguration>;
}

/// Loader for YAML configuration documents on the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileLoader;

impl ConfigLoader for FileLoader {
    fn load(&self, cfg_path: &path::Path) -> Fallible<LeaderMigrationConfiguration> {
        read_filepath(cfg_path)
    }
}

/// On-disk document, before conversion and validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigDocument {
    api_version: Option<String>,
    kind: Option<String>,
    #[serde(default)]
    leader_name: String,
    #[serde(default)]
    resource_lock: String,
    controller_leaders: Option<Vec<ControllerLeaderConfiguration>>,
}

impl ConfigDocument {
    fn check_type_meta(&self) -> Fallible<()> {
        if let Some(kind) = &self.kind {
            ensure!(kind == KIND, "unexpected kind '{}', expected '{}'", kind, KIND);
        }
        if let Some(api_version) = &self.api_version {
            ensure!(
                is_supported_api_version(api_version),
                "unsupported apiVersion '{}', expected {}/{{{}}}",
                api_version,
                API_GROUP,
                SUPPORTED_VERSIONS.join(",")
            );
        }
        Ok(())
    }
}

impl From<ConfigDocument> for LeaderMigrationConfiguration {
    fn from(doc: ConfigDocument) -> Self {
        Self {
            leader_name: doc.leader_name,
            resource_lock: doc.resource_lock,
            controller_leaders: doc.controller_leaders,
        }
    }
}

/// Read, parse and validate a configuration from path.
pub fn read_filepath<P>(cfg_path: P) -> Fallible<LeaderMigrationConfiguration>
where
    P: AsRef<path::Path>,
{
    let cfg_file = fs::File::open(&cfg_path).context(format!(
        "failed to open leader migration config path {:?}",
        cfg_path.as_ref()
    ))?;
    let mut bufrd = io::BufReader::new(cfg_file);

    let mut content = vec![];
    bufrd.read_to_end(&mut content)?;
    from_slice(&content).context(format!(
        "failed to parse leader migration config file {}",
        cfg_path.as_ref().display()
    ))
}

/// Parse and validate a configuration from YAML content.
pub fn from_slice(content: &[u8]) -> Fallible<LeaderMigrationConfiguration> {
    let doc: ConfigDocument = serde_yaml::from_slice(content)?;
    doc.check_type_meta()?;

    let cfg = LeaderMigrationConfiguration::from(doc);
    let errs = validate(&cfg);
    if !errs.is_empty() {
        let details: Vec<String> = errs.iter().map(ToString::to_string).collect();
        bail!(
            "invalid leader migration configuration: [{}]",
            details.join(", ")
        );
    }

    Ok(cfg)
}
