//! Leader migration configuration: types, defaults, loading and validation.

mod default;
mod file;
mod validation;

pub use self::default::{default_leader_migration_configuration, DEFAULT_CONFIG_VERSION};
pub use self::file::{read_filepath, ConfigLoader, FileLoader};
pub use self::validation::{validate, FieldError};

use strum_macros::{Display, EnumString};

/// API group of the configuration document.
pub static API_GROUP: &str = "controllermanager.config.k8s.io";

/// Versions within `API_GROUP` accepted by the loader.
pub static SUPPORTED_VERSIONS: &[&str] = &["v1alpha1", "v1beta1"];

/// Whether `api_version` names a supported version of `API_GROUP`.
pub fn is_supported_api_version(api_version: &str) -> bool {
    match api_version.split_once('/') {
        Some((group, version)) => group == API_GROUP && SUPPORTED_VERSIONS.contains(&version),
        None => false,
    }
}

/// Kind of the configuration document.
pub static KIND: &str = "LeaderMigrationConfiguration";

/// Component wildcard, matching every controller-manager.
pub static COMPONENT_WILDCARD: &str = "*";

/// Lock resource kinds usable for the migration lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum ResourceLock {
    #[strum(serialize = "leases")]
    Leases,
    #[strum(serialize = "endpoints")]
    Endpoints,
}

/// Configuration for controller leader migration.
///
/// The zero value (`Default`) is what an unset configuration looks like.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderMigrationConfiguration {
    /// Name of the lock resource used for migration.
    pub leader_name: String,

    /// Kind of the lock resource, see [`ResourceLock`].
    pub resource_lock: String,

    /// Controllers taking part in the migration, in order.
    ///
    /// `None` when the list was not specified at all, which is distinct from
    /// an empty list.
    pub controller_leaders: Option<Vec<ControllerLeaderConfiguration>>,
}

impl LeaderMigrationConfiguration {
    /// Controller leaders, or an empty slice if unset.
    pub fn controller_leaders(&self) -> &[ControllerLeaderConfiguration] {
        self.controller_leaders.as_deref().unwrap_or(&[])
    }
}

/// Migration target for a single controller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerLeaderConfiguration {
    /// Name of the controller.
    #[serde(default)]
    pub name: String,

    /// Component which should run the controller, `*` for any.
    #[serde(default)]
    pub component: String,
}

impl ControllerLeaderConfiguration {
    /// Build an entry for `name` owned by `component`.
    pub fn new<N, C>(name: N, component: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            component: component.into(),
        }
    }
}
