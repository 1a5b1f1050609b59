use crate::features::Feature;
use std::path::PathBuf;

/// Boxed source error of a failed config load.
pub type LoadSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to resolve leader migration options.
///
/// Both kinds are static misconfigurations, fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum LeaderMigrationError {
    #[error("leader migration requested, but feature gate {feature} is disabled")]
    GateDisabled { feature: Feature },
    #[error("failed to load leader migration configuration from {}", .path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: LoadSource,
    },
}
