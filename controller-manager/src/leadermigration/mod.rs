//! Controller leader migration.
//!
//! This module takes care of gating, loading, defaulting and validating
//! the leader migration configuration during startup:
//!  * "config": configuration types, defaults, file loading and validation.
//!  * "options": command-line flags and the option resolver.
//!  * "filter": per-controller view over a resolved configuration.

pub mod config;
mod errors;
mod filter;
mod options;

pub use self::errors::LeaderMigrationError;
pub use self::filter::{FilterResult, LeaderMigrator};
pub use self::options::{LeaderMigrationOptions, ResolvedLeaderMigration};

use crate::config::GenericControllerManagerConfiguration;

/// Whether leader migration was resolved as enabled for this process.
pub fn enabled(generic: &GenericControllerManagerConfiguration) -> bool {
    generic.leader_migration_enabled
}
