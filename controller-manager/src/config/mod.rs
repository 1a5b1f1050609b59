//! Configuration lookup, parsing and validation.
//!
//! This module takes care of sourcing configuration options from
//! multiple inputs (CLI and files), merging, and validating them.
//! It contains the following entities:
//!  * "options": configuration fragments (CLI flags, file snippets).
//!  * "app settings": runtime settings, result of config validation.
//!  * "generic": the runtime configuration handed to controllers.

mod cli;
mod file;
mod generic;
mod options;
mod settings;

pub use self::generic::{GenericControllerManagerConfiguration, LeaderElectionConfiguration};
pub use self::settings::AppSettings;
