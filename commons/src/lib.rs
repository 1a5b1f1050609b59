//! Common utilities for the controller-manager workspace.

#![deny(missing_docs)]

#[macro_use]
mod config;
pub use crate::config::MergeOptions;

pub mod de;
pub mod testing;

mod errors;
pub use errors::Fallible;

/// Commonly used imports for error handling.
pub mod prelude_errors {
    pub use crate::errors::prelude::*;
}

use crate::prelude_errors::*;

/// Split a comma-separated list into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept.
pub fn parse_list<S>(input: S) -> Vec<String>
where
    S: AsRef<str>,
{
    input
        .as_ref()
        .split(',')
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Parse a boolean, accepting `1`, `t`, `T`, `TRUE`, `true`, `True` and
/// their `0`/`f`/`false` counterparts.
pub fn parse_bool<S>(input: S) -> Fallible<bool>
where
    S: AsRef<str>,
{
    match input.as_ref() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => bail!("invalid bool '{}'", other),
    }
}

/// Parse a comma-separated set of `key=bool` pairs (e.g. `A=true,B=false`).
pub fn parse_bool_pairs<S>(input: S) -> Fallible<Vec<(String, bool)>>
where
    S: AsRef<str>,
{
    parse_list(input)
        .into_iter()
        .map(|entry| -> Fallible<(String, bool)> {
            let (key, value) = match entry.split_once('=') {
                Some(kv) => kv,
                None => bail!("missing bool value for '{}'", entry),
            };
            let key = key.trim();
            ensure!(!key.is_empty(), "missing key in '{}'", entry);
            let value = parse_bool(value.trim())
                .with_context(|| format!("invalid bool value for '{}'", key))?;
            Ok((key.to_string(), value))
        })
        .collect()
}
