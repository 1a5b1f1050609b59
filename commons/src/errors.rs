//! Error types and helpers shared by all crates.

/// Result type for operations with a type-erased error.
pub type Fallible<T> = anyhow::Result<T>;

/// Error-handling imports, re-exported via `prelude_errors`.
pub mod prelude {
    pub use super::Fallible;
    pub use anyhow::{anyhow as format_err, bail, ensure, Context, Error};
}
