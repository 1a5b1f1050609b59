//! Test helpers.

use crate::prelude_errors::*;
use std::io::Write;

/// Initialize logging.
pub fn init_logger() -> Fallible<()> {
    env_logger::try_init_from_env(env_logger::Env::default())?;
    Ok(())
}

/// Write `content` into a fresh temporary file.
///
/// The file is removed when the returned handle is dropped.
pub fn tempfile_with(content: &str) -> Fallible<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new().context("failed to create tempfile")?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
