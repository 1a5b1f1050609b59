//! Deserializers.

/// Map a numerical verbosity (e.g. number of `-v` flags) to a log-level.
pub fn verbosity_to_loglevel(level: u64) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Deserialize a log-level from a numerical value.
pub fn de_loglevel<'de, D>(deserializer: D) -> Result<Option<log::LevelFilter>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let numlevel = u8::deserialize(deserializer)?;
    Ok(Some(verbosity_to_loglevel(u64::from(numlevel))))
}
