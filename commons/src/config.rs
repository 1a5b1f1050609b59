//! Layered configuration helpers.
//!
//! Settings are assembled from defaults, then overlaid with each
//! configuration source in turn (file, then command-line).

#[macro_export]
/// Assign to destination if source value is `Some`.
macro_rules! assign_if_some {
    ( $dst:expr, $src:expr ) => {{
        if let Some(x) = $src {
            $dst = x.into();
        };
    }};
}

/// Try to merge a configuration fragment into runtime settings.
///
/// Only populated values from `options` are overlaid, unset ones leave
/// the existing settings untouched.
pub trait MergeOptions<T> {
    /// Merge values from `options` into current settings.
    fn try_merge(&mut self, options: T) -> crate::Fallible<()>;
}
