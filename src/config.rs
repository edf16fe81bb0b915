/// Config for a registry
/// ## Fields
/// - `warn_on_overwrite`:
///   If `true`, registering a key that already has a message is logged as a warning.
///
///   The new message replaces the old one either way.
///   Errors built before the overwrite keep their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub warn_on_overwrite: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { warn_on_overwrite: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
