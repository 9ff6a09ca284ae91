use std::time::Duration;

/// Quiet window used by live search fields before a filter runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Config {
    /// How long input has to stay unchanged before it settles.
    pub debounce: Duration,
    /// Accepts the old `:` / `::port` catch-all as an IPv6 literal.
    ///
    /// Off by default. Turning it on makes every token that starts with a
    /// colon classify as IPv6.
    pub legacy_bare_port: bool,
    /// 0 prints everything, 1 drops decorations, 2 prints only the verdict.
    pub quiet: u8,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            legacy_bare_port: false,
            quiet: 0,
            json: false,
        }
    }
}
