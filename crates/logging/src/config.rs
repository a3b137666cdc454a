//! crates/logging/src/config.rs
//! Verbosity configuration derived from the `-v` repeat count.

use tracing::level_filters::LevelFilter;

/// Highest verbosity level with a distinct meaning.
const MAX_LEVEL: u8 = 3;

/// Verbosity selected on the command line.
///
/// | level | events shown                          |
/// |-------|---------------------------------------|
/// | 0     | warnings and errors                   |
/// | 1     | plus per-operation summaries (`info`) |
/// | 2     | plus aligner/codec detail (`debug`)   |
/// | 3+    | everything (`trace`)                  |
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub struct VerbosityConfig {
    level: u8,
}

impl VerbosityConfig {
    /// Creates a configuration from a verbose level; values above 3 saturate.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let level = if level > MAX_LEVEL { MAX_LEVEL } else { level };
        Self { level }
    }

    /// Quiet configuration: warnings and errors only.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { level: 0 }
    }

    /// Returns the effective verbose level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Maps the verbose level onto a `tracing` level filter.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Directive string understood by `EnvFilter`, scoped to bdelta targets.
    #[must_use]
    pub fn directive(self) -> String {
        let level = self.level_filter().to_string().to_ascii_lowercase();
        format!("warn,{}={level}", crate::TARGET_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        assert_eq!(VerbosityConfig::default(), VerbosityConfig::quiet());
        assert_eq!(VerbosityConfig::default().level_filter(), LevelFilter::WARN);
    }

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(1).level_filter(),
            LevelFilter::INFO
        );
        assert_eq!(
            VerbosityConfig::from_verbose_level(2).level_filter(),
            LevelFilter::DEBUG
        );
        assert_eq!(
            VerbosityConfig::from_verbose_level(3).level_filter(),
            LevelFilter::TRACE
        );
    }

    #[test]
    fn high_levels_saturate() {
        let config = VerbosityConfig::from_verbose_level(9);
        assert_eq!(config.level(), 3);
        assert_eq!(config.level_filter(), LevelFilter::TRACE);
    }

    #[test]
    fn directive_targets_workspace_events() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(2).directive(),
            "warn,bdelta=debug"
        );
        assert_eq!(VerbosityConfig::quiet().directive(), "warn,bdelta=warn");
    }
}
