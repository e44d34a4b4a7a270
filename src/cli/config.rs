//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress bars
    pub progress: bool,

    /// Verbosity level (number of `-v` flags)
    pub verbose: u8,
}

impl CommonConfig {
    /// Default tracing filter for the verbosity level; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_log_level() {
        let mut config = CommonConfig::default();
        assert_eq!(config.log_filter(), "warn");
        config.verbose = 1;
        assert_eq!(config.log_filter(), "info");
        config.verbose = 4;
        assert_eq!(config.log_filter(), "debug");
    }
}
