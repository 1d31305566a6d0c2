use std::sync::Once;

/// wgpu and naga are chatty at info; keep them to warnings unless asked.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger setup, usually built from command-line flags.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"debug"` or `"kiln_engine::time=trace"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,

    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter that will be applied: explicit, else `rust_log`, else [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        self.env_filter
            .as_deref()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Only the first call does anything.
///
/// Timestamps carry milliseconds so pacing logs can be lined up against each other.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .try_init();

        match installed {
            Ok(()) => log::debug!("logging initialized with filter {filter:?}"),
            Err(e) => eprintln!("kiln: logger already installed: {e}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            env_filter: filter.map(str::to_string),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn explicit_filter_wins_over_env() {
        assert_eq!(config(Some("debug")).resolve_filter(Some("warn")), "debug");
    }

    #[test]
    fn env_filter_used_when_not_configured() {
        assert_eq!(config(None).resolve_filter(Some("trace")), "trace");
    }

    #[test]
    fn default_filter_quiets_wgpu() {
        assert_eq!(config(None).resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        assert_eq!(config(Some("  ")).resolve_filter(Some("trace")), DEFAULT_FILTER);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(config(Some("off")));
        init_logging(config(Some("trace")));
    }
}
