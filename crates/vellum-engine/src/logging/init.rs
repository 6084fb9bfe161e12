use std::sync::Once;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "VELLUM_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "vellum_engine::scene=trace"). When unset, [`LOG_ENV`] and then `RUST_LOG` are read.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. A logger installed by someone else is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var(LOG_ENV).ok())
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter {
            Some(f) => {
                builder.parse_filters(&f);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style).is_test(config.is_test);

        if builder.try_init().is_err() {
            log::debug!("logger already installed; keeping it");
            return;
        }
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = LoggingConfig {
            env_filter: Some("vellum_engine=trace".into()),
            is_test: true,
            ..LoggingConfig::default()
        };
        init_logging(config.clone());
        init_logging(config);
        log::trace!("still fine");
    }
}
