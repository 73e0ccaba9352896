use std::sync::Once;

use log::LevelFilter;

/// Settings for the process-wide logger.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives in `env_logger` syntax, e.g. `"clockface_ui=debug"`.
    /// Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    /// Level used when neither `filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    /// Millisecond timestamps, fine enough to follow individual sampler ticks.
    pub millis: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            millis: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` for the process. Only the first call has an effect.
///
/// If the host already installed another logger, that logger is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let from_env = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
        let mut builder = env_logger::Builder::new();

        match pick_filter(config.filter.as_deref(), from_env.as_deref()) {
            Some(directives) => {
                builder.parse_filters(directives);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }
        if config.millis {
            builder.format_timestamp_millis();
        }
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialised");
        }
    });
}

/// Explicit configuration first, then the environment. Blank values are ignored.
fn pick_filter<'a>(configured: Option<&'a str>, from_env: Option<&'a str>) -> Option<&'a str> {
    configured
        .filter(|f| !f.trim().is_empty())
        .or(from_env.filter(|f| !f.trim().is_empty()))
}
