use crate::settings::Settings;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not consulted. With `debug_logging` the
/// dashboard's own layout and drag traces are shown, other crates stay at
/// `warn`.
fn default_directive(settings: &Settings) -> &'static str {
    if settings.debug_logging {
        "warn,care_dashboard=debug"
    } else {
        "warn,care_dashboard=info"
    }
}

/// Install the global subscriber according to `settings.debug_logging`.
/// `RUST_LOG` is honoured only when debug logging is switched on. Calling
/// this twice keeps the first subscriber.
pub fn init(settings: &Settings) {
    let directive = default_directive(settings);
    let filter = if settings.debug_logging {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    } else {
        EnvFilter::new(directive)
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(filter = directive, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_logging_raises_only_this_crate() {
        let quiet = Settings::default();
        assert_eq!(default_directive(&quiet), "warn,care_dashboard=info");

        let verbose = Settings {
            debug_logging: true,
            ..Settings::default()
        };
        assert_eq!(default_directive(&verbose), "warn,care_dashboard=debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(&Settings::default());
        init(&Settings::default());
        tracing::info!("still logging");
    }
}
