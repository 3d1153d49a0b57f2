//! Tracing setup for the `budget` binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_FILTER: &str = "budget_sheet=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, logging to stderr
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // another subscriber may already be installed (tests)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::warn!("logging initialised");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
