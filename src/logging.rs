//! Tracing setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is left to the shell
//! for rendered summaries and forecasts.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// `default_directive` (e.g. `"fintrack=warn"`) applies when `RUST_LOG` is not
/// set. Subsequent calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

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
    fn init_is_idempotent() {
        init_tracing("fintrack=debug");
        init_tracing("not a valid directive [");
        tracing::debug!("tracing initialized twice without panicking");
    }
}
