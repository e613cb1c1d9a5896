//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing`. The level defaults to `warn` and can
//! be raised with `RUST_LOG`, e.g. `RUST_LOG=aide_cli=debug`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!crate::output::is_no_color())
                .with_target(false),
        )
        .try_init();
}
