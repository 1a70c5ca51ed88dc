//! Browser console logging.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,ui=debug,payloads=debug";

/// `LOG_FILTER` at build time replaces the default directives.
fn filter_directives() -> &'static str {
    option_env!("LOG_FILTER")
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
}

/// Install the console subscriber. Later calls are ignored.
pub fn init_logging() {
    let directives = filter_directives();

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // no clock in wasm32
        .with_target(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(console)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%directives, "console logging ready");
    }
}
