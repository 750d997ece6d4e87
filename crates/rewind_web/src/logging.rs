//! Console logging for the browser.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Installs a `tracing` subscriber that writes to the browser console.
///
/// An unparsable `directive` falls back to `info`; the returned error text
/// lets the caller report it once logging is up.
pub fn init(directive: &str) -> Option<String> {
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    };

    // No clock in the browser, so no timestamps.
    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init();

    rejected
}
