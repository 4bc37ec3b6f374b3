//! Tracing setup for the `trailhead` binary.
//!
//! Library crates only emit events; this is the one place a subscriber is
//! installed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=trailhead_search=trace trailhead knight
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
