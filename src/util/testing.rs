//! Logging for tests.

use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

static LOGGING: Once = Once::new();

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_TEST_FILTER: &str = "sibtree=trace";

/// Routes `tracing` output of the crate to the test harness, once per binary.
///
/// Output is captured per test and shown only for failures. Leaves an already
/// installed global subscriber alone.
pub fn init_test_setup() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter);

        if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
            eprintln!("test logging not installed: {e}");
            return;
        }
        tracing::debug!(filter = DEFAULT_TEST_FILTER, "test logging ready");
    });
}
