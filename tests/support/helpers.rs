// tests/support/helpers.rs
use once_cell::sync::Lazy;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
});

/// Installs a test-friendly subscriber once per test binary. Set `RUST_LOG`
/// to see the binder's debug output.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
