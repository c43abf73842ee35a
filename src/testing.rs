use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the tracing subscriber for tests, once per test binary.
pub fn init_testing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}
