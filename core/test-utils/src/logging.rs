use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the fmt subscriber once per test binary so `tracing` output from
/// the code under test is visible with `--nocapture`.
pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}
