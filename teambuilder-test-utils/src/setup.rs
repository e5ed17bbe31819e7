use tracing_core::Level;

/// Routes `log` records from the crates under test to the test harness output.
///
/// Call at the top of each test. Only the first call installs the subscriber.
pub fn setup_test_environment() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
