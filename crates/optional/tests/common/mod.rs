/// Routes the crate's `debug!` records to the test output when `RUST_LOG`
/// is set. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
