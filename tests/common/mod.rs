#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

/// Route `tracing` events to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
