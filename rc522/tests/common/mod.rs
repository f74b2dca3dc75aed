// Shared helpers for the integration test crates.
#![allow(dead_code)]


pub use rc522::test_support::{
    activation_replies, authenticated_mock_device, initialized_mock_device, mock_device,
    selected_mock_device,
};

/// Route `log` output through env_logger; set RUST_LOG=rc522=trace to see
/// register traffic.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
