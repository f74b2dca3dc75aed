//! Small helpers shared across the crate: hex formatting for diagnostics and
//! the bounded-wait polling primitive used by the command engine and the CRC
//! adapter.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
