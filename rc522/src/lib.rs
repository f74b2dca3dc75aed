// rc522/src/lib.rs

//! rc522
//!
//! Pure Rust driver for the NXP MFRC522 contactless reader: register
//! access over a byte transport, the chip's command engine and CRC
//! coprocessor, ISO/IEC 14443-3 type A activation and MIFARE Classic
//! authentication, block, value block and sector trailer operations.

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error, Result and the card newtypes live at the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
