// rc522/src/card/operations/mod.rs

//! Block memory operations on an authenticated sector.

pub mod read;
pub mod value;
pub mod write;

pub use read::{read_access_conditions, read_block, read_value};
pub use value::{decrement, increment, restore, transfer};
pub use write::{write_block, write_trailer, write_value};

use crate::device::{Device, Initialized};
use crate::protocol::commands::{self, PiccCommand};
use crate::Result;

/// Send `cmd` addressed to `block` and require the 4-bit ACK.
pub(crate) fn command_with_ack(
    device: &mut Device<Initialized>,
    cmd: PiccCommand,
    block: u8,
) -> Result<()> {
    let mut frame = commands::block_command_frame(cmd, block);
    device.append_crc(&mut frame)?;
    device.transceive(&frame)?.expect_ack()
}
