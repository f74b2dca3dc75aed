// rc522/src/card/operations/write.rs

use log::debug;

use crate::card::auth::require_auth;
use crate::card::operations::command_with_ack;
use crate::device::{Device, Initialized};
use crate::protocol::commands::{self, PiccCommand};
use crate::protocol::layout::trailer_block;
use crate::protocol::{AccessConditions, SectorTrailer, ValueBlock};
use crate::types::{BlockData, Key};
use crate::Result;

/// Two-phase WRITE: the command is acknowledged, then the 16 data bytes.
/// A NAK in the first phase stops before any data is sent.
pub fn write_block(device: &mut Device<Initialized>, block: u8, data: &BlockData) -> Result<()> {
    require_auth(device, block)?;
    device.card.transfer_pending = false;

    command_with_ack(device, PiccCommand::Write, block)?;

    let mut frame = commands::data_frame(data.as_bytes());
    device.append_crc(&mut frame)?;
    device.transceive(&frame)?.expect_ack()?;
    debug!("wrote block {}", block);
    Ok(())
}

/// Format `block` as a value block holding `value`.
pub fn write_value(device: &mut Device<Initialized>, block: u8, value: i32) -> Result<()> {
    let data = BlockData::from_bytes(ValueBlock::new(value, block).encode());
    write_block(device, block, &data)
}

/// Write a sector trailer. `access_bits` is validated before anything is
/// sent; a malformed value would lock the sector permanently.
pub fn write_trailer(
    device: &mut Device<Initialized>,
    sector: u8,
    key_a: &Key,
    access_bits: &[u8],
    user_data: u8,
    key_b: &Key,
) -> Result<()> {
    let access = AccessConditions::from_bytes(access_bits)?;
    let block = trailer_block(sector)?;
    let trailer = SectorTrailer {
        key_a: *key_a,
        access,
        user_data,
        key_b: *key_b,
    };
    write_block(device, block, &trailer.to_block())
}
