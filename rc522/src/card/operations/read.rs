// rc522/src/card/operations/read.rs

use log::trace;

use crate::card::auth::require_auth;
use crate::constants::{BLOCK_BITS, COMMAND_ERROR_MASK, CRC_ERR, RX_CRC_EN};
use crate::device::{Command, Device, ExecOptions, Initialized, Register};
use crate::protocol::commands::{self, PiccCommand};
use crate::protocol::layout::trailer_block;
use crate::protocol::{AccessConditions, SectorTrailer, ValueBlock};
use crate::types::BlockData;
use crate::{Error, Result};

/// READ one block. The chip checks and strips the card's CRC_A, so a good
/// answer is exactly 128 bits.
pub fn read_block(device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
    require_auth(device, block)?;
    device.card.transfer_pending = false;

    let mut frame = commands::block_command_frame(PiccCommand::Read, block);
    device.append_crc(&mut frame)?;

    let opts = ExecOptions::new(device.config().command_timeout)
        .with_error_mask(COMMAND_ERROR_MASK | CRC_ERR);
    device.set_bits(Register::RxMode, RX_CRC_EN)?;
    let result = device.execute_with(Command::Transceive, &frame, opts);
    device.clear_bits(Register::RxMode, RX_CRC_EN)?;
    let resp = result?;

    if let Some(ack) = resp.ack_nibble() {
        return Err(Error::Nak { ack });
    }
    let data = resp.expect_bits(BLOCK_BITS)?;
    trace!("read block {}: {}", block, crate::utils::to_hex_spaced(data));
    BlockData::try_from(data)
}

/// Read a value block and verify its redundancy.
pub fn read_value(device: &mut Device<Initialized>, block: u8) -> Result<i32> {
    let data = read_block(device, block)?;
    ValueBlock::decode(data.as_bytes())
        .map(|vb| vb.value)
        .map_err(|_| Error::CorruptValueBlock { block })
}

/// Access conditions of `sector`, read from its trailer.
pub fn read_access_conditions(
    device: &mut Device<Initialized>,
    sector: u8,
) -> Result<AccessConditions> {
    let block = trailer_block(sector)?;
    let data = read_block(device, block)?;
    Ok(SectorTrailer::from_block(&data)?.access)
}
