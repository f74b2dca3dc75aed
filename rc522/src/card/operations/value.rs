// rc522/src/card/operations/value.rs

//! Value block commands. INCREMENT, DECREMENT and RESTORE leave their
//! result in the card's transfer buffer; TRANSFER commits it to a block.

use log::{debug, trace};

use crate::card::auth::require_auth;
use crate::card::operations::command_with_ack;
use crate::device::{Device, Initialized};
use crate::protocol::commands::{self, PiccCommand};
use crate::{Error, Result};

pub fn increment(device: &mut Device<Initialized>, block: u8, delta: i32) -> Result<()> {
    two_step(device, PiccCommand::Increment, block, delta)
}

pub fn decrement(device: &mut Device<Initialized>, block: u8, delta: i32) -> Result<()> {
    two_step(device, PiccCommand::Decrement, block, delta)
}

pub fn restore(device: &mut Device<Initialized>, block: u8) -> Result<()> {
    two_step(device, PiccCommand::Restore, block, 0)
}

pub fn transfer(device: &mut Device<Initialized>, block: u8) -> Result<()> {
    require_auth(device, block)?;
    if !device.card.transfer_pending {
        return Err(Error::InvalidState(
            "transfer without a preceding increment, decrement or restore".into(),
        ));
    }
    device.card.transfer_pending = false;
    command_with_ack(device, PiccCommand::Transfer, block)?;
    debug!("transferred into block {}", block);
    Ok(())
}

/// Command phase acknowledged, then the 4-byte operand. The card does not
/// answer the operand phase when it succeeds; only an explicit NAK fails it.
fn two_step(device: &mut Device<Initialized>, cmd: PiccCommand, block: u8, operand: i32) -> Result<()> {
    require_auth(device, block)?;
    device.card.transfer_pending = false;

    command_with_ack(device, cmd, block)?;

    let mut frame = commands::data_frame(&operand.to_le_bytes());
    device.append_crc(&mut frame)?;
    match device.transceive(&frame) {
        Ok(resp) => resp.expect_ack()?,
        Err(Error::Timeout) => trace!("{:?} operand phase: passive ack", cmd),
        Err(e) => return Err(e),
    }
    device.card.transfer_pending = true;
    Ok(())
}
