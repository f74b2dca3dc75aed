// rc522/src/protocol/commands.rs

//! ISO/IEC 14443-3 type A and MIFARE Classic command codes, plus builders
//! for the frames the driver hands to the transceive engine. Frames that
//! end in CRC_A carry two zero placeholder bytes; the caller fills them via
//! the chip's CRC coprocessor.

use crate::constants::{CRC_SIZE, KEY_SIZE};
use crate::protocol::checksum::bcc;
use crate::types::{Key, KeyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PiccCommand {
    ReqA = 0x26,
    WupA = 0x52,
    /// Not a command: first UID byte announcing another cascade level.
    CascadeTag = 0x88,
    SelCl1 = 0x93,
    SelCl2 = 0x95,
    HltA = 0x50,
    AuthKeyA = 0x60,
    AuthKeyB = 0x61,
    Read = 0x30,
    Write = 0xA0,
    Decrement = 0xC0,
    Increment = 0xC1,
    Restore = 0xC2,
    Transfer = 0xB0,
}

impl PiccCommand {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Anticollision/select cascade levels supported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    One,
    Two,
}

impl CascadeLevel {
    pub fn select_command(self) -> PiccCommand {
        match self {
            CascadeLevel::One => PiccCommand::SelCl1,
            CascadeLevel::Two => PiccCommand::SelCl2,
        }
    }
}

/// NVB for an anticollision frame: 2 bytes, no UID bits known.
pub const NVB_ANTICOLLISION: u8 = 0x20;
/// NVB for a select frame: 7 whole bytes.
pub const NVB_SELECT: u8 = 0x70;

/// Short frame; sent with 7 valid bits in its only byte.
pub fn request_frame(cmd: PiccCommand) -> [u8; 1] {
    [cmd.code()]
}

pub fn anticollision_frame(level: CascadeLevel) -> [u8; 2] {
    [level.select_command().code(), NVB_ANTICOLLISION]
}

pub fn select_frame(level: CascadeLevel, uid_part: &[u8; 4]) -> [u8; 9] {
    let mut frame = [0u8; 9];
    frame[0] = level.select_command().code();
    frame[1] = NVB_SELECT;
    frame[2..6].copy_from_slice(uid_part);
    frame[6] = bcc(uid_part);
    frame
}

pub fn halt_frame() -> [u8; 4] {
    [PiccCommand::HltA.code(), 0x00, 0x00, 0x00]
}

/// Command byte, block address, CRC placeholder.
pub fn block_command_frame(cmd: PiccCommand, block: u8) -> [u8; 4] {
    [cmd.code(), block, 0x00, 0x00]
}

/// Payload for the second phase of WRITE and the value commands.
pub fn data_frame(data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(data.len() + CRC_SIZE);
    frame.extend_from_slice(data);
    frame.extend_from_slice(&[0x00; CRC_SIZE]);
    frame
}

/// FIFO contents for MFAuthent: command, block, key, and the four UID bytes
/// of the last cascade level.
pub fn auth_frame(key_type: KeyType, block: u8, key: &Key, uid_tail: &[u8; 4]) -> [u8; 12] {
    let mut frame = [0u8; 2 + KEY_SIZE + 4];
    frame[0] = key_type.auth_command().code();
    frame[1] = block;
    frame[2..2 + KEY_SIZE].copy_from_slice(key.as_bytes());
    frame[2 + KEY_SIZE..].copy_from_slice(uid_tail);
    frame
}
