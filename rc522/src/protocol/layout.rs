// rc522/src/protocol/layout.rs

//! MIFARE Classic memory layout. Sectors 0..32 hold four blocks each
//! (the whole of a 1K card); sectors 32..40 of a 4K card hold sixteen.

use crate::{Error, Result};

pub const SMALL_SECTORS: u8 = 32;
pub const SECTOR_COUNT_1K: u8 = 16;
pub const SECTOR_COUNT_4K: u8 = 40;
const SMALL_SECTOR_BLOCKS: u8 = 4;
const LARGE_SECTOR_BLOCKS: u8 = 16;
/// First block of the large sectors.
const LARGE_SECTOR_BASE: u8 = SMALL_SECTORS * SMALL_SECTOR_BLOCKS;

pub fn blocks_in_sector(sector: u8) -> Result<u8> {
    match sector {
        s if s < SMALL_SECTORS => Ok(SMALL_SECTOR_BLOCKS),
        s if s < SECTOR_COUNT_4K => Ok(LARGE_SECTOR_BLOCKS),
        s => Err(Error::InvalidParameter(format!("sector {} out of range", s))),
    }
}

pub fn first_block(sector: u8) -> Result<u8> {
    blocks_in_sector(sector)?;
    Ok(if sector < SMALL_SECTORS {
        sector * SMALL_SECTOR_BLOCKS
    } else {
        LARGE_SECTOR_BASE + (sector - SMALL_SECTORS) * LARGE_SECTOR_BLOCKS
    })
}

/// Absolute block address of `block` within `sector`.
pub fn block_address(sector: u8, block: u8) -> Result<u8> {
    let count = blocks_in_sector(sector)?;
    if block >= count {
        return Err(Error::InvalidParameter(format!(
            "block {} out of range for sector {} ({} blocks)",
            block, sector, count
        )));
    }
    Ok(first_block(sector)? + block)
}

pub fn sector_of(block: u8) -> u8 {
    if block < LARGE_SECTOR_BASE {
        block / SMALL_SECTOR_BLOCKS
    } else {
        SMALL_SECTORS + (block - LARGE_SECTOR_BASE) / LARGE_SECTOR_BLOCKS
    }
}

pub fn trailer_block(sector: u8) -> Result<u8> {
    Ok(first_block(sector)? + (blocks_in_sector(sector)? - 1))
}

pub fn is_trailer(block: u8) -> bool {
    trailer_block(sector_of(block)).is_ok_and(|t| t == block)
}

/// Index of `block` inside its sector's access conditions (0..=3, 3 being
/// the trailer). Large sectors group five data blocks per condition.
pub fn access_group(block: u8) -> u8 {
    if block < LARGE_SECTOR_BASE {
        block % SMALL_SECTOR_BLOCKS
    } else {
        ((block - LARGE_SECTOR_BASE) % LARGE_SECTOR_BLOCKS / 5).min(3)
    }
}
