// rc522/src/protocol/access.rs

//! Sector trailer access bits.
//!
//! Three condition nibbles C1, C2, C3 (bit i of each belongs to block
//! group i, group 3 being the trailer) are stored with inverted copies:
//!
//! ```text
//! byte 6: !C2 | !C1
//! byte 7:  C1 | !C3
//! byte 8:  C3 |  C2
//! ```

use crate::constants::{ACCESS_BITS_SIZE, BLOCK_SIZE, KEY_SIZE};
use crate::types::{BlockData, Key};
use crate::{Error, Result};

/// Decoded access condition nibbles of one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessConditions {
    c1: u8,
    c2: u8,
    c3: u8,
}

impl AccessConditions {
    /// Factory default: data blocks open with either key, trailer managed
    /// by key A (bytes FF 07 80).
    pub const TRANSPORT: Self = Self {
        c1: 0x0,
        c2: 0x0,
        c3: 0x8,
    };

    pub fn new(c1: u8, c2: u8, c3: u8) -> Result<Self> {
        if c1 > 0x0F || c2 > 0x0F || c3 > 0x0F {
            return Err(Error::InvalidParameter(format!(
                "condition nibbles out of range: c1={:#x} c2={:#x} c3={:#x}",
                c1, c2, c3
            )));
        }
        Ok(Self { c1, c2, c3 })
    }

    /// Build from the 3-bit condition (C1C2C3, C1 most significant) of
    /// each block group, trailer last.
    pub fn from_groups(groups: [u8; 4]) -> Result<Self> {
        let (mut c1, mut c2, mut c3) = (0u8, 0u8, 0u8);
        for (i, &g) in groups.iter().enumerate() {
            if g > 0x07 {
                return Err(Error::InvalidParameter(format!(
                    "access condition {:#05b} for group {} is wider than 3 bits",
                    g, i
                )));
            }
            c1 |= ((g >> 2) & 1) << i;
            c2 |= ((g >> 1) & 1) << i;
            c3 |= (g & 1) << i;
        }
        Ok(Self { c1, c2, c3 })
    }

    /// 3-bit condition of block group `group` (0..=3).
    pub fn group(&self, group: u8) -> u8 {
        let i = group & 0x03;
        (((self.c1 >> i) & 1) << 2) | (((self.c2 >> i) & 1) << 1) | ((self.c3 >> i) & 1)
    }

    pub fn groups(&self) -> [u8; 4] {
        [self.group(0), self.group(1), self.group(2), self.group(3)]
    }

    pub fn nibbles(&self) -> (u8, u8, u8) {
        (self.c1, self.c2, self.c3)
    }

    pub fn to_bytes(&self) -> [u8; ACCESS_BITS_SIZE] {
        [
            ((!self.c2 & 0x0F) << 4) | (!self.c1 & 0x0F),
            (self.c1 << 4) | (!self.c3 & 0x0F),
            (self.c3 << 4) | self.c2,
        ]
    }

    /// Decode and verify the inverted copies.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let [b6, b7, b8]: [u8; ACCESS_BITS_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: ACCESS_BITS_SIZE,
                actual: bytes.len(),
            })?;
        let c1 = b7 >> 4;
        let c2 = b8 & 0x0F;
        let c3 = b8 >> 4;
        let consistent =
            (!b6 & 0x0F) == c1 && ((!b6 >> 4) & 0x0F) == c2 && (!b7 & 0x0F) == c3;
        if !consistent {
            return Err(Error::InvalidParameter(format!(
                "access bits {:02X} {:02X} {:02X} do not match their inverted copies",
                b6, b7, b8
            )));
        }
        Ok(Self { c1, c2, c3 })
    }
}

impl Default for AccessConditions {
    fn default() -> Self {
        Self::TRANSPORT
    }
}

/// Encode condition nibbles into the three access bytes of a trailer.
pub fn access_bits(c1: u8, c2: u8, c3: u8) -> Result<[u8; ACCESS_BITS_SIZE]> {
    Ok(AccessConditions::new(c1, c2, c3)?.to_bytes())
}

pub fn access_conditions(bytes: &[u8]) -> Result<AccessConditions> {
    AccessConditions::from_bytes(bytes)
}

/// Contents of a sector trailer block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorTrailer {
    pub key_a: Key,
    pub access: AccessConditions,
    pub user_data: u8,
    pub key_b: Key,
}

impl SectorTrailer {
    const ACCESS_OFFSET: usize = KEY_SIZE;
    const USER_OFFSET: usize = KEY_SIZE + ACCESS_BITS_SIZE;
    const KEY_B_OFFSET: usize = BLOCK_SIZE - KEY_SIZE;

    pub fn to_block(&self) -> BlockData {
        let mut block = [0u8; BLOCK_SIZE];
        block[..KEY_SIZE].copy_from_slice(self.key_a.as_bytes());
        block[Self::ACCESS_OFFSET..Self::USER_OFFSET].copy_from_slice(&self.access.to_bytes());
        block[Self::USER_OFFSET] = self.user_data;
        block[Self::KEY_B_OFFSET..].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(block)
    }

    /// Parse a trailer as read back from a card. Key A always reads as
    /// zeros; key B reads as zeros unless the access bits expose it.
    pub fn from_block(block: &BlockData) -> Result<Self> {
        let bytes = block.as_bytes();
        Ok(Self {
            key_a: Key::try_from(&bytes[..KEY_SIZE])?,
            access: AccessConditions::from_bytes(&bytes[Self::ACCESS_OFFSET..Self::USER_OFFSET])?,
            user_data: bytes[Self::USER_OFFSET],
            key_b: Key::try_from(&bytes[Self::KEY_B_OFFSET..])?,
        })
    }
}
