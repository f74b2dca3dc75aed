// rc522/src/protocol/value.rs

//! MIFARE value block format: a signed 32-bit value stored three times
//! (plain, inverted, plain; little-endian) followed by an address byte
//! stored four times (plain, inverted, plain, inverted).

use crate::constants::BLOCK_SIZE;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBlock {
    pub value: i32,
    pub address: u8,
}

impl ValueBlock {
    pub fn new(value: i32, address: u8) -> Self {
        Self { value, address }
    }

    pub fn encode(&self) -> [u8; BLOCK_SIZE] {
        let v = self.value.to_le_bytes();
        let inv = (!self.value).to_le_bytes();
        let mut block = [0u8; BLOCK_SIZE];
        block[0..4].copy_from_slice(&v);
        block[4..8].copy_from_slice(&inv);
        block[8..12].copy_from_slice(&v);
        block[12] = self.address;
        block[13] = !self.address;
        block[14] = self.address;
        block[15] = !self.address;
        block
    }

    /// Decode and check every redundant copy. A mismatch reports the
    /// address byte found in the block.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let block: &[u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        })?;
        let word = |i: usize| i32::from_le_bytes([block[i], block[i + 1], block[i + 2], block[i + 3]]);
        let (value, inverted, copy) = (word(0), word(4), word(8));
        let address = block[12];
        let value_ok = value == copy && !value == inverted;
        let address_ok = block[14] == address && block[13] == !address && block[15] == !address;
        if !(value_ok && address_ok) {
            return Err(Error::CorruptValueBlock { block: address });
        }
        Ok(Self { value, address })
    }
}

pub fn encode_value_block(value: i32, address: u8) -> [u8; BLOCK_SIZE] {
    ValueBlock::new(value, address).encode()
}

pub fn decode_value_block(bytes: &[u8]) -> Result<i32> {
    ValueBlock::decode(bytes).map(|vb| vb.value)
}

pub fn is_value_block(bytes: &[u8]) -> bool {
    ValueBlock::decode(bytes).is_ok()
}
