// rc522/src/protocol/frame.rs

use crate::constants::{ACK_BITS, MIFARE_ACK};
use crate::{Error, Result};

/// Bytes drained from the FIFO after a transceive, plus the number of valid
/// bits the chip reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    data: Vec<u8>,
    bit_len: usize,
}

impl Response {
    pub fn new(data: Vec<u8>, bit_len: usize) -> Self {
        Self { data, bit_len }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Valid bits for a FIFO holding `level` bytes whose last byte carries
    /// `last_bits` valid bits (0 meaning a whole byte).
    pub fn bit_length(level: u8, last_bits: u8) -> usize {
        let level = level as usize;
        match last_bits & 0x07 {
            0 => level * 8,
            bits => level.saturating_sub(1) * 8 + bits as usize,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn expect_bits(&self, expected: usize) -> Result<&[u8]> {
        if self.bit_len != expected || self.data.len() * 8 < expected {
            return Err(Error::UnexpectedBitLength {
                expected,
                actual: self.bit_len,
            });
        }
        Ok(&self.data)
    }

    /// A 4-bit answer from the card, if that is what was received.
    pub fn ack_nibble(&self) -> Option<u8> {
        match (self.bit_len, self.data.first()) {
            (ACK_BITS, Some(&b)) => Some(b & 0x0F),
            _ => None,
        }
    }

    /// Succeeds only on the MIFARE ACK; any other 4-bit answer is a NAK.
    pub fn expect_ack(&self) -> Result<()> {
        match self.ack_nibble() {
            Some(MIFARE_ACK) => Ok(()),
            Some(ack) => Err(Error::Nak { ack }),
            None => Err(Error::UnexpectedBitLength {
                expected: ACK_BITS,
                actual: self.bit_len,
            }),
        }
    }
}
