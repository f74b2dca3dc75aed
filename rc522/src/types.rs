// rc522/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_SIZE, KEY_SIZE, RX_GAIN_MASK};
use crate::protocol::commands::PiccCommand;
use std::convert::TryFrom;
use std::fmt;

/// Card UID as resolved by anticollision: 4 bytes (single size) or 7 bytes
/// (double size, cascade level 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; 7],
    len: u8,
}

impl Uid {
    pub const SINGLE_LEN: usize = 4;
    pub const DOUBLE_LEN: usize = 7;

    pub fn from_single(bytes: [u8; 4]) -> Self {
        let mut buf = [0u8; 7];
        buf[..4].copy_from_slice(&bytes);
        Self { bytes: buf, len: 4 }
    }

    pub fn from_double(bytes: [u8; 7]) -> Self {
        Self { bytes, len: 7 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The 4-byte slices transmitted in each SELECT cascade level. Double
    /// size UIDs are prefixed with the cascade tag at level 1.
    pub fn cascade_parts(&self) -> Vec<[u8; 4]> {
        let b = &self.bytes;
        if self.len as usize == Self::DOUBLE_LEN {
            vec![
                [PiccCommand::CascadeTag as u8, b[0], b[1], b[2]],
                [b[3], b[4], b[5], b[6]],
            ]
        } else {
            vec![[b[0], b[1], b[2], b[3]]]
        }
    }

    /// The four bytes MIFARE Classic mixes into the authentication frame.
    pub fn auth_bytes(&self) -> [u8; 4] {
        let parts = self.cascade_parts();
        parts[parts.len() - 1]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::to_hex_upper(self.as_bytes())
    }

    /// Unsigned decimal bytes joined by `separator`, e.g. `4-161-33-7`.
    pub fn to_decimal_string(&self, separator: &str) -> String {
        self.as_bytes()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            Self::SINGLE_LEN => {
                let mut arr = [0u8; 4];
                arr.copy_from_slice(bytes);
                Ok(Self::from_single(arr))
            }
            Self::DOUBLE_LEN => {
                let mut arr = [0u8; 7];
                arr.copy_from_slice(bytes);
                Ok(Self::from_double(arr))
            }
            n => Err(Error::InvalidLength {
                expected: Self::SINGLE_LEN,
                actual: n,
            }),
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::to_hex_spaced(self.as_bytes()))
    }
}

/// Answer To Request, type A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa(pub [u8; 2]);

impl Atqa {
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// Select Acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sak(pub u8);

impl Sak {
    /// Cascade bit: the UID continues at the next cascade level.
    pub fn is_uid_complete(&self) -> bool {
        self.0 & 0x04 == 0
    }

    pub fn card_type(&self) -> CardType {
        CardType::from_sak(self.0)
    }
}

/// PICC family decoded from the SAK byte (NXP AN10833).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    #[display(fmt = "MIFARE Mini")]
    MifareMini,
    #[display(fmt = "MIFARE Classic 1K")]
    Mifare1K,
    #[display(fmt = "MIFARE Classic 4K")]
    Mifare4K,
    #[display(fmt = "MIFARE Ultralight")]
    MifareUltralight,
    #[display(fmt = "MIFARE Plus")]
    MifarePlus,
    #[display(fmt = "ISO/IEC 14443-4")]
    Iso14443_4,
    #[display(fmt = "ISO/IEC 18092 (NFC)")]
    Iso18092,
    #[display(fmt = "UID incomplete")]
    UidIncomplete,
    #[display(fmt = "unknown")]
    Unknown,
}

impl CardType {
    pub fn from_sak(sak: u8) -> Self {
        // bit 8 is ignored; some vendors set it
        match sak & 0x7F {
            0x04 => Self::UidIncomplete,
            0x09 => Self::MifareMini,
            0x08 => Self::Mifare1K,
            0x18 => Self::Mifare4K,
            0x00 => Self::MifareUltralight,
            0x10 | 0x11 => Self::MifarePlus,
            0x20 => Self::Iso14443_4,
            0x40 => Self::Iso18092,
            _ => Self::Unknown,
        }
    }

    pub fn is_mifare_classic(&self) -> bool {
        matches!(self, Self::MifareMini | Self::Mifare1K | Self::Mifare4K)
    }
}

/// Which sector key authenticates the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "key A")]
    A,
    #[display(fmt = "key B")]
    B,
}

impl KeyType {
    pub fn auth_command(&self) -> PiccCommand {
        match self {
            Self::A => PiccCommand::AuthKeyA,
            Self::B => PiccCommand::AuthKeyB,
        }
    }
}

/// 6-byte MIFARE Classic sector key.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Factory transport key.
    pub const DEFAULT: Self = Self([0xFF; KEY_SIZE]);

    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

// Keys are secrets; keep them out of debug logs.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(******)")
    }
}

/// One 16-byte card block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// 32 upper-case hex digits.
    pub fn to_hex(&self) -> String {
        crate::utils::to_hex_upper(&self.0)
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Receiver gain (RFCfgReg RxGain[2:0]).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntennaGain {
    #[display(fmt = "18 dB")]
    Db18 = 0x00,
    #[display(fmt = "23 dB")]
    Db23 = 0x10,
    #[display(fmt = "18 dB (alt)")]
    Db18Alt = 0x20,
    #[display(fmt = "23 dB (alt)")]
    Db23Alt = 0x30,
    #[display(fmt = "33 dB")]
    Db33 = 0x40,
    #[display(fmt = "38 dB")]
    Db38 = 0x50,
    #[display(fmt = "43 dB")]
    Db43 = 0x60,
    #[display(fmt = "48 dB")]
    Db48 = 0x70,
}

impl AntennaGain {
    pub const MIN: Self = Self::Db18;
    pub const MAX: Self = Self::Db48;

    pub fn register_bits(&self) -> u8 {
        *self as u8
    }

    /// Decode the RxGain field of an RFCfgReg value.
    pub fn from_register(value: u8) -> Self {
        match value & RX_GAIN_MASK {
            0x00 => Self::Db18,
            0x10 => Self::Db23,
            0x20 => Self::Db18Alt,
            0x30 => Self::Db23Alt,
            0x40 => Self::Db33,
            0x50 => Self::Db38,
            0x60 => Self::Db43,
            _ => Self::Db48,
        }
    }
}

impl Default for AntennaGain {
    fn default() -> Self {
        // chip reset value of RFCfgReg is 0x48
        AntennaGain::Db33
    }
}
