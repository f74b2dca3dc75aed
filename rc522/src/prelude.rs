// rc522/src/prelude.rs

pub use crate::card::{AuthSession, Card, CardSession, SelectionState};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig, Register};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{AccessConditions, SectorTrailer, ValueBlock};
pub use crate::transport::{ResetLine, TiedHigh, Transport};
pub use crate::{
    AntennaGain, Atqa, BlockData, CardType, Error, ErrorKind, Key, KeyType, Result, Sak, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{ms, parse_hex, to_hex_spaced, to_hex_upper};
