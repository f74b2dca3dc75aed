// rc522/src/protocol/mod.rs

pub mod access;
pub mod checksum;
pub mod commands;
pub mod frame;
pub mod layout;
pub mod value;

pub use access::{AccessConditions, SectorTrailer, access_bits, access_conditions};
pub use checksum::{bcc, crc_a};
pub use commands::{CascadeLevel, PiccCommand};
pub use frame::Response;
pub use layout::{block_address, sector_of, trailer_block};
pub use value::{ValueBlock, decode_value_block, encode_value_block};
