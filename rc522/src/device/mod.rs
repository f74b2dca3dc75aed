// rc522/src/device/mod.rs

pub mod builder;
pub mod command;
pub mod config;
pub mod crc;
pub mod engine;
pub mod handle;
pub mod registers;

pub use builder::DeviceBuilder;
pub use command::Command;
pub use config::DeviceConfig;
pub use engine::ExecOptions;
pub use handle::{Device, Initialized, Uninitialized};
pub use registers::{Register, RegisterBus};
