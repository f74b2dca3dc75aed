// rc522/src/device/builder.rs

use std::time::Duration;

use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::device::DeviceConfig;
use crate::transport::{ResetLine, Transport};
use crate::types::AntennaGain;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    reset: Option<Box<dyn ResetLine>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_reset_line(mut self, reset: Box<dyn ResetLine>) -> Self {
        self.reset = Some(reset);
        self
    }

    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bus_speed_hz(mut self, hz: u32) -> Self {
        self.config.bus_speed_hz = hz;
        self
    }

    pub fn antenna_gain(mut self, gain: AntennaGain) -> Self {
        self.config.antenna_gain = Some(gain);
        self
    }

    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    pub fn crc_timeout(mut self, timeout: Duration) -> Self {
        self.config.crc_timeout = timeout;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Both a transport and a reset line are required.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        if self.config.bus_speed_hz == 0 {
            return Err(Error::InvalidParameter("bus speed must be non-zero".into()));
        }
        match (self.transport, self.reset) {
            (Some(t), Some(r)) => Ok(Device::with_config(t, r, self.config)),
            (None, _) => Err(Error::InvalidState("no transport configured".into())),
            (_, None) => Err(Error::InvalidState("no reset line configured".into())),
        }
    }

    /// Build and initialize in one step.
    pub fn build(self) -> Result<Device<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
