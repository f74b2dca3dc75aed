// rc522/src/device/config.rs

use std::time::Duration;

use crate::constants::{COMMAND_TIMEOUT_MS, CRC_TIMEOUT_MS, DEFAULT_BUS_SPEED_HZ, RESET_TIMEOUT_MS};
use crate::types::AntennaGain;
use crate::utils::ms;

/// Settings applied when a [`crate::device::Device`] is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    pub bus_speed_hz: u32,
    /// Receiver gain programmed at init; `None` keeps the chip default.
    pub antenna_gain: Option<AntennaGain>,
    /// Wall-clock budget for transceive and authenticate.
    pub command_timeout: Duration,
    pub crc_timeout: Duration,
    /// Budget for the power-down flag to clear after a soft reset.
    pub reset_timeout: Duration,
    /// Time NRSTPD is held low during a hard reset.
    pub reset_pulse: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            bus_speed_hz: DEFAULT_BUS_SPEED_HZ,
            antenna_gain: None,
            command_timeout: ms(COMMAND_TIMEOUT_MS),
            crc_timeout: ms(CRC_TIMEOUT_MS),
            reset_timeout: ms(RESET_TIMEOUT_MS),
            reset_pulse: ms(1),
        }
    }
}
