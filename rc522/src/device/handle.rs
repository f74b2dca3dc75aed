// rc522/src/device/handle.rs

use std::fmt;
use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::card::CardSession;
use crate::constants::*;
use crate::device::engine::ExecOptions;
use crate::device::{Command, DeviceConfig, Register, RegisterBus};
use crate::protocol::Response;
use crate::transport::{ResetLine, Transport};
use crate::types::AntennaGain;
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Handle to one MFRC522 and the card session running through it.
///
/// Register access is available in both states; card commands need an
/// initialized chip, which the type state enforces at compile time.
pub struct Device<State = Uninitialized> {
    bus: RegisterBus,
    reset: Box<dyn ResetLine>,
    config: DeviceConfig,
    antenna_gain: AntennaGain,
    antenna_on: bool,
    pub(crate) card: CardSession,
    _state: PhantomData<State>,
}

impl<State> fmt::Debug for Device<State> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("config", &self.config)
            .field("antenna_gain", &self.antenna_gain)
            .field("antenna_on", &self.antenna_on)
            .field("card", &self.card)
            .finish_non_exhaustive()
    }
}

impl Device<Uninitialized> {
    pub fn new(transport: Box<dyn Transport>, reset: Box<dyn ResetLine>) -> Self {
        Self::with_config(transport, reset, DeviceConfig::default())
    }

    pub fn with_config(
        transport: Box<dyn Transport>,
        reset: Box<dyn ResetLine>,
        config: DeviceConfig,
    ) -> Self {
        Self {
            bus: RegisterBus::new(transport),
            reset,
            antenna_gain: config.antenna_gain.unwrap_or_default(),
            config,
            antenna_on: false,
            card: CardSession::default(),
            _state: PhantomData,
        }
    }

    /// Release reset, soft-reset the chip and program the timer, modulation
    /// and CRC preset; finally switch the antenna on.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.reset.set_level(true)?;
        this.bus.transport_mut().set_clock_hz(this.config.bus_speed_hz)?;
        this.configure()?;

        Ok(Device {
            bus: this.bus,
            reset: this.reset,
            config: this.config,
            antenna_gain: this.antenna_gain,
            antenna_on: this.antenna_on,
            card: this.card,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    pub fn read_register(&mut self, reg: Register) -> Result<u8> {
        self.bus.read(reg)
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.bus.write(reg, value)
    }

    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        self.bus.set_bits(reg, mask)
    }

    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        self.bus.clear_bits(reg, mask)
    }

    /// Raw VersionReg value (0x91 / 0x92 for genuine parts).
    pub fn version(&mut self) -> Result<u8> {
        self.bus.read(Register::Version)
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Hand back the transport and reset line.
    pub fn release(self) -> (Box<dyn Transport>, Box<dyn ResetLine>) {
        (self.bus.into_transport(), self.reset)
    }

    fn configure(&mut self) -> Result<()> {
        self.bus.soft_reset(self.config.reset_timeout)?;
        self.card.reset();

        self.bus.write(Register::TMode, TIMER_MODE)?;
        self.bus.write(Register::TPrescaler, TIMER_PRESCALER)?;
        self.bus.write(Register::TReloadLo, TIMER_RELOAD_LO)?;
        self.bus.write(Register::TReloadHi, TIMER_RELOAD_HI)?;
        self.bus.write(Register::TxAsk, FORCE_100_ASK)?;
        self.bus.write(Register::Mode, MODE_CRC_PRESET_6363)?;

        if let Some(gain) = self.config.antenna_gain {
            self.write_gain(gain)?;
        }
        self.antenna_gain = AntennaGain::from_register(self.bus.read(Register::RfCfg)?);
        self.bus.set_bits(Register::TxControl, ANTENNA_TX_MASK)?;
        self.antenna_on = true;

        let version = self.bus.read(Register::Version)?;
        match version {
            VERSION_1_0 | VERSION_2_0 => info!("MFRC522 ready (version {:#04x})", version),
            other => warn!("unexpected VersionReg value {:#04x}; continuing", other),
        }
        Ok(())
    }

    fn write_gain(&mut self, gain: AntennaGain) -> Result<()> {
        self.bus.clear_bits(Register::RfCfg, RX_GAIN_MASK)?;
        self.bus.set_bits(Register::RfCfg, gain.register_bits())?;
        self.antenna_gain = gain;
        Ok(())
    }
}

impl Device<Initialized> {
    /// Pulse NRSTPD low, then run the full initialization sequence again.
    /// Any card session is dropped.
    pub fn hard_reset(&mut self) -> Result<()> {
        debug!("hard reset");
        self.reset.set_level(false)?;
        std::thread::sleep(self.config.reset_pulse);
        self.reset.set_level(true)?;
        self.configure()
    }

    /// Soft reset and re-initialize without touching the reset line.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.configure()
    }

    pub fn set_antenna_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            self.bus.set_bits(Register::TxControl, ANTENNA_TX_MASK)?;
        } else {
            self.bus.clear_bits(Register::TxControl, ANTENNA_TX_MASK)?;
            // field gone: the card lost its state, the UID stays readable
            self.card.reset();
        }
        self.antenna_on = enabled;
        Ok(())
    }

    pub fn is_antenna_enabled(&self) -> bool {
        self.antenna_on
    }

    pub fn set_antenna_gain(&mut self, gain: AntennaGain) -> Result<()> {
        self.write_gain(gain)?;
        self.config.antenna_gain = Some(gain);
        Ok(())
    }

    pub fn antenna_gain(&self) -> AntennaGain {
        self.antenna_gain
    }

    /// Snapshot of every register whose read has no side effect.
    pub fn dump_registers(&mut self) -> Result<Vec<(Register, u8)>> {
        Register::ALL
            .iter()
            .filter(|r| !r.is_side_effecting_read())
            .map(|&r| Ok((r, self.bus.read(r)?)))
            .collect()
    }

    /// Run `command` with the default error mask and command timeout.
    pub fn execute(&mut self, command: Command, payload: &[u8]) -> Result<Response> {
        let opts = ExecOptions::new(self.config.command_timeout);
        self.bus.execute(command, payload, opts)
    }

    pub fn execute_with(
        &mut self,
        command: Command,
        payload: &[u8],
        opts: ExecOptions,
    ) -> Result<Response> {
        self.bus.execute(command, payload, opts)
    }

    pub fn transceive(&mut self, frame: &[u8]) -> Result<Response> {
        self.execute(Command::Transceive, frame)
    }

    /// Transceive a frame whose last byte carries only `last_bits` bits.
    pub fn transceive_bits(&mut self, frame: &[u8], last_bits: u8) -> Result<Response> {
        let opts = ExecOptions::new(self.config.command_timeout).with_last_bits(last_bits);
        self.bus.execute(Command::Transceive, frame, opts)
    }

    pub fn calculate_crc(&mut self, frame: &[u8]) -> Result<[u8; CRC_SIZE]> {
        self.bus.calculate_crc(frame, self.config.crc_timeout)
    }

    pub fn append_crc(&mut self, frame: &mut [u8]) -> Result<()> {
        self.bus.append_crc(frame, self.config.crc_timeout)
    }
}
