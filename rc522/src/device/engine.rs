// rc522/src/device/engine.rs

//! Command execution engine.
//!
//! Runs one FIFO command (transceive or MFAuthent) through the chip:
//! arm the IRQ sources, load the FIFO, issue the command, poll ComIrqReg
//! until completion or the chip timer fires, check ErrorReg and, for a
//! transceive, drain the answer from the FIFO.

use std::time::Duration;

use log::{debug, trace};

use crate::constants::*;
use crate::device::{Command, Register, RegisterBus};
use crate::protocol::Response;
use crate::utils::poll_until;
use crate::{Error, Result};

/// Per-exchange parameters of [`RegisterBus::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Valid bits in the last transmitted byte (0 = all eight).
    pub tx_last_bits: u8,
    /// ErrorReg bits that fail the exchange.
    pub error_mask: u8,
    pub timeout: Duration,
}

impl ExecOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            tx_last_bits: 0,
            error_mask: COMMAND_ERROR_MASK,
            timeout,
        }
    }

    pub fn with_last_bits(mut self, bits: u8) -> Self {
        self.tx_last_bits = bits & RX_LAST_BITS_MASK;
        self
    }

    pub fn with_error_mask(mut self, mask: u8) -> Self {
        self.error_mask = mask;
        self
    }
}

impl RegisterBus {
    /// Execute `command` with `payload` loaded into the FIFO.
    ///
    /// Only [`Command::Transceive`] and [`Command::MfAuthent`] are accepted;
    /// an authenticate returns an empty response.
    pub fn execute(
        &mut self,
        command: Command,
        payload: &[u8],
        opts: ExecOptions,
    ) -> Result<Response> {
        let (irq_enable, wait_irq) = match command {
            Command::Transceive => (TRANSCEIVE_IRQ_EN, TRANSCEIVE_WAIT_IRQ),
            Command::MfAuthent => (AUTHENT_IRQ_EN, AUTHENT_WAIT_IRQ),
            other => {
                return Err(Error::InvalidParameter(format!(
                    "{} does not exchange data with a card",
                    other
                )));
            }
        };
        trace!("execute {} with {} byte(s)", command, payload.len());

        self.write(Register::ComIEn, irq_enable | IRQ_INVERT)?;
        self.write(Register::Command, Command::Idle.code())?;
        self.write(Register::ComIrq, ALL_COM_IRQS)?;
        self.write(Register::FifoLevel, FLUSH_BUFFER)?;
        for &byte in payload {
            self.write(Register::FifoData, byte)?;
        }
        self.write(Register::BitFraming, opts.tx_last_bits & RX_LAST_BITS_MASK)?;
        self.write(Register::Command, command.code())?;
        if command == Command::Transceive {
            self.set_bits(Register::BitFraming, START_SEND)?;
        }

        let irq = poll_until(opts.timeout, || {
            let irq = self.read(Register::ComIrq)?;
            Ok((irq & (wait_irq | TIMER_IRQ) != 0).then_some(irq))
        });
        if command == Command::Transceive {
            self.clear_bits(Register::BitFraming, START_SEND)?;
        }
        let irq = match irq {
            Ok(irq) => irq,
            Err(Error::Timeout) => {
                debug!("{} did not complete within {:?}", command, opts.timeout);
                self.write(Register::Command, Command::Idle.code())?;
                return Err(Error::Timeout);
            }
            Err(e) => return Err(e),
        };
        if irq & wait_irq == 0 {
            trace!("{}: chip timer expired (ComIrq={:#04x})", command, irq);
            return Err(Error::Timeout);
        }

        let error_reg = self.read(Register::Error)?;
        if error_reg & opts.error_mask != 0 {
            debug!("{}: ErrorReg={:#04x}", command, error_reg);
            return Err(Error::ChipError { error_reg });
        }

        if command != Command::Transceive {
            return Ok(Response::empty());
        }

        let level = self.read(Register::FifoLevel)? & 0x7F;
        let last_bits = self.read(Register::Control)? & RX_LAST_BITS_MASK;
        let bit_len = Response::bit_length(level, last_bits);
        let count = usize::from(level).min(MAX_RESPONSE_LEN);
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            data.push(self.read(Register::FifoData)?);
        }
        trace!("{}: {} bit(s) received", command, bit_len);
        Ok(Response::new(data, bit_len))
    }

    /// Issue SoftReset and wait for the power-down flag to clear.
    pub fn soft_reset(&mut self, timeout: Duration) -> Result<()> {
        self.write(Register::Command, Command::SoftReset.code())?;
        poll_until(timeout, || {
            Ok((self.read(Register::Command)? & POWER_DOWN == 0).then_some(()))
        })
    }
}
