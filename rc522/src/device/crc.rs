// rc522/src/device/crc.rs

//! CRC_A through the chip's coprocessor.
//!
//! Callers pass the whole outgoing frame including the two trailing CRC
//! slots; everything but those two bytes is fed to the coprocessor.

use std::time::Duration;

use log::debug;

use crate::constants::{CRC_IRQ, CRC_SIZE, FLUSH_BUFFER};
use crate::device::{Command, Register, RegisterBus};
use crate::utils::poll_until;
use crate::{Error, Result};

impl RegisterBus {
    /// CRC_A of `frame[..len - 2]`, low byte first.
    pub fn calculate_crc(&mut self, frame: &[u8], timeout: Duration) -> Result<[u8; CRC_SIZE]> {
        let Some(data_len) = frame.len().checked_sub(CRC_SIZE) else {
            return Err(Error::InvalidLength {
                expected: CRC_SIZE,
                actual: frame.len(),
            });
        };

        self.write(Register::Command, Command::Idle.code())?;
        self.write(Register::DivIrq, CRC_IRQ)?;
        self.write(Register::FifoLevel, FLUSH_BUFFER)?;
        for &byte in &frame[..data_len] {
            self.write(Register::FifoData, byte)?;
        }
        self.write(Register::Command, Command::CalcCrc.code())?;

        let done = poll_until(timeout, || {
            Ok((self.read(Register::DivIrq)? & CRC_IRQ != 0).then_some(()))
        });
        self.write(Register::Command, Command::Idle.code())?;
        if let Err(e) = done {
            debug!("crc coprocessor did not finish within {:?}", timeout);
            return Err(e);
        }

        let low = self.read(Register::CrcResultLsb)?;
        let high = self.read(Register::CrcResultMsb)?;
        Ok([low, high])
    }

    /// Fill the two trailing bytes of `frame` with its CRC_A.
    pub fn append_crc(&mut self, frame: &mut [u8], timeout: Duration) -> Result<()> {
        let crc = self.calculate_crc(frame, timeout)?;
        let split = frame.len() - CRC_SIZE;
        frame[split..].copy_from_slice(&crc);
        Ok(())
    }
}
