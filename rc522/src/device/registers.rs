// rc522/src/device/registers.rs

//! Register map and the register access layer.
//!
//! Every access is a two-byte full-duplex exchange on the transport. The
//! address byte carries the register number in bits 6..1; bit 7 selects a
//! read. The second byte is the payload on writes and a dummy on reads, in
//! which case the chip's answer comes back in the second received byte.

use log::trace;

use crate::transport::Transport;
use crate::{Error, Result};

/// MFRC522 registers (datasheet section 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    // Command and status
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,

    // Command configuration
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAsk = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    MfTx = 0x1C,
    MfRx = 0x1D,
    SerialSpeed = 0x1F,

    // Configuration
    CrcResultMsb = 0x21,
    CrcResultLsb = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHi = 0x2C,
    TReloadLo = 0x2D,
    TCounterValHi = 0x2E,
    TCounterValLo = 0x2F,

    // Test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    /// Every named register, in address order.
    pub const ALL: [Register; 50] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultMsb,
        Register::CrcResultLsb,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadHi,
        Register::TReloadLo,
        Register::TCounterValHi,
        Register::TCounterValLo,
        Register::TestSel1,
        Register::TestSel2,
        Register::TestPinEn,
        Register::TestPinValue,
        Register::TestBus,
        Register::AutoTest,
        Register::Version,
        Register::AnalogTest,
        Register::TestDac1,
        Register::TestDac2,
        Register::TestAdc,
    ];

    pub fn addr(self) -> u8 {
        self as u8
    }

    /// First SPI byte of a write exchange.
    pub fn write_address(self) -> u8 {
        (self.addr() << 1) & 0x7E
    }

    /// First SPI byte of a read exchange.
    pub fn read_address(self) -> u8 {
        self.write_address() | 0x80
    }

    /// Reading FIFODataReg pops the FIFO; dumps must skip it.
    pub fn is_side_effecting_read(self) -> bool {
        matches!(self, Register::FifoData)
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(addr: u8) -> Result<Self> {
        Register::ALL
            .iter()
            .copied()
            .find(|r| r.addr() == addr)
            .ok_or_else(|| Error::InvalidParameter(format!("no register at {:#04x}", addr)))
    }
}

/// Register access layer over a byte transport.
pub struct RegisterBus {
    transport: Box<dyn Transport>,
}

impl RegisterBus {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn read(&mut self, reg: Register) -> Result<u8> {
        let rx = self.transport.transfer(&[reg.read_address(), 0x00])?;
        let value = rx.get(1).copied().ok_or(Error::InvalidLength {
            expected: 2,
            actual: rx.len(),
        })?;
        trace!("read  {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    pub fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {:?} <- {:#04x}", reg, value);
        self.transport.transfer(&[reg.write_address(), value])?;
        Ok(())
    }

    /// Read-modify-write OR of `mask`.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read(reg)?;
        self.write(reg, current | mask)
    }

    /// Read-modify-write AND-NOT of `mask`.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read(reg)?;
        self.write(reg, current & !mask)
    }

    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
