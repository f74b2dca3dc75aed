// rc522/src/transport/mock.rs

//! Register-level MFRC522 simulator for tests.
//!
//! The mock decodes the SPI address byte of every exchange and keeps a
//! register file, the FIFO, the IRQ set/clear semantics, the CRC coprocessor
//! and the Crypto1 status bit. Card answers are scripted with
//! [`CardReply`] values consumed in order each time the host starts a
//! transceive or authenticate command. Handles are cheap clones sharing one
//! chip state, so a test can keep a handle after the device takes ownership.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::constants::*;
use crate::device::{Command, Register};
use crate::protocol::checksum::crc_a;
use crate::transport::traits::{ResetLine, Transport};
use crate::{Error, Result};

const REG_COMMAND: u8 = Register::Command as u8;
const REG_COM_IRQ: u8 = Register::ComIrq as u8;
const REG_DIV_IRQ: u8 = Register::DivIrq as u8;
const REG_ERROR: u8 = Register::Error as u8;
const REG_STATUS2: u8 = Register::Status2 as u8;
const REG_FIFO_DATA: u8 = Register::FifoData as u8;
const REG_FIFO_LEVEL: u8 = Register::FifoLevel as u8;
const REG_CONTROL: u8 = Register::Control as u8;
const REG_BIT_FRAMING: u8 = Register::BitFraming as u8;
const REG_CRC_MSB: u8 = Register::CrcResultMsb as u8;
const REG_CRC_LSB: u8 = Register::CrcResultLsb as u8;
const REG_VERSION: u8 = Register::Version as u8;

/// What the simulated card (or chip) does in answer to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// The card answers with `data`; `last_bits` valid bits in the final byte
    /// (0 = all eight).
    Frame { data: Vec<u8>, last_bits: u8 },
    /// Nothing is received; the chip's timer expires.
    Silent,
    /// Reception completes but ErrorReg holds the given value.
    ChipError(u8),
    /// MFAuthent completes; the Crypto1 bit is set only when `accepted`.
    Auth { accepted: bool },
}

impl CardReply {
    pub fn bytes(data: &[u8]) -> Self {
        Self::Frame {
            data: data.to_vec(),
            last_bits: 0,
        }
    }

    pub fn bits(data: &[u8], last_bits: u8) -> Self {
        Self::Frame {
            data: data.to_vec(),
            last_bits,
        }
    }

    /// `data` followed by its CRC_A.
    pub fn with_crc(data: &[u8]) -> Self {
        let mut v = data.to_vec();
        v.extend_from_slice(&crc_a(data));
        Self::bytes(&v)
    }

    pub fn ack() -> Self {
        Self::nak(MIFARE_ACK)
    }

    /// A 4-bit answer carrying `code` in its low nibble.
    pub fn nak(code: u8) -> Self {
        Self::bits(&[code & 0x0F], 4)
    }
}

#[derive(Debug)]
struct ChipState {
    registers: [u8; 64],
    fifo: Vec<u8>,
    rx: VecDeque<u8>,
    replies: VecDeque<CardReply>,
    frames: Vec<Vec<u8>>,
    crc_inputs: Vec<Vec<u8>>,
    reads: Vec<u8>,
    writes: Vec<(u8, u8)>,
    reset_levels: Vec<bool>,
    clock_hz: Option<u32>,
    io_failures: usize,
    crc_stalled: bool,
    commands_stalled: bool,
}

impl Default for ChipState {
    fn default() -> Self {
        let mut state = Self {
            registers: [0u8; 64],
            fifo: Vec::new(),
            rx: VecDeque::new(),
            replies: VecDeque::new(),
            frames: Vec::new(),
            crc_inputs: Vec::new(),
            reads: Vec::new(),
            writes: Vec::new(),
            reset_levels: Vec::new(),
            clock_hz: None,
            io_failures: 0,
            crc_stalled: false,
            commands_stalled: false,
        };
        state.load_reset_values();
        state.registers[REG_VERSION as usize] = VERSION_2_0;
        state
    }
}

impl ChipState {
    fn load_reset_values(&mut self) {
        let version = self.registers[REG_VERSION as usize];
        self.registers = [0u8; 64];
        self.registers[REG_VERSION as usize] = version;
        self.registers[REG_COMMAND as usize] = 0x20;
        self.registers[Register::ComIEn as usize] = 0x80;
        self.registers[Register::Mode as usize] = 0x3F;
        self.registers[Register::TxControl as usize] = 0x80;
        self.registers[Register::RfCfg as usize] = 0x48;
        self.fifo.clear();
        self.rx.clear();
    }

    fn read(&mut self, reg: u8) -> u8 {
        self.reads.push(reg);
        match reg {
            REG_FIFO_DATA => self.rx.pop_front().unwrap_or(0),
            REG_FIFO_LEVEL => {
                let level = if self.rx.is_empty() {
                    self.fifo.len()
                } else {
                    self.rx.len()
                };
                level.min(0x7F) as u8
            }
            _ => self.registers[reg as usize],
        }
    }

    fn write(&mut self, reg: u8, value: u8) {
        self.writes.push((reg, value));
        match reg {
            REG_COMMAND => self.issue(value),
            REG_COM_IRQ | REG_DIV_IRQ => {
                let bits = value & ALL_COM_IRQS;
                let current = &mut self.registers[reg as usize];
                if value & IRQ_SET != 0 {
                    *current |= bits;
                } else {
                    *current &= !bits;
                }
            }
            REG_FIFO_LEVEL => {
                if value & FLUSH_BUFFER != 0 {
                    self.fifo.clear();
                    self.rx.clear();
                }
            }
            REG_FIFO_DATA => self.fifo.push(value),
            REG_BIT_FRAMING => {
                self.registers[reg as usize] = value;
                let current = self.registers[REG_COMMAND as usize] & 0x0F;
                if value & START_SEND != 0 && current == Command::Transceive as u8 {
                    self.exchange_with_card(false);
                }
            }
            _ => self.registers[reg as usize] = value,
        }
    }

    fn issue(&mut self, value: u8) {
        let command = value & 0x0F;
        self.registers[REG_COMMAND as usize] = (self.registers[REG_COMMAND as usize] & 0xF0) | command;
        if command == Command::SoftReset as u8 {
            self.load_reset_values();
            if self.commands_stalled {
                self.registers[REG_COMMAND as usize] |= POWER_DOWN;
            }
        } else if command == Command::CalcCrc as u8 {
            let data = std::mem::take(&mut self.fifo);
            let crc = crc_a(&data);
            self.crc_inputs.push(data);
            self.registers[REG_CRC_LSB as usize] = crc[0];
            self.registers[REG_CRC_MSB as usize] = crc[1];
            if !self.crc_stalled {
                self.registers[REG_DIV_IRQ as usize] |= CRC_IRQ;
            }
        } else if command == Command::MfAuthent as u8 {
            self.exchange_with_card(true);
        }
    }

    fn exchange_with_card(&mut self, authenticate: bool) {
        let frame = std::mem::take(&mut self.fifo);
        self.frames.push(frame);
        if self.commands_stalled {
            return;
        }
        let reply = self.replies.pop_front().unwrap_or(CardReply::Silent);
        let irq = match reply {
            CardReply::Frame { data, last_bits } => {
                self.registers[REG_ERROR as usize] = 0;
                self.registers[REG_CONTROL as usize] = last_bits & RX_LAST_BITS_MASK;
                if authenticate {
                    IDLE_IRQ
                } else {
                    self.rx = data.into();
                    RX_IRQ | IDLE_IRQ
                }
            }
            CardReply::Silent => TIMER_IRQ,
            CardReply::ChipError(error_reg) => {
                self.registers[REG_ERROR as usize] = error_reg;
                RX_IRQ | IDLE_IRQ | ERR_IRQ
            }
            CardReply::Auth { accepted } => {
                self.registers[REG_ERROR as usize] = 0;
                if accepted {
                    self.registers[REG_STATUS2 as usize] |= MF_CRYPTO1_ON;
                } else {
                    self.registers[REG_STATUS2 as usize] &= !MF_CRYPTO1_ON;
                }
                IDLE_IRQ
            }
        };
        self.registers[REG_COM_IRQ as usize] |= irq;
    }
}

/// Shared handle to a simulated chip.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<ChipState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reset line wired to this chip.
    pub fn reset_line(&self) -> MockResetLine {
        MockResetLine {
            state: Rc::clone(&self.state),
        }
    }

    /// Queue the next card answer.
    pub fn push_reply(&self, reply: CardReply) {
        self.state.borrow_mut().replies.push_back(reply);
    }

    pub fn pending_replies(&self) -> usize {
        self.state.borrow().replies.len()
    }

    pub fn set_register(&self, reg: Register, value: u8) {
        self.state.borrow_mut().registers[reg as usize] = value;
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.state.borrow().registers[reg as usize]
    }

    /// Frames handed to the card by transceive/authenticate, in order.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().frames.clone()
    }

    /// Buffers fed to the CRC coprocessor, in order.
    pub fn crc_inputs(&self) -> Vec<Vec<u8>> {
        self.state.borrow().crc_inputs.clone()
    }

    pub fn reads_of(&self, reg: Register) -> usize {
        let reg = reg as u8;
        self.state.borrow().reads.iter().filter(|&&r| r == reg).count()
    }

    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        let reg = reg as u8;
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }

    /// Forget recorded traffic, keeping registers and queued replies.
    pub fn clear_log(&self) {
        let mut st = self.state.borrow_mut();
        st.reads.clear();
        st.writes.clear();
        st.frames.clear();
        st.crc_inputs.clear();
    }

    /// Fail the next `n` bus exchanges with a hardware I/O error.
    pub fn fail_next_transfers(&self, n: usize) {
        self.state.borrow_mut().io_failures = n;
    }

    /// Never raise the CRC IRQ.
    pub fn stall_crc(&self, stalled: bool) {
        self.state.borrow_mut().crc_stalled = stalled;
    }

    /// Never complete a command: no completion IRQ, no timer IRQ, and a
    /// soft reset leaves the power-down bit set.
    pub fn stall_commands(&self, stalled: bool) {
        self.state.borrow_mut().commands_stalled = stalled;
    }

    pub fn reset_levels(&self) -> Vec<bool> {
        self.state.borrow().reset_levels.clone()
    }

    pub fn clock_hz(&self) -> Option<u32> {
        self.state.borrow().clock_hz
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, write: &[u8]) -> Result<Vec<u8>> {
        let mut st = self.state.borrow_mut();
        if st.io_failures > 0 {
            st.io_failures -= 1;
            return Err(Error::HardwareIo(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "simulated bus failure",
            )));
        }
        let mut out = vec![0u8; write.len()];
        let Some(&address) = write.first() else {
            return Ok(out);
        };
        let reg = (address >> 1) & 0x3F;
        if address & 0x80 != 0 {
            for slot in out.iter_mut().skip(1) {
                *slot = st.read(reg);
            }
        } else {
            for &value in &write[1..] {
                st.write(reg, value);
            }
        }
        Ok(out)
    }

    fn set_clock_hz(&mut self, hz: u32) -> Result<()> {
        self.state.borrow_mut().clock_hz = Some(hz);
        Ok(())
    }
}

/// Reset line handle of a [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockResetLine {
    state: Rc<RefCell<ChipState>>,
}

impl ResetLine for MockResetLine {
    fn set_level(&mut self, high: bool) -> Result<()> {
        let mut st = self.state.borrow_mut();
        if st.io_failures > 0 {
            st.io_failures -= 1;
            return Err(Error::HardwareIo(io::Error::other("simulated gpio failure")));
        }
        st.reset_levels.push(high);
        if !high {
            st.load_reset_values();
        }
        Ok(())
    }
}
