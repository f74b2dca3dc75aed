// rc522/src/device/command.rs

/// Commands accepted by CommandReg (datasheet table 149).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Command {
    Idle = 0x00,
    Mem = 0x01,
    GenerateRandomId = 0x02,
    CalcCrc = 0x03,
    Transmit = 0x04,
    NoCmdChange = 0x07,
    Receive = 0x08,
    Transceive = 0x0C,
    MfAuthent = 0x0E,
    SoftReset = 0x0F,
}

impl Command {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the command moves FIFO contents over the air and waits for
    /// completion through ComIrqReg.
    pub fn uses_card(self) -> bool {
        matches!(self, Command::Transceive | Command::MfAuthent)
    }
}
