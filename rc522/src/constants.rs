// rc522/src/constants.rs
//! Register bit masks, protocol sizes and timing budgets.

/// ComIEnReg: invert the IRQ pin level.
pub const IRQ_INVERT: u8 = 0x80;

/// ComIrqReg bits
pub const TIMER_IRQ: u8 = 0x01;
pub const ERR_IRQ: u8 = 0x02;
pub const LO_ALERT_IRQ: u8 = 0x04;
pub const HI_ALERT_IRQ: u8 = 0x08;
pub const IDLE_IRQ: u8 = 0x10;
pub const RX_IRQ: u8 = 0x20;
pub const TX_IRQ: u8 = 0x40;
/// Bit 7 of ComIrqReg/DivIrqReg: 1 sets the written bits, 0 clears them.
pub const IRQ_SET: u8 = 0x80;
pub const ALL_COM_IRQS: u8 = 0x7F;

/// DivIrqReg: CRC coprocessor finished.
pub const CRC_IRQ: u8 = 0x04;

/// FIFOLevelReg: flush the FIFO.
pub const FLUSH_BUFFER: u8 = 0x80;
/// BitFramingReg: start transmission of a transceive command.
pub const START_SEND: u8 = 0x80;
/// ControlReg: number of valid bits in the last received byte.
pub const RX_LAST_BITS_MASK: u8 = 0x07;
/// CommandReg: soft power-down flag, cleared once the chip is ready.
pub const POWER_DOWN: u8 = 0x10;
/// CollReg: clear received bits after a collision.
pub const VALUES_AFTER_COLL: u8 = 0x80;

/// ErrorReg bits
pub const PROTOCOL_ERR: u8 = 0x01;
pub const PARITY_ERR: u8 = 0x02;
pub const CRC_ERR: u8 = 0x04;
pub const COLL_ERR: u8 = 0x08;
pub const BUFFER_OVFL: u8 = 0x10;
/// Errors that abort a command: buffer overflow, collision, parity, protocol.
pub const COMMAND_ERROR_MASK: u8 = BUFFER_OVFL | COLL_ERR | PARITY_ERR | PROTOCOL_ERR;

/// Status2Reg: MIFARE Crypto1 unit is switched on.
pub const MF_CRYPTO1_ON: u8 = 0x08;
/// TxControlReg: drive both antenna pins.
pub const ANTENNA_TX_MASK: u8 = 0x03;
/// RFCfgReg: receiver gain field.
pub const RX_GAIN_MASK: u8 = 0x70;
/// RxModeReg: check and strip CRC_A from received frames.
pub const RX_CRC_EN: u8 = 0x80;

/// Interrupt enable masks used by the command engine.
pub const TRANSCEIVE_IRQ_EN: u8 = 0x77;
pub const AUTHENT_IRQ_EN: u8 = 0x12;
/// Completion bits waited on per command.
pub const TRANSCEIVE_WAIT_IRQ: u8 = RX_IRQ | IDLE_IRQ;
pub const AUTHENT_WAIT_IRQ: u8 = IDLE_IRQ;

/// Response bytes drained from the FIFO after a transceive.
pub const MAX_RESPONSE_LEN: usize = 16;

pub const BLOCK_SIZE: usize = 16;
pub const KEY_SIZE: usize = 6;
pub const CRC_SIZE: usize = 2;
pub const ACCESS_BITS_SIZE: usize = 3;

/// 4-bit MIFARE acknowledge.
pub const MIFARE_ACK: u8 = 0x0A;
pub const ACK_BITS: usize = 4;
pub const ATQA_BITS: usize = 16;
/// 4 UID bytes + BCC.
pub const ANTICOLLISION_BITS: usize = 40;
/// SAK + CRC_A.
pub const SAK_BITS: usize = 24;
pub const BLOCK_BITS: usize = BLOCK_SIZE * 8;

/// Timer register programming applied at initialization.
pub const TIMER_MODE: u8 = 0x8D;
pub const TIMER_PRESCALER: u8 = 0x3E;
pub const TIMER_RELOAD_HI: u8 = 0x00;
pub const TIMER_RELOAD_LO: u8 = 30;
/// TxASKReg: force 100% ASK modulation.
pub const FORCE_100_ASK: u8 = 0x40;
/// ModeReg: CRC preset 0x6363 (ISO/IEC 14443-3 6.2.4).
pub const MODE_CRC_PRESET_6363: u8 = 0x3D;

/// Wall-clock budgets in milliseconds.
pub const COMMAND_TIMEOUT_MS: u64 = 36;
pub const CRC_TIMEOUT_MS: u64 = 89;
pub const RESET_TIMEOUT_MS: u64 = 50;

pub const DEFAULT_BUS_SPEED_HZ: u32 = 1_000_000;

/// Chip revision reported by VersionReg for genuine MFRC522 v1.0 / v2.0.
pub const VERSION_1_0: u8 = 0x91;
pub const VERSION_2_0: u8 = 0x92;
