// rc522/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The register transport or reset line failed.
    #[error("hardware i/o error: {0}")]
    HardwareIo(#[from] std::io::Error),

    /// The chip or the card did not answer within the timing budget.
    #[error("operation timed out")]
    Timeout,

    /// ErrorReg reported a collision, parity, protocol or overflow fault.
    #[error("chip reported an error: ErrorReg={error_reg:#04x}")]
    ChipError { error_reg: u8 },

    #[error("unexpected response length: expected {expected} bits, got {actual} bits")]
    UnexpectedBitLength { expected: usize, actual: usize },

    #[error("malformed card response: {0}")]
    MalformedResponse(String),

    /// The card answered with something other than the 4-bit ACK (0xA).
    #[error("card did not acknowledge: answer={ack:#03x}")]
    Nak { ack: u8 },

    /// The BCC byte of an anticollision answer does not match the UID bytes.
    #[error("uid checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    Collision { expected: u8, actual: u8 },

    #[error("authentication rejected for block {block}")]
    AuthenticationFailed { block: u8 },

    #[error("block {block} is not covered by an authenticated session")]
    NotAuthenticated { block: u8 },

    /// The redundancy fields of a value block disagree.
    #[error("corrupt value block at address {block}")]
    CorruptValueBlock { block: u8 },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Coarse classification of [`Error`] used to decide how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ErrorKind {
    HardwareIo,
    Timeout,
    Protocol,
    Collision,
    Authentication,
    InvalidParameter,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::HardwareIo(_) => ErrorKind::HardwareIo,
            Error::Timeout => ErrorKind::Timeout,
            Error::ChipError { .. }
            | Error::UnexpectedBitLength { .. }
            | Error::MalformedResponse(_)
            | Error::Nak { .. }
            | Error::CorruptValueBlock { .. } => ErrorKind::Protocol,
            Error::Collision { .. } => ErrorKind::Collision,
            Error::AuthenticationFailed { .. } | Error::NotAuthenticated { .. } => {
                ErrorKind::Authentication
            }
            Error::InvalidLength { .. }
            | Error::InvalidParameter(_)
            | Error::InvalidState(_) => ErrorKind::InvalidParameter,
        }
    }

    /// Whether repeating the whole exchange from the top may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Timeout | ErrorKind::Protocol | ErrorKind::Collision
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
