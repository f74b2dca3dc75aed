// rc522/src/transport/traits.rs

use crate::Result;

/// Byte-oriented bus to the chip's register interface.
///
/// Implementations perform a full-duplex exchange: every written byte clocks
/// one byte back, so the returned buffer has the same length as `write`.
/// Failures surface as [`crate::Error::HardwareIo`].
pub trait Transport {
    fn transfer(&mut self, write: &[u8]) -> Result<Vec<u8>>;

    /// Apply the bus clock rate. Transports with a fixed clock may ignore it.
    fn set_clock_hz(&mut self, _hz: u32) -> Result<()> {
        Ok(())
    }
}

/// Digital output wired to the chip's NRSTPD pin. Driving it low powers the
/// chip down; high releases it from reset.
pub trait ResetLine {
    fn set_level(&mut self, high: bool) -> Result<()>;
}

/// For boards with NRSTPD tied high; a hard reset then only re-runs the
/// soft reset sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiedHigh;

impl ResetLine for TiedHigh {
    fn set_level(&mut self, _high: bool) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transfer(&mut self, write: &[u8]) -> Result<Vec<u8>> {
        (**self).transfer(write)
    }

    fn set_clock_hz(&mut self, hz: u32) -> Result<()> {
        (**self).set_clock_hz(hz)
    }
}

impl<R: ResetLine + ?Sized> ResetLine for Box<R> {
    fn set_level(&mut self, high: bool) -> Result<()> {
        (**self).set_level(high)
    }
}
