// rc522/src/transport/spi.rs

//! Linux spidev transport. Feature-gated behind `--features spidev`.

use std::io;
use std::path::Path;

use log::debug;
use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};

use crate::constants::DEFAULT_BUS_SPEED_HZ;
use crate::transport::traits::Transport;
use crate::Result;

/// The MFRC522 talks SPI mode 0, MSB first, 8-bit words, at most 10 MHz.
pub const MAX_SPI_SPEED_HZ: u32 = 10_000_000;

pub struct SpidevTransport {
    spi: Spidev,
}

impl SpidevTransport {
    /// Open a spidev node (e.g. `/dev/spidev0.0`) at the default 1 MHz.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let spi = Spidev::open(path.as_ref())?;
        let mut transport = Self { spi };
        transport.configure(DEFAULT_BUS_SPEED_HZ)?;
        debug!("opened {}", path.as_ref().display());
        Ok(transport)
    }

    fn configure(&mut self, hz: u32) -> Result<()> {
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        self.spi.configure(&options)?;
        Ok(())
    }
}

impl Transport for SpidevTransport {
    fn transfer(&mut self, write: &[u8]) -> Result<Vec<u8>> {
        let mut read = vec![0u8; write.len()];
        {
            let mut xfer = SpidevTransfer::read_write(write, &mut read);
            self.spi.transfer(&mut xfer)?;
        }
        Ok(read)
    }

    fn set_clock_hz(&mut self, hz: u32) -> Result<()> {
        if hz == 0 || hz > MAX_SPI_SPEED_HZ {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("SPI clock {} Hz outside 1..={} Hz", hz, MAX_SPI_SPEED_HZ),
            )
            .into());
        }
        self.configure(hz)
    }
}
