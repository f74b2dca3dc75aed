// rc522/src/transport/mod.rs

#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
#[cfg(feature = "spidev")]
pub mod spi;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::HalResetLine;
pub use mock::{CardReply, MockResetLine, MockTransport};
#[cfg(feature = "spidev")]
pub use spi::SpidevTransport;
pub use traits::{ResetLine, TiedHigh, Transport};
