// rc522/src/transport/hal.rs

//! Reset line over any embedded-hal output pin. Feature-gated behind
//! `--features hal`.

use std::fmt::Debug;
use std::io;

use embedded_hal::digital::v2::OutputPin;

use crate::transport::traits::ResetLine;
use crate::Result;

pub struct HalResetLine<P> {
    pin: P,
}

impl<P> HalResetLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> ResetLine for HalResetLine<P>
where
    P: OutputPin,
    P::Error: Debug,
{
    fn set_level(&mut self, high: bool) -> Result<()> {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|e| io::Error::other(format!("reset pin: {:?}", e)).into())
    }
}
