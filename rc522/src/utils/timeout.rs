//! Wall-clock bounded polling.
//!
//! Status registers are polled until a condition is met or a deadline
//! expires. The bound is elapsed time, not iteration count, so it holds
//! regardless of bus speed or host CPU.

use std::time::{Duration, Instant};

use crate::{Error, Result};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Call `poll` until it yields `Some`, an error, or `timeout` elapses.
///
/// `poll` always runs at least once. Expiry returns [`Error::Timeout`];
/// errors from `poll` are returned unchanged.
pub fn poll_until<T, F>(timeout: Duration, mut poll: F) -> Result<T>
where
    F: FnMut() -> Result<Option<T>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = poll()? {
            return Ok(value);
        }
        if Instant::now() >= deadline {
            return Err(Error::Timeout);
        }
        std::hint::spin_loop();
    }
}
