use embassy_time::Instant;
use embedded_io::{ErrorType, Read, ReadReady, Write};

/// Duplex byte stream to the modem.
///
/// Implemented for every [`embedded_io`] serial that can report read
/// readiness, so a HAL UART can be handed to the driver directly.
pub trait Transport {
    type Error: core::fmt::Debug;

    /// Write all of `bytes`, in order.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// `true` when `read_byte` would return without blocking.
    fn bytes_available(&mut self) -> Result<bool, Self::Error>;

    /// Read a single byte, `None` if the stream had nothing after all.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

impl<T> Transport for T
where
    T: Read + ReadReady + Write,
{
    type Error = <T as ErrorType>::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        Write::write_all(self, bytes)?;
        Write::flush(self)
    }

    fn bytes_available(&mut self) -> Result<bool, Self::Error> {
        self.read_ready()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        match Read::read(self, &mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Monotonic time source used to enforce transaction deadlines.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the global `embassy-time` driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
