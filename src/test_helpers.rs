use core::cell::Cell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use embassy_time::{Duration, Instant};

use crate::traits::Clock;

/// Scripted modem on the other end of an `embedded-io` serial.
///
/// Every write ending a command line (`\r`, `\n` or Ctrl-Z) releases the next
/// scripted reply into the receive queue. A modem that has run out of replies
/// stays silent.
#[derive(Debug, Default)]
pub struct MockTransport {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    replies: VecDeque<Vec<u8>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply to the next command.
    pub fn reply(mut self, bytes: &[u8]) -> Self {
        self.replies.push_back(bytes.to_vec());
        self
    }

    /// Bytes already waiting before the next command is written.
    pub fn preload(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    /// Unread received bytes.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Everything written so far, verbatim.
    pub fn written(&self) -> &[u8] {
        &self.tx
    }

    /// Written command lines and payloads, terminators removed.
    pub fn sent(&self) -> Vec<String> {
        self.tx
            .split(|b| matches!(b, b'\r' | b'\n' | 0x1A))
            .filter(|line| !line.is_empty())
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }
}

impl embedded_io::ErrorType for MockTransport {
    type Error = Infallible;
}

impl embedded_io::Read for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl embedded_io::ReadReady for MockTransport {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl embedded_io::Write for MockTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.extend_from_slice(buf);
        if matches!(buf.last(), Some(b'\r' | b'\n' | 0x1A)) {
            if let Some(reply) = self.replies.pop_front() {
                self.rx.extend(reply);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Clock that moves one millisecond forward every time it is read.
#[derive(Debug, Default)]
pub struct MockClock {
    ticks: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, without advancing.
    pub fn peek(&self) -> Instant {
        Instant::from_millis(self.ticks.get())
    }

    pub fn advance(&self, by: Duration) {
        self.ticks.set(self.ticks.get() + by.as_millis());
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        let now = self.peek();
        self.advance(Duration::from_millis(1));
        now
    }
}

mod tests {
    use super::*;

    #[test]
    fn mock_clock_advances_per_reading() {
        let clock = MockClock::new();
        assert_eq!(clock.now(), Instant::from_millis(0));
        assert_eq!(clock.now(), Instant::from_millis(1));
        assert_eq!(clock.peek(), Instant::from_millis(2));

        clock.advance(Duration::from_millis(998));
        assert_eq!(clock.now(), Instant::from_millis(1000));
    }

    #[test]
    fn reply_released_by_line_end() {
        use embedded_io::{ReadReady, Write};

        let mut transport = MockTransport::new().reply(b"OK");
        transport.write_all(b"AT").unwrap();
        assert!(!transport.read_ready().unwrap());
        transport.write_all(b"\r\n").unwrap();
        assert_eq!(transport.pending(), 2);
        assert_eq!(transport.sent(), ["AT"]);
    }
}
