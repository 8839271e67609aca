//! Single command/response transaction over a [`Transport`].
//!
//! Every transaction writes one command, then busy-polls the transport until
//! the expected token shows up in the accumulated response, the response
//! buffer fills up, or the deadline passes. The token is tested after every
//! stored byte, since some tokens (the `>` SMS prompt) never see a line
//! terminator.

use embassy_time::{Duration, Instant};

use crate::buffer::{ResponseBuffer, RESPONSE_CAPACITY};
use crate::config::Config;
use crate::error::Error;
use crate::traits::{Clock, Transport};

/// When a transaction counts as matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchMode {
    /// As soon as the expected token is in the buffer.
    #[default]
    Token,
    /// Once the line holding the expected token is terminated, so the
    /// parameters following the token are part of the response.
    Line,
}

/// One command to write and the response that completes it.
#[derive(Debug, Clone, Copy)]
pub struct CommandRequest<'a> {
    /// Command text, without line terminator
    pub command: &'a [u8],
    pub expected: &'a str,
    pub mode: MatchMode,
    pub timeout: Duration,
}

impl<'a> CommandRequest<'a> {
    pub const fn new(command: &'a [u8], expected: &'a str, timeout: Duration) -> Self {
        Self {
            command,
            expected,
            mode: MatchMode::Token,
            timeout,
        }
    }

    #[must_use]
    pub const fn with_mode(self, mode: MatchMode) -> Self {
        Self { mode, ..self }
    }
}

enum Outcome {
    Matched,
    Timeout,
    Overflow,
}

pub struct Transactor<T, C, const N: usize = RESPONSE_CAPACITY> {
    transport: T,
    clock: C,
    config: Config,
    buffer: ResponseBuffer<N>,
}

impl<T, C, const N: usize> Transactor<T, C, N>
where
    T: Transport,
    C: Clock,
{
    pub fn new(transport: T, clock: C, config: Config) -> Self {
        Self {
            transport,
            clock,
            config,
            buffer: ResponseBuffer::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Write `request.command` plus the line terminator and wait for
    /// `request.expected`.
    ///
    /// On a match the trimmed response is returned; it borrows the response
    /// buffer, which the next transaction clears.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] if the deadline passes without a match,
    /// [`Error::BufferOverflow`] if the response outgrows the buffer first,
    /// [`Error::Transport`] if the stream itself fails.
    pub fn transact(&mut self, request: &CommandRequest<'_>) -> Result<&str, Error> {
        self.discard_stale_input()?;
        self.buffer.clear();

        let start = self.clock.now();
        if self.config.echo {
            info!("TX: {}", printable(request.command));
        }
        let terminator = self.config.line_terminator;
        self.write(request.command)?;
        self.write(terminator)?;

        self.finish(start, request)
    }

    /// Write a raw `payload` followed by the single `terminator` byte, then
    /// wait for `expected`. Pending input is kept and no line terminator is
    /// written.
    pub fn transact_payload(
        &mut self,
        payload: &[u8],
        terminator: u8,
        expected: &str,
        timeout: Duration,
    ) -> Result<&str, Error> {
        self.buffer.clear();

        let start = self.clock.now();
        if self.config.echo {
            info!("TX: <{} byte payload>", payload.len());
        }
        self.write(payload)?;
        self.write(&[terminator])?;

        self.finish(start, &CommandRequest::new(payload, expected, timeout))
    }

    fn finish(&mut self, start: Instant, request: &CommandRequest<'_>) -> Result<&str, Error> {
        match self.poll(start, request)? {
            Outcome::Matched => {
                self.buffer.trim();
                if self.config.echo {
                    info!("RX: {}", self.buffer.as_str());
                }
                Ok(self.buffer.as_str())
            }
            Outcome::Timeout => {
                debug!(
                    "Timed out after {} ms waiting for {}",
                    request.timeout.as_millis(),
                    request.expected
                );
                Err(Error::Timeout)
            }
            Outcome::Overflow => {
                debug!("Response outgrew {} bytes", N);
                Err(Error::BufferOverflow)
            }
        }
    }

    fn poll(&mut self, start: Instant, request: &CommandRequest<'_>) -> Result<Outcome, Error> {
        let mut token_end = None;

        loop {
            if self.expired(start, request.timeout) {
                return Ok(Outcome::Timeout);
            }

            while self
                .transport
                .bytes_available()
                .map_err(|_| Error::Transport)?
            {
                // A modem streaming filtered bytes must not hold the deadline off
                if self.expired(start, request.timeout) {
                    return Ok(Outcome::Timeout);
                }
                let Some(byte) = self.transport.read_byte().map_err(|_| Error::Transport)? else {
                    break;
                };
                if !self.buffer.push(byte) {
                    if self.buffer.overflowed() {
                        return Ok(Outcome::Overflow);
                    }
                    continue;
                }

                if token_end.is_none() && self.buffer.ends_with(request.expected) {
                    token_end = Some(self.buffer.len());
                }

                let matched = match (request.mode, token_end) {
                    (MatchMode::Token, Some(_)) => true,
                    (MatchMode::Line, Some(end)) => {
                        self.buffer.len() > end && matches!(byte, b'\r' | b'\n')
                    }
                    (_, None) => false,
                };
                if matched {
                    return Ok(Outcome::Matched);
                }

                if self.buffer.is_full() {
                    return Ok(Outcome::Overflow);
                }
            }
        }
    }

    fn expired(&self, start: Instant, timeout: Duration) -> bool {
        let elapsed = self
            .clock
            .now()
            .checked_duration_since(start)
            .unwrap_or_else(|| Duration::from_millis(0));
        elapsed >= timeout
    }

    fn discard_stale_input(&mut self) -> Result<(), Error> {
        let mut discarded = 0usize;
        while self
            .transport
            .bytes_available()
            .map_err(|_| Error::Transport)?
        {
            if self
                .transport
                .read_byte()
                .map_err(|_| Error::Transport)?
                .is_none()
            {
                break;
            }
            discarded += 1;
        }
        if discarded > 0 {
            trace!("Discarded {} stale bytes", discarded);
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.transport.write_bytes(bytes).map_err(|_| {
            error!("Transport write failed");
            Error::Transport
        })
    }
}

fn printable(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or("<non-utf8>")
}
