use atat::AtatCmd;
use embassy_time::Duration;

use crate::{
    buffer::RESPONSE_CAPACITY,
    command::{
        call_control::{types::*, *},
        control::{types::*, *},
        mobile_control::{types::*, *},
        network_service::GetSignalQuality,
        sms::{types::*, *},
        AT,
    },
    config::Config,
    error::Error,
    parser::{parse_information, InformationResponse},
    traits::{Clock, Transport},
    transactor::{CommandRequest, MatchMode, Transactor},
};

/// Largest serialised command, `AT+HTTPPARA` with a full URL being the
/// longest one sent.
pub const COMMAND_CAPACITY: usize = 320;

/// Handle to one modem.
///
/// Owns the [`Transactor`] and with it the transport, so every procedure
/// takes `&mut self` and transactions never overlap. The procedures
/// themselves live in the [`Gsm`](crate::gsm::Gsm),
/// [`Gprs`](crate::gprs::Gprs), [`Http`](crate::http::Http) and
/// [`Sms`](crate::sms::Sms) traits.
pub struct Client<T, C, const N: usize = RESPONSE_CAPACITY> {
    pub(crate) at: Transactor<T, C, N>,
}

impl<T, C> Client<T, C>
where
    T: Transport,
    C: Clock,
{
    /// Client with the default [`RESPONSE_CAPACITY`] response buffer.
    ///
    /// A `+CMGL` listing carries its entry header and the final `OK` on top
    /// of the message text, so the longest SMS bodies
    /// ([`MAX_BODY_LEN`](crate::sms::MAX_BODY_LEN)) do not fit this buffer
    /// and [`Sms::read_sms`](crate::sms::Sms::read_sms) reports them as
    /// `None` without purging the store. Use
    /// [`Client::with_response_capacity`] with a larger `N`, 512 bytes
    /// being enough, when long messages must be received.
    pub fn new(transport: T, clock: C, config: Config) -> Self {
        Self::with_response_capacity(transport, clock, config)
    }
}

impl<T, C, const N: usize> Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    /// Like [`Client::new`], with room for `N` response bytes per
    /// transaction instead of [`RESPONSE_CAPACITY`].
    pub fn with_response_capacity(transport: T, clock: C, config: Config) -> Self {
        Client {
            at: Transactor::new(transport, clock, config),
        }
    }

    pub fn transport(&self) -> &T {
        self.at.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.at.transport_mut()
    }

    /// Send `cmd` and wait for a final `OK` within the command's deadline.
    pub fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<(), Error> {
        self.send_expecting(cmd, "OK", MatchMode::Token)?;
        Ok(())
    }

    /// Send `cmd` and parse its information response.
    pub fn query<Cmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, Error>
    where
        Cmd: AtatCmd,
        Cmd::Response: InformationResponse,
    {
        let response = self.send_expecting(cmd, "OK", MatchMode::Token)?;
        Ok(parse_information(cmd, response)?)
    }

    pub(crate) fn send_expecting<Cmd: AtatCmd>(
        &mut self,
        cmd: &Cmd,
        expected: &str,
        mode: MatchMode,
    ) -> Result<&str, Error> {
        let timeout = Duration::from_millis(u64::from(Cmd::MAX_TIMEOUT_MS));
        self.send_within(cmd, expected, mode, timeout)
    }

    /// Send `cmd` with a deadline other than the command's own.
    pub(crate) fn send_within<Cmd: AtatCmd>(
        &mut self,
        cmd: &Cmd,
        expected: &str,
        mode: MatchMode,
        timeout: Duration,
    ) -> Result<&str, Error> {
        let mut buf = [0u8; COMMAND_CAPACITY];
        if Cmd::MAX_LEN > buf.len() {
            return Err(Error::CommandTooLong);
        }
        let len = cmd.write(&mut buf);
        // The transactor appends the configured terminator
        let command = buf[..len].trim_ascii_end();

        let request = CommandRequest::new(command, expected, timeout).with_mode(mode);
        self.at.transact(&request)
    }

    /// `true` if the module answers a bare `AT`.
    pub fn is_alive(&mut self) -> bool {
        self.send(&AT).is_ok()
    }

    /// Put a freshly powered module into the state every other procedure
    /// expects: echo off, caller ID and time zone updates on, SMS in text
    /// mode without indications and an empty message store.
    ///
    /// Stops at the first command that is not acknowledged.
    pub fn bring_up(&mut self) -> Result<(), Error> {
        self.send(&SetEcho { enabled: Echo::Off })
            .inspect_err(|e| warn!("Disabling echo failed: {:?}", e))?;

        self.send(&SetCallingLineIdentification {
            n: CallingLineIdentification::Enabled,
        })
        .inspect_err(|e| warn!("Enabling caller ID failed: {:?}", e))?;

        self.send(&SetVoiceHangupControl {
            mode: VoiceHangupControl::Disconnect,
        })
        .inspect_err(|e| warn!("Setting hang up control failed: {:?}", e))?;

        self.send(&SetAutomaticTimezoneUpdate {
            on_off: AutomaticTimezone::Enabled,
        })
        .inspect_err(|e| warn!("Enabling time zone updates failed: {:?}", e))?;

        self.send(&SetMessageFormat {
            mode: MessageFormat::Text,
        })
        .inspect_err(|e| warn!("Selecting SMS text mode failed: {:?}", e))?;

        self.send(&SetNewMessageIndication {
            mode: 0,
            mt: 0,
            bm: 0,
            ds: 0,
        })
        .inspect_err(|e| warn!("Disabling SMS indications failed: {:?}", e))?;

        let response = self
            .send_expecting(&GetSignalQuality, "OK", MatchMode::Token)
            .inspect_err(|e| warn!("Reading signal quality failed: {:?}", e))?;
        match parse_information(&GetSignalQuality, response) {
            Ok(quality) => info!("Signal quality: rssi {} ber {}", quality.rssi, quality.ber),
            Err(e) => debug!("Unreadable signal quality: {:?}", e),
        }

        self.send(&DeleteMessage {
            index: 1,
            flag: DeleteFlag::All,
        })
        .inspect_err(|e| warn!("Purging SMS store failed: {:?}", e))?;

        info!("Module ready");
        Ok(())
    }
}
