use embassy_time::Duration;
use heapless::String;
use serde::Serialize;

use crate::{
    client::Client,
    command::sms::{
        responses::MessageListEntry,
        types::{DeleteFlag, REC_UNREAD},
        DeleteMessage, ListMessages, SendMessage, CTRL_Z, MAX_NUMBER_LEN,
    },
    error::{Error, SmsError},
    parser::InformationResponse,
    traits::{Clock, Transport},
    transactor::MatchMode,
};

/// Longest message body returned by [`Sms::read_sms`]
pub const MAX_BODY_LEN: usize = 254;

/// Final result code of a listing. Matching the whole line keeps an `OK`
/// inside a message body from ending the listing early.
const LISTING_END: &str = "\r\nOK\r\n";

const SEND_TIMEOUT: Duration = Duration::from_millis(10_000);
const PURGE_TIMEOUT: Duration = Duration::from_millis(5_000);

/// One received text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsMessage {
    pub sender: Option<String<MAX_NUMBER_LEN>>,
    pub body: String<MAX_BODY_LEN>,
}

impl SmsMessage {
    /// First message of a text mode `+CMGL` listing.
    ///
    /// The body runs from the line after the entry header up to the next
    /// entry or the final `OK` on a line of its own. `None` if there is no
    /// entry, or its body is empty or longer than [`MAX_BODY_LEN`].
    pub fn from_listing(listing: &str) -> Option<Self> {
        let start = listing.find(MessageListEntry::PREFIX)?;
        let entry = &listing[start..];
        let header_end = entry.find('\n')?;

        let sender = match atat::serde_at::from_str::<MessageListEntry>(&entry[..header_end]) {
            Ok(header) => header.sender.filter(|sender| !sender.is_empty()),
            Err(_) => {
                debug!("Unreadable message header");
                None
            }
        };

        let rest = &entry[header_end + 1..];
        let rest = match rest.strip_suffix("OK") {
            Some(head) if head.is_empty() || head.ends_with('\n') => head,
            _ => rest,
        };
        let body = match rest.find("\r\n+CMGL:") {
            Some(next) => &rest[..next],
            None => rest,
        };
        let body = body.trim_end_matches(['\r', '\n']);

        if body.is_empty() {
            return None;
        }
        let Ok(body) = String::<MAX_BODY_LEN>::try_from(body) else {
            debug!("Message body of {} bytes dropped", body.len());
            return None;
        };

        Some(Self { sender, body })
    }
}

pub trait Sms {
    /// Send `message` to `number` as a text mode SMS.
    fn send_sms(&mut self, number: &str, message: &str) -> Result<(), Error>;

    /// Take the first unread message, then empty the module's message store.
    ///
    /// `Ok(None)` covers both an empty inbox and a listing that could not be
    /// collected in time or did not fit the response buffer; neither purges
    /// the store. A failed purge is logged and the message still returned.
    fn read_sms(&mut self) -> Result<Option<SmsMessage>, Error>;
}

impl<T, C, const N: usize> Sms for Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    fn send_sms(&mut self, number: &str, message: &str) -> Result<(), Error> {
        if number.len() > MAX_NUMBER_LEN {
            return Err(Error::CommandTooLong);
        }

        self.send_expecting(&SendMessage { number }, ">", MatchMode::Token)
            .map_err(|e| {
                warn!("No SMS prompt: {:?}", e);
                SmsError::Prompt
            })?;

        self.at
            .transact_payload(message.as_bytes(), CTRL_Z, "OK", SEND_TIMEOUT)
            .map_err(|e| {
                warn!("SMS not sent: {:?}", e);
                SmsError::Send
            })?;

        info!("SMS sent");
        Ok(())
    }

    fn read_sms(&mut self) -> Result<Option<SmsMessage>, Error> {
        let listing = match self.send_expecting(
            &ListMessages { stat: REC_UNREAD },
            LISTING_END,
            MatchMode::Token,
        ) {
            Ok(listing) => listing,
            Err(Error::Transport) => return Err(Error::Transport),
            Err(e) => {
                debug!("No message listing: {:?}", e);
                return Ok(None);
            }
        };
        let message = SmsMessage::from_listing(listing);

        if let Err(e) = self.send_within(
            &DeleteMessage {
                index: 1,
                flag: DeleteFlag::All,
            },
            "OK",
            MatchMode::Token,
            PURGE_TIMEOUT,
        ) {
            warn!("Purging SMS store failed: {:?}", e);
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_helpers::{MockClock, MockTransport};

    const OK: &[u8] = b"\r\nOK\r\n";
    const HEADER: &str = "+CMGL: 1,\"REC UNREAD\",\"+15550100\",\"\",\"24/05/01,10:00:00+08\"";

    fn listing(body: &str) -> std::vec::Vec<u8> {
        std::format!("\r\n{}\r\n{}\r\n\r\nOK\r\n", HEADER, body).into_bytes()
    }

    #[test]
    fn send() {
        let clock = MockClock::new();
        let transport = MockTransport::new()
            .reply(b"\r\n> ")
            .reply(b"\r\n+CMGS: 12\r\n\r\nOK\r\n");
        let mut client = Client::new(transport, &clock, Config::default());

        assert_eq!(client.send_sms("+15550100", "hello"), Ok(()));
        assert_eq!(client.transport().written(), b"AT+CMGS=\"+15550100\"\r\nhello\x1a");
    }

    #[test]
    fn send_without_prompt() {
        let clock = MockClock::new();
        let transport = MockTransport::new().reply(b"\r\nERROR\r\n");
        let mut client = Client::new(transport, &clock, Config::default());

        assert_eq!(
            client.send_sms("+15550100", "hello"),
            Err(Error::Sms(SmsError::Prompt))
        );
        assert_eq!(client.transport().sent(), ["AT+CMGS=\"+15550100\""]);
    }

    #[test]
    fn send_not_acknowledged() {
        let clock = MockClock::new();
        let transport = MockTransport::new()
            .reply(b"\r\n> ")
            .reply(b"\r\n+CMS ERROR: 500\r\n");
        let mut client = Client::new(transport, &clock, Config::default());

        assert_eq!(
            client.send_sms("+15550100", "hello"),
            Err(Error::Sms(SmsError::Send))
        );
    }

    #[test]
    fn read_longest_body() {
        let clock = MockClock::new();
        let body = "a".repeat(MAX_BODY_LEN);
        let transport = MockTransport::new().reply(&listing(&body)).reply(OK);
        let mut client: Client<_, _, 512> =
            Client::with_response_capacity(transport, &clock, Config::default());

        let message = client.read_sms().unwrap().unwrap();
        assert_eq!(message.body, body.as_str());
        assert_eq!(message.sender.as_deref(), Some("+15550100"));
        assert_eq!(
            client.transport().sent(),
            ["AT+CMGL=\"REC UNREAD\"", "AT+CMGD=1,4"]
        );
    }

    #[test]
    fn read_oversized_body() {
        let clock = MockClock::new();
        let body = "a".repeat(MAX_BODY_LEN + 1);
        let transport = MockTransport::new().reply(&listing(&body)).reply(OK);
        let mut client: Client<_, _, 512> =
            Client::with_response_capacity(transport, &clock, Config::default());

        assert_eq!(client.read_sms(), Ok(None));
        assert_eq!(client.transport().sent().last().unwrap(), "AT+CMGD=1,4");
    }

    #[test]
    fn read_body_containing_ok() {
        let clock = MockClock::new();
        let body = "BOOKED for 8, is that OK?";
        let transport = MockTransport::new().reply(&listing(body)).reply(OK);
        let mut client = Client::new(transport, &clock, Config::default());

        let message = client.read_sms().unwrap().unwrap();
        assert_eq!(message.body, body);
        assert_eq!(
            client.transport().sent(),
            ["AT+CMGL=\"REC UNREAD\"", "AT+CMGD=1,4"]
        );
    }

    #[test]
    fn listing_end_only_on_its_own_line() {
        let listing = std::format!("{}\r\nis that OK", HEADER);
        let message = SmsMessage::from_listing(&listing).unwrap();
        assert_eq!(message.body, "is that OK");

        let listing = std::format!("{}\r\nis that OK\r\n\r\nOK", HEADER);
        let message = SmsMessage::from_listing(&listing).unwrap();
        assert_eq!(message.body, "is that OK");
    }

    #[test]
    fn unknown_sender() {
        let listing = "+CMGL: 1,\"REC UNREAD\",\"\",\"\",\"24/05/01,10:00:00+08\"\r\nhi\r\n\r\nOK";
        let message = SmsMessage::from_listing(listing).unwrap();
        assert_eq!(message.sender, None);
        assert_eq!(message.body, "hi");
    }

    #[test]
    fn read_empty_inbox() {
        let clock = MockClock::new();
        let transport = MockTransport::new().reply(OK).reply(OK);
        let mut client = Client::new(transport, &clock, Config::default());

        assert_eq!(client.read_sms(), Ok(None));
        assert_eq!(
            client.transport().sent(),
            ["AT+CMGL=\"REC UNREAD\"", "AT+CMGD=1,4"]
        );
    }

    #[test]
    fn read_without_answer_keeps_store() {
        let clock = MockClock::new();
        let mut client = Client::new(MockTransport::new(), &clock, Config::default());

        assert_eq!(client.read_sms(), Ok(None));
        assert_eq!(client.transport().sent(), ["AT+CMGL=\"REC UNREAD\""]);
    }

    #[test]
    fn longest_body_overflows_default_buffer() {
        let clock = MockClock::new();
        let body = "a".repeat(MAX_BODY_LEN);
        let transport = MockTransport::new().reply(&listing(&body));
        let mut client = Client::new(transport, &clock, Config::default());

        assert_eq!(client.read_sms(), Ok(None));
        assert_eq!(client.transport().sent(), ["AT+CMGL=\"REC UNREAD\""]);
    }

    #[test]
    fn purge_failure_keeps_message() {
        let clock = MockClock::new();
        let transport = MockTransport::new()
            .reply(&listing("see you at 8"))
            .reply(b"\r\nERROR\r\n");
        let mut client = Client::new(transport, &clock, Config::default());

        let message = client.read_sms().unwrap().unwrap();
        assert_eq!(message.body, "see you at 8");
    }

    #[test]
    fn first_of_several_messages() {
        let listing = std::format!(
            "{}\r\nfirst\r\n+CMGL: 2,\"REC UNREAD\",\"+15550199\",\"\",\"24/05/01,10:01:00+08\"\r\nsecond\r\n\r\nOK",
            HEADER
        );
        let message = SmsMessage::from_listing(&listing).unwrap();
        assert_eq!(message.body, "first");
        assert_eq!(message.sender.as_deref(), Some("+15550100"));
    }

    #[test]
    fn multi_line_body() {
        let listing = std::format!("{}\r\nline one\r\nline two\r\n\r\nOK", HEADER);
        let message = SmsMessage::from_listing(&listing).unwrap();
        assert_eq!(message.body, "line one\r\nline two");
    }

    #[test]
    fn empty_body() {
        let listing = std::format!("{}\r\n\r\n\r\nOK", HEADER);
        assert_eq!(SmsMessage::from_listing(&listing), None);
        assert_eq!(SmsMessage::from_listing(HEADER), None);
    }
}
