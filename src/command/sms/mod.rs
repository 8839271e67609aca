//! ### 9 - SMS
//!
//! Text mode short messages. Sending is a two step exchange: `AT+CMGS`
//! is answered with a `>` prompt, after which the message text is written
//! raw and closed with `Ctrl-Z` (0x1A).

pub mod responses;
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use responses::MessageListEntry;
use types::*;

/// Largest destination address accepted by [`SendMessage`]
pub const MAX_NUMBER_LEN: usize = 32;

/// Ends the text of a message written after the `>` prompt.
pub const CTRL_Z: u8 = 0x1A;

/// 9.2.2 Select SMS message format +CMGF
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGF", NoResponse)]
pub struct SetMessageFormat {
    #[at_arg(position = 0)]
    pub mode: MessageFormat,
}

/// 9.2.10 New SMS message indications +CNMI
///
/// Selects how newly received messages are indicated to the TE. With every
/// parameter 0 messages are only stored and never announced, so they have
/// to be polled with `AT+CMGL`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CNMI", NoResponse)]
pub struct SetNewMessageIndication {
    #[at_arg(position = 0)]
    pub mode: u8,
    #[at_arg(position = 1)]
    pub mt: u8,
    #[at_arg(position = 2)]
    pub bm: u8,
    #[at_arg(position = 3)]
    pub ds: u8,
}

/// 9.2.6 List SMS messages from preferred store +CMGL
///
/// In text mode every entry is a `+CMGL: <index>,<stat>,<oa>,[<alpha>],<scts>`
/// header line followed by the message text. Only the first header is
/// parsed as the response.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGL", MessageListEntry, timeout_ms = 5000)]
pub struct ListMessages<'a> {
    #[at_arg(position = 0, len = 10)]
    pub stat: &'a str,
}

/// 9.2.9 Send SMS message +CMGS
///
/// Answered with the `>` prompt rather than a final result code.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGS", NoResponse, timeout_ms = 5000)]
pub struct SendMessage<'a> {
    #[at_arg(position = 0, len = 32)]
    pub number: &'a str,
}

/// 9.2.4 Delete SMS message +CMGD
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGD", NoResponse)]
pub struct DeleteMessage {
    #[at_arg(position = 0)]
    pub index: u16,
    #[at_arg(position = 1)]
    pub flag: DeleteFlag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::text;

    #[test]
    fn command_text() {
        assert_eq!(
            text(&SetMessageFormat {
                mode: MessageFormat::Text
            }),
            "AT+CMGF=1"
        );
        assert_eq!(
            text(&SetNewMessageIndication {
                mode: 0,
                mt: 0,
                bm: 0,
                ds: 0
            }),
            "AT+CNMI=0,0,0,0"
        );
        assert_eq!(
            text(&ListMessages {
                stat: types::REC_UNREAD
            }),
            "AT+CMGL=\"REC UNREAD\""
        );
        assert_eq!(
            text(&SendMessage { number: "+15550100" }),
            "AT+CMGS=\"+15550100\""
        );
        assert_eq!(
            text(&DeleteMessage {
                index: 1,
                flag: DeleteFlag::All
            }),
            "AT+CMGD=1,4"
        );
    }
}
