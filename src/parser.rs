//! Locating information responses in a matched transaction.
//!
//! The matched text can hold an echoed command, blank lines and the final
//! result code around the `+XXX:` line. Only that line is handed to the
//! `AtatResp` deserializer, which skips the prefix itself.

use atat::AtatCmd;

use crate::error::ParseError;

/// Response reported on a line of its own starting with `PREFIX`.
pub trait InformationResponse {
    const PREFIX: &'static str;
}

/// First line of `response` starting with `prefix`, prefix included.
pub fn information_line<'a>(response: &'a str, prefix: &str) -> Result<&'a str, ParseError> {
    response
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(prefix))
        .ok_or(ParseError::MissingPrefix)
}

/// Typed response of `cmd` from the text its transaction matched.
pub fn parse_information<Cmd>(cmd: &Cmd, response: &str) -> Result<Cmd::Response, ParseError>
where
    Cmd: AtatCmd,
    Cmd::Response: InformationResponse,
{
    let line = information_line(response, <Cmd::Response as InformationResponse>::PREFIX)?;
    cmd.parse(Ok(line.as_bytes()))
        .map_err(|_| ParseError::Malformed)
}
