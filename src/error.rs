/// Why a response could not be turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The expected `+XXX:` prefix is not in the response
    MissingPrefix,
    /// The parameters do not deserialize into the response type
    Malformed,
}

/// `register_gprs` stage failures, in stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GprsError {
    /// `AT+COPS?` failed or carried no access technology
    Operator,
    /// `AT+CGATT?` failed or the MT is not attached
    PacketDomain,
    /// `AT+CGACT=1,1` failed
    PdpContext,
    /// `AT+CGREG?` failed or could not be parsed
    Network,
}

/// `http_get` stage failures, in stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HttpError {
    Init,
    UrlConfig,
    ContentType,
    Action,
    /// The server answered with something other than 200, or the
    /// `+HTTPACTION` report was unreadable (`None`)
    ResponseCode(Option<u16>),
    Read,
    /// The closing `AT+HTTPTERM` failed after an otherwise successful request
    Term,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmsError {
    /// No `>` prompt after `AT+CMGS`
    Prompt,
    /// The message body was not acknowledged with `OK`
    Send,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    // Transaction outcomes
    Timeout,
    BufferOverflow,
    Transport,
    CommandTooLong,

    ResponseParse(ParseError),

    // Procedure specific errors
    Gprs(GprsError),
    Http(HttpError),
    Sms(SmsError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::ResponseParse(e)
    }
}

impl From<GprsError> for Error {
    fn from(e: GprsError) -> Self {
        Self::Gprs(e)
    }
}

impl From<HttpError> for Error {
    fn from(e: HttpError) -> Self {
        Self::Http(e)
    }
}

impl From<SmsError> for Error {
    fn from(e: SmsError) -> Self {
        Self::Sms(e)
    }
}
