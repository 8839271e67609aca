//! ### 16 - HTTP(S)
//!
//! The HTTP client of the module works on a session opened with
//! `AT+HTTPINIT` and closed with `AT+HTTPTERM`. Only one session exists at
//! a time, so a session left open by an earlier failure makes the next
//! `AT+HTTPINIT` fail. A PDP context must be active.
//!
//! `AT+HTTPACTION` is answered with `OK` right away; the outcome follows
//! later as a `+HTTPACTION: <method>,<statuscode>,<datalen>` report.

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::HttpActionResult;
use types::HttpMethod;

use super::NoResponse;

/// Largest value of a [`SetHttpParameter`]
pub const MAX_PARAMETER_LEN: usize = 256;

/// 16.2.1 Start HTTP service +HTTPINIT
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPINIT", NoResponse)]
pub struct InitializeHttp;

/// 16.2.2 Stop HTTP service +HTTPTERM
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPTERM", NoResponse)]
pub struct TerminateHttp;

/// 16.2.3 Set HTTP parameters value +HTTPPARA
///
/// `param` is one of the names in [`types`] (`"URL"`, `"CONTENT"`, ...).
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPPARA", NoResponse)]
pub struct SetHttpParameter<'a> {
    #[at_arg(position = 0, len = 8)]
    pub param: &'a str,
    #[at_arg(position = 1, len = 256)]
    pub value: &'a str,
}

/// 16.2.4 HTTP method action +HTTPACTION
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPACTION", HttpActionResult, timeout_ms = 20000)]
pub struct HttpAction {
    #[at_arg(position = 0)]
    pub method: HttpMethod,
}

/// 16.2.6 Read the HTTP server response +HTTPREAD
///
/// Reads up to `size` bytes of the response body starting at `offset`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPREAD", NoResponse, timeout_ms = 10000)]
pub struct ReadHttpResponse {
    #[at_arg(position = 0)]
    pub offset: u32,
    #[at_arg(position = 1)]
    pub size: u32,
}
