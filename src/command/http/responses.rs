//! Responses for HTTP(S) Commands
use super::types::HttpMethod;
use crate::parser::InformationResponse;
use atat::atat_derive::AtatResp;

/// 16.2.4 HTTP method action +HTTPACTION
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct HttpActionResult {
    #[at_arg(position = 0)]
    pub method: HttpMethod,
    /// HTTP status code, or a 7xx code for module side failures
    #[at_arg(position = 1)]
    pub status: u16,
    #[at_arg(position = 2)]
    pub data_len: Option<u32>,
}

impl InformationResponse for HttpActionResult {
    const PREFIX: &'static str = "+HTTPACTION:";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::http::HttpAction;
    use crate::error::ParseError;
    use crate::parser::parse_information;

    const GET: HttpAction = HttpAction {
        method: HttpMethod::Get,
    };

    #[test]
    fn action_report() {
        let resp = parse_information(&GET, "OK\r\n\r\n+HTTPACTION: 0,200,1024").unwrap();
        assert_eq!(resp.method, HttpMethod::Get);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.data_len, Some(1024));
    }

    #[test]
    fn action_report_without_length() {
        let resp = parse_information(&GET, "+HTTPACTION: 0,404").unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.data_len, None);
    }

    #[test]
    fn action_report_garbage_status() {
        assert_eq!(
            parse_information(&GET, "+HTTPACTION: 0,abc,0"),
            Err(ParseError::Malformed)
        );
    }
}
