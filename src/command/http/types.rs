//! Argument and parameter types used by HTTP(S) Commands and Responses
use atat::atat_derive::AtatEnum;

/// `+HTTPPARA` name of the request URL, `<host>[:<port>][/<path>]`
pub const URL: &str = "URL";
/// `+HTTPPARA` name of the `Content-Type` request header
pub const CONTENT: &str = "CONTENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Head = 2,
    Delete = 3,
    Put = 4,
}
