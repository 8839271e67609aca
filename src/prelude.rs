//! Prelude - Include traits
pub use super::gprs::Gprs;
pub use super::gsm::Gsm;
pub use super::http::Http;
pub use super::sms::Sms;
pub use super::traits::{Clock, Transport};
