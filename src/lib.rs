#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod buffer;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod gprs;
pub mod gsm;
pub mod http;
pub mod parser;
pub mod prelude;
pub mod registration;
pub mod sms;
pub mod traits;
pub mod transactor;

#[cfg(test)]
mod test_helpers;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use http::HttpResponse;
pub use registration::{GprsRegistration, Status};
pub use sms::SmsMessage;
