use core::fmt::Write as _;

use heapless::String;
use serde::Serialize;

use crate::{
    client::Client,
    command::http::{
        types::{HttpMethod, CONTENT, URL},
        HttpAction, InitializeHttp, ReadHttpResponse, SetHttpParameter, TerminateHttp,
        MAX_PARAMETER_LEN,
    },
    error::{Error, HttpError},
    parser::parse_information,
    traits::{Clock, Transport},
    transactor::MatchMode,
};

/// Bytes of the body read back after a successful request
pub const READ_SIZE: u32 = 500;

const CONTENT_TYPE: &str = "text/plain";

/// Outcome of a successful [`Http::http_get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HttpResponse {
    pub status: u16,
    pub content_length: Option<u32>,
}

pub trait Http {
    /// `GET` of `url` on `port` through the module's HTTP client.
    ///
    /// Only status 200 counts as success; the first part of the body is
    /// read into the module's output but not returned. Once the session is
    /// opened it is closed again on every path, and a failure to close it is
    /// only reported when everything before succeeded.
    fn http_get(&mut self, url: &str, port: u16) -> Result<HttpResponse, Error>;
}

impl<T, C, const N: usize> Http for Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    fn http_get(&mut self, url: &str, port: u16) -> Result<HttpResponse, Error> {
        // A session left over from an aborted request blocks HTTPINIT
        if self.send(&TerminateHttp).is_ok() {
            debug!("Closed stale HTTP session");
        }

        self.send(&InitializeHttp).map_err(|e| {
            warn!("HTTP init failed: {:?}", e);
            HttpError::Init
        })?;

        let result = self.http_get_in_session(url, port);

        let term = self.send(&TerminateHttp);
        match (result, term) {
            (Ok(response), Ok(())) => Ok(response),
            (Ok(_), Err(e)) => {
                warn!("HTTP term failed: {:?}", e);
                Err(HttpError::Term.into())
            }
            (Err(e), term) => {
                if term.is_err() {
                    warn!("HTTP term failed after an earlier error");
                }
                Err(e)
            }
        }
    }
}

impl<T, C, const N: usize> Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    fn http_get_in_session(&mut self, url: &str, port: u16) -> Result<HttpResponse, Error> {
        let mut target = String::<MAX_PARAMETER_LEN>::new();
        write!(target, "{}:{}", url, port).map_err(|_| {
            warn!("URL does not fit {} bytes", MAX_PARAMETER_LEN);
            HttpError::UrlConfig
        })?;

        self.send(&SetHttpParameter {
            param: URL,
            value: &target,
        })
        .map_err(|e| {
            warn!("Setting HTTP URL failed: {:?}", e);
            HttpError::UrlConfig
        })?;

        self.send(&SetHttpParameter {
            param: CONTENT,
            value: CONTENT_TYPE,
        })
        .map_err(|e| {
            warn!("Setting HTTP content type failed: {:?}", e);
            HttpError::ContentType
        })?;

        let get = HttpAction {
            method: HttpMethod::Get,
        };
        let report = self
            .send_expecting(&get, "+HTTPACTION:", MatchMode::Line)
            .map_err(|e| {
                warn!("HTTP GET failed: {:?}", e);
                HttpError::Action
            })?;

        let action = match parse_information(&get, report) {
            Ok(action) => action,
            Err(e) => {
                warn!("Unreadable HTTP action report: {:?}", e);
                return Err(HttpError::ResponseCode(None).into());
            }
        };
        if action.status != 200 {
            warn!("HTTP GET answered with {}", action.status);
            return Err(HttpError::ResponseCode(Some(action.status)).into());
        }

        self.send(&ReadHttpResponse {
            offset: 0,
            size: READ_SIZE,
        })
        .map_err(|e| {
            warn!("Reading HTTP response failed: {:?}", e);
            HttpError::Read
        })?;

        Ok(HttpResponse {
            status: action.status,
            content_length: action.data_len,
        })
    }
}
