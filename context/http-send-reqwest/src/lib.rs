//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! ```no_run
//! use mwsign_core::Context;
//! use mwsign_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use mwsign_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use std::time::Duration;

/// Connect and read timeout of the default client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl Default for ReqwestHttpSend {
    /// Panics if the TLS backend cannot be initialized, as
    /// [`reqwest::Client::new`] does.
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
            .expect("reqwest client must build with default settings")
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// The client's own timeout settings are used as-is.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose client gives up after `timeout`.
    ///
    /// Fails with [`ErrorKind::Transport`](mwsign_core::ErrorKind::Transport)
    /// if the client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|err| {
                Error::transport(format!("build reqwest client failed: {err}")).with_source(err)
            })?;
        Ok(Self { client })
    }
}

fn map_err(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(format!("request timed out: {err}")).with_source(err)
    } else {
        Error::transport(format!("send request failed: {err}")).with_source(err)
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|err| {
            Error::validation(format!("request is not valid for reqwest: {err}")).with_source(err)
        })?;
        debug!("sending {} {}", req.method(), req.url());

        let resp: http::Response<_> = self.client.execute(req).await.map_err(map_err)?.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(map_err)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
