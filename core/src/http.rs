use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is the transport used by the dispatcher to deliver signed requests.
///
/// Implementations should apply a connect-and-read timeout and report it as
/// [`ErrorKind::Timeout`](crate::ErrorKind::Timeout). Non-2xx statuses are NOT
/// errors at this layer: return the response as-is so the body describing the
/// remote failure reaches the caller.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}
