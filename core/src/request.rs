use crate::{Body, Result};
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::borrow::Cow;

/// A request that has been signed and is ready to send.
///
/// It is consumed by [`SignedRequest::into_http`], a signature is only good
/// for one request.
#[derive(Debug)]
pub struct SignedRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Body>,
}

impl SignedRequest {
    /// HTTP method: `GET` without a body, `POST` with one.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Full URL including the signature.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers to send.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Turn into an [`http::Request`], reading the body into memory.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let body = match self.body {
            Some(b) => b.into_bytes()?,
            None => Bytes::new(),
        };

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(self.url)
            .body(body)?;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}

/// Raw response of a remote operation.
///
/// Bodies are never parsed. A non-2xx status with a body is a remote fault
/// and is returned here rather than as an error, see [`Response::is_fault`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Take the raw body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Body as text, invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Whether the remote side reported an error.
    pub fn is_fault(&self) -> bool {
        !self.status.is_success()
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(resp: http::Response<Bytes>) -> Self {
        let status = resp.status();
        Self::new(status, resp.into_body())
    }
}
