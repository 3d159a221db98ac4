mod orders;
mod products;
mod reports;
mod sellers;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use mwsign_core::hash::base64_hmac_sha256;
use mwsign_core::time::timestamp_from_secs;
use mwsign_core::{Context, Credential, Endpoint, HttpSend, Result};
use mwsign_mws::Client;
use std::sync::{Arc, Mutex};

/// One request as seen by [`Recorder`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    /// First decoded value of `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys starting with `prefix`, in wire order.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Recompute the signature of this request with `secret`.
    pub fn expected_signature(&self, secret: &str) -> String {
        let (_, rest) = self.uri.split_once("://").expect("uri must be absolute");
        let (authority, path_and_query) = rest.split_once('/').expect("uri must have a path");
        let (_, query) = path_and_query
            .split_once('?')
            .expect("uri must have a query");
        let (query, _) = query
            .rsplit_once("&Signature=")
            .expect("signature must be last");

        base64_hmac_sha256(
            secret.as_bytes(),
            format!("{}\n{}\n{}\n{}", self.method, authority, self.path, query).as_bytes(),
        )
    }
}

/// Recorder answers every request with a canned response and keeps a copy
/// of what it was sent.
#[derive(Debug, Clone)]
pub struct Recorder {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::with_response(StatusCode::OK, "<Response/>")
    }

    pub fn with_response(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::default(),
        }
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Recorded {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("a request must have been sent")
    }
}

#[async_trait]
impl HttpSend for Recorder {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        let query = form_urlencoded::parse(parts.uri.query().unwrap_or_default().as_bytes())
            .into_owned()
            .collect();

        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            path: parts.uri.path().to_string(),
            query,
            headers: parts.headers,
            body,
        });

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap())
    }
}

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client for merchant `M` on the US endpoint, pinned to 2020-01-01.
pub fn client_for(recorder: &Recorder, merchant: &str) -> Client {
    init();

    Client::new(
        Context::new().with_http_send(recorder.clone()),
        Credential::new("AK", "SECRET", merchant),
        Endpoint::parse("us").unwrap(),
    )
    .unwrap()
    .with_time(timestamp_from_secs(1_577_836_800).unwrap())
}

pub fn client(recorder: &Recorder) -> Client {
    client_for(recorder, "M")
}
