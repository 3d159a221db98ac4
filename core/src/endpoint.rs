//! Endpoint resolution and path normalization.

use crate::query::SIGNATURE_ENCODE_SET;
use crate::{Error, Result};
use percent_encoding::utf8_percent_encode;

/// Region aliases accepted in place of a full endpoint URL.
pub const ENDPOINT_ALIASES: [(&str, &str); 6] = [
    ("ca", "https://mws.amazonservices.ca"),
    ("cn", "https://mws.amazonservices.com.cn"),
    ("eu", "https://mws-eu.amazonservices.com"),
    ("in", "https://mws.amazonservices.in"),
    ("jp", "https://mws.amazonservices.jp"),
    ("us", "https://mws.amazonservices.com"),
];

/// Endpoint is the base URL requests are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host: String,
}

impl Endpoint {
    /// Resolve an alias such as `us` or take `value` as a URL.
    ///
    /// A value without a scheme is taken as `https`. The URL must not carry
    /// a path: requests are signed against the section path alone.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::validation("endpoint must not be empty"));
        }

        let url = ENDPOINT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == value)
            .map(|(_, url)| *url)
            .unwrap_or(value);

        let (scheme, rest) = url.split_once("://").unwrap_or(("https", url));
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        if scheme.is_empty() || host.is_empty() {
            return Err(Error::validation(format!(
                "endpoint {value:?} has no host"
            )));
        }
        if !path.trim_matches('/').is_empty() {
            return Err(Error::validation(format!(
                "endpoint {value:?} must not carry a path"
            )));
        }

        Ok(Self {
            url: format!("{scheme}://{host}"),
            host: host.to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host (authority) used in the string to sign.
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Normalize a request path.
///
/// Empty input becomes `/`. Otherwise repeated slashes collapse, `.` is
/// dropped, `..` pops a segment (never above the root), the trailing slash
/// is removed and the result is percent-encoded with `/` kept.
pub fn normalize_path(path: Option<&str>) -> String {
    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return "/".to_string(),
    };

    let mut segments: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let joined = format!("/{}", segments.join("/"));
    utf8_percent_encode(&joined, &SIGNATURE_ENCODE_SET).to_string()
}
