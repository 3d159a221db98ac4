use crate::{Error, Result};
use std::fmt;

/// Name of this library as reported in the user agent.
pub const LIBRARY_NAME: &str = "mwsign";
/// Version of this library as reported in the user agent.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Escape `/ ( = ) ;` with a backslash so a value can't break the
/// user agent grammar.
pub fn escape_token(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '/' | '(' | '=' | ')' | ';') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Check that `value` only holds visible ASCII or spaces, the bytes an
/// HTTP header value can carry as text.
pub fn validate_header_text(name: &str, value: &str) -> Result<()> {
    if value.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "{name} {value:?} must be visible ASCII"
        )))
    }
}

/// UserAgent describes the calling application to the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    app_name: String,
    app_version: String,
    client_version: Option<String>,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self::new(LIBRARY_NAME, LIBRARY_VERSION)
    }
}

impl UserAgent {
    /// Create a user agent for the given application.
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            client_version: None,
        }
    }

    /// Set the client version reported as `MWSClientVersion`.
    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = Some(version.into());
        self
    }

    /// Check every field can be sent in a header.
    ///
    /// Application name and version must be non-empty visible ASCII, spaces
    /// allowed.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.is_empty() || self.app_version.is_empty() {
            return Err(Error::validation(
                "application name and version must not be empty",
            ));
        }
        validate_header_text("application name", &self.app_name)?;
        validate_header_text("application version", &self.app_version)?;
        if let Some(v) = &self.client_version {
            validate_header_text("client version", v)?;
        }
        Ok(())
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (Language=Rust; Platform={}/{}; Library={}/{}",
            escape_token(&self.app_name),
            escape_token(&self.app_version),
            escape_token(std::env::consts::OS),
            escape_token(std::env::consts::ARCH),
            LIBRARY_NAME,
            escape_token(LIBRARY_VERSION),
        )?;
        if let Some(v) = &self.client_version {
            write!(f, "; MWSClientVersion={}", escape_token(v))?;
        }
        f.write_str(")")
    }
}
