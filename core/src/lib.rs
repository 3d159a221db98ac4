//! Core components for signing and dispatching MWS requests.
//!
//! This crate implements Signature Version 2: the shared-secret HMAC scheme
//! used by Amazon Marketplace Web Service. It knows nothing about individual
//! API sections, those live in `mwsign-mws`.
//!
//! ## Overview
//!
//! A request flows through these pieces in order:
//!
//! - [`RequestParameters`]: the caller's parameters, `Action` included
//! - [`canonical_query`]: encodes and sorts the parameters
//! - [`RequestSigner`]: signs `METHOD\nhost\npath\nquery` with HMAC
//! - [`Body::digest`]: `Content-Length` and `Content-MD5` of the body, if any
//! - [`Dispatcher`]: assembles the [`SignedRequest`] and sends it through the
//!   [`HttpSend`] held by [`Context`]
//!
//! ## Example
//!
//! ```no_run
//! use mwsign_core::{Context, Credential, Dispatcher, Endpoint, RequestParameters};
//!
//! # async fn example() -> mwsign_core::Result<()> {
//! let dispatcher = Dispatcher::new(
//!     Context::new(),
//!     Credential::new("access_key_id", "secret_key", "merchant_id"),
//!     Endpoint::parse("us")?,
//! )?;
//!
//! let params = RequestParameters::new()
//!     .with("Action", "GetFeedSubmissionList")
//!     .with("AWSAccessKeyId", "access_key_id")
//!     .with("Merchant", "merchant_id")
//!     .with("Version", "2009-01-01");
//!
//! let req = dispatcher.build(None, params, None, None)?;
//! println!("{}", req.url());
//!
//! let resp = dispatcher.send(req).await?;
//! println!("{}", resp.text());
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod http;
pub use http::{HttpSend, NoopHttpSend};
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};

mod params;
pub use params::{ParamValue, RequestParameters};
pub mod query;
pub use query::{canonical_query, validate_parameters};
mod sign;
pub use sign::{string_to_sign, RequestSigner, SignatureMethod, SIGNATURE_VERSION_2};
mod body;
pub use body::{Body, BodyDigest, SeekRead, MAX_BODY_SIZE};
mod user_agent;
pub use user_agent::{escape_token, validate_header_text, UserAgent, LIBRARY_NAME, LIBRARY_VERSION};
mod endpoint;
pub use endpoint::{normalize_path, Endpoint, ENDPOINT_ALIASES};
mod credential;
pub use credential::Credential;
mod request;
pub use request::{Response, SignedRequest};
mod dispatch;
pub use dispatch::{Dispatcher, CONTENT_MD5};
