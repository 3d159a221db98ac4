//! Amazon Marketplace Web Service API sections.
//!
//! Every section wraps a shared [`Client`] and knows only its path, API
//! version and how it names the seller. Signing happens in `mwsign-core`.
//!
//! ```no_run
//! use mwsign_core::Context;
//! use mwsign_http_send_reqwest::ReqwestHttpSend;
//! use mwsign_mws::feeds::SubmissionFilter;
//! use mwsign_mws::{Client, Config, Feeds};
//!
//! # async fn example() -> mwsign_mws::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(mwsign_core::OsEnv);
//! let config = Config::default().from_env(&ctx);
//! let client = Client::from_config(ctx, config)?;
//!
//! let feeds = Feeds::new(client);
//! let resp = feeds.list_submissions(&SubmissionFilter::default()).await?;
//! println!("{}", resp.text());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;
mod client;
pub use client::{Client, Section};

pub mod catalog;
pub mod params;

pub mod feeds;
pub use feeds::Feeds;
pub mod orders;
pub use orders::Orders;
pub mod products;
pub use products::Products;
pub mod reports;
pub use reports::Reports;
pub mod sellers;
pub use sellers::Sellers;

pub use mwsign_core::{Error, ErrorKind, Response, Result};
