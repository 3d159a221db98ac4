use crate::constants::*;
use mwsign_core::utils::Redact;
use mwsign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the MWS client.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `MWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `MWS_SECRET_KEY`
    pub secret_key: Option<String>,
    /// `merchant_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `MWS_MERCHANT_ID`
    pub merchant_id: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `MWS_ENDPOINT`
    ///
    /// Either a region alias such as `us` or a full URL.
    pub endpoint: Option<String>,
    /// `user_agent` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `MWS_USER_AGENT`
    ///
    /// Replaces the generated user agent when set.
    pub user_agent: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("merchant_id", &Redact::from(&self.merchant_id))
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MWS_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MWS_MERCHANT_ID) {
            self.merchant_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MWS_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MWS_USER_AGENT) {
            self.user_agent.get_or_insert(v);
        }
        self
    }
}
