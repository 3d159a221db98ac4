// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::Config;
use log::debug;
use mwsign_core::time::{format_iso8601, now, DateTime};
use mwsign_core::{
    Body, Context, Credential, Dispatcher, Endpoint, Error, RequestParameters, Response, Result,
    SignedRequest, UserAgent,
};

/// Section describes where an API section lives and how it names the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Request path, `/` for the root sections.
    pub path: &'static str,
    /// Value of the `Version` parameter.
    pub version: &'static str,
    /// Parameter carrying the merchant id: `Merchant` or `SellerId`.
    pub seller_key: &'static str,
}

/// Client holds everything the sections share: credential, endpoint, user
/// agent and transport.
///
/// Cloning is cheap. Sections wrap a clone.
#[derive(Debug, Clone)]
pub struct Client {
    dispatcher: Dispatcher,
    time: Option<DateTime>,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with `Validation` if any credential field is empty.
    pub fn new(ctx: Context, credential: Credential, endpoint: Endpoint) -> Result<Self> {
        let user_agent = UserAgent::default()
            .with_client_version(CLIENT_VERSION)
            .to_string();
        let dispatcher = Dispatcher::new(ctx, credential, endpoint)?.with_user_agent(&user_agent)?;

        Ok(Self {
            dispatcher,
            time: None,
        })
    }

    /// Create a new client from [`Config`].
    ///
    /// Missing or empty credential fields and endpoint fail with
    /// `ConfigInvalid`. Call [`Config::from_env`] first to fill them from env.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        fn required(name: &str, value: Option<String>) -> Result<String> {
            match value {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(Error::config_invalid(format!("{name} is not configured"))),
            }
        }

        let credential = Credential::new(
            required("access_key_id", config.access_key_id)?,
            required("secret_key", config.secret_key)?,
            required("merchant_id", config.merchant_id)?,
        );
        let endpoint = Endpoint::parse(&required("endpoint", config.endpoint)?).map_err(|err| {
            Error::config_invalid(format!("endpoint is invalid: {}", err.message())).with_source(err)
        })?;

        let client = Self::new(ctx, credential, endpoint)?;
        match config.user_agent {
            Some(ua) if !ua.is_empty() => client.with_user_agent(&ua),
            _ => Ok(client),
        }
    }

    /// Send `user_agent` verbatim instead of the generated one.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self> {
        self.dispatcher = self.dispatcher.with_user_agent(user_agent)?;
        Ok(self)
    }

    /// Identify the calling application in the generated user agent.
    ///
    /// `name` and `version` must be non-empty visible ASCII, spaces allowed.
    pub fn with_app(self, name: &str, version: &str) -> Result<Self> {
        let user_agent = UserAgent::new(name, version).with_client_version(CLIENT_VERSION);
        user_agent.validate()?;
        self.with_user_agent(&user_agent.to_string())
    }

    /// Pin the `Timestamp` sent with every request.
    ///
    /// Mostly useful in tests, requests carrying a stale timestamp are
    /// rejected by the remote side.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Dispatcher used to sign and send.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Parameters every request of `section` starts from.
    pub fn new_params(&self, section: &Section) -> RequestParameters {
        let credential = self.dispatcher.credential();
        RequestParameters::new()
            .with(AWS_ACCESS_KEY_ID, &credential.access_key_id)
            .with(section.seller_key, &credential.merchant_id)
            .with(TIMESTAMP, format_iso8601(self.time.unwrap_or_else(now)))
            .with(VERSION, section.version)
    }

    /// Build and sign `action` of `section` without sending it.
    ///
    /// `params` win over the section defaults. `Action` is always set to
    /// `action`.
    pub fn build(
        &self,
        section: &Section,
        action: &str,
        params: RequestParameters,
        body: Option<Body>,
        content_type: Option<&str>,
    ) -> Result<SignedRequest> {
        let mut all = params;
        for (k, v) in self.new_params(section).iter() {
            if !all.contains_key(k) {
                all.push(k, v.clone());
            }
        }
        all.set(ACTION, action);

        debug!("building {action} for section {}", section.path);
        self.dispatcher
            .build(Some(section.path), all, body, content_type)
    }

    /// Build, sign and send `action` of `section`.
    pub async fn send(
        &self,
        section: &Section,
        action: &str,
        params: RequestParameters,
        body: Option<Body>,
        content_type: Option<&str>,
    ) -> Result<Response> {
        let req = self.build(section, action, params, body, content_type)?;
        self.dispatcher.send(req).await
    }
}
