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

use crate::endpoint::normalize_path;
use crate::query::{self, SIGNATURE_ENCODE_SET, SIGNATURE_METHOD, SIGNATURE_VERSION};
use crate::user_agent::validate_header_text;
use crate::{
    Body, Context, Credential, Endpoint, Error, RequestParameters, RequestSigner, Response,
    Result, SignedRequest, UserAgent,
};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;
use std::sync::Arc;

/// Header carrying the base64 MD5 of the body.
pub const CONTENT_MD5: &str = "content-md5";

/// Dispatcher builds, signs and sends requests.
///
/// It holds only immutable state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    ctx: Context,
    credential: Arc<Credential>,
    endpoint: Endpoint,
    user_agent: HeaderValue,
    signer: RequestSigner,
}

impl Dispatcher {
    /// Create a new dispatcher.
    ///
    /// Fails with [`ErrorKind::Validation`](crate::ErrorKind::Validation) if
    /// any credential field is empty.
    pub fn new(ctx: Context, credential: Credential, endpoint: Endpoint) -> Result<Self> {
        credential.validate()?;

        Ok(Self {
            ctx,
            credential: Arc::new(credential),
            endpoint,
            user_agent: HeaderValue::try_from(UserAgent::default().to_string())?,
            signer: RequestSigner::default(),
        })
    }

    /// Use a complete user agent string instead of the generated one.
    ///
    /// It must be non-empty visible ASCII, spaces allowed.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self> {
        if user_agent.is_empty() {
            return Err(Error::validation("user agent must not be empty"));
        }
        validate_header_text("user agent", user_agent)?;
        self.user_agent = HeaderValue::from_str(user_agent)?;
        Ok(self)
    }

    /// Use a different signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Context this dispatcher sends through.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Credential in use.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Endpoint in use.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        self.user_agent.to_str().unwrap_or_default()
    }

    /// Build and sign a request without sending it.
    ///
    /// The only I/O performed is reading `body` to compute its digest.
    pub fn build(
        &self,
        path: Option<&str>,
        mut params: RequestParameters,
        body: Option<Body>,
        content_type: Option<&str>,
    ) -> Result<SignedRequest> {
        query::validate_parameters(&params)?;

        let content_type = match (&body, content_type) {
            (None, _) => None,
            (Some(_), Some(ct)) if !ct.is_empty() => Some(HeaderValue::from_str(ct)?),
            (Some(_), _) => {
                return Err(Error::validation(
                    "content type is required when a body is set",
                ))
            }
        };

        params.push(SIGNATURE_METHOD, self.signer.method().as_str());
        params.push(SIGNATURE_VERSION, self.signer.version());
        let query = query::serialize(&params);
        debug!("calculated canonical query: {query}");

        let method = if body.is_some() {
            Method::POST
        } else {
            Method::GET
        };
        let path = normalize_path(path);

        let signature = self.signer.sign(
            &self.credential.secret_key,
            method.as_str(),
            self.endpoint.host(),
            &path,
            &query,
        )?;

        let url = format!(
            "{}{}?{}&Signature={}",
            self.endpoint.url(),
            path,
            query,
            utf8_percent_encode(&signature, &SIGNATURE_ENCODE_SET)
        );
        debug!("built {method} request: {url}");

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());

        let body = match (body, content_type) {
            (Some(mut body), Some(ct)) => {
                let digest = body.digest()?;
                headers.insert(CONTENT_TYPE, ct);
                headers.insert(CONTENT_LENGTH, HeaderValue::from(digest.length));
                headers.insert(CONTENT_MD5, HeaderValue::try_from(digest.content_md5)?);
                Some(body)
            }
            (body, _) => body,
        };

        Ok(SignedRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Send a signed request.
    ///
    /// A non-2xx response that carries a body is returned as a [`Response`]
    /// so the caller can read the fault. Without a body it is a transport
    /// error.
    pub async fn send(&self, req: SignedRequest) -> Result<Response> {
        let req = req.into_http()?;
        let resp: Response = self.ctx.http_send(req).await?.into();
        debug!("got response status: {}", resp.status());

        if resp.is_fault() && resp.body().is_empty() {
            return Err(Error::transport(format!(
                "remote returned {} without a body",
                resp.status()
            )));
        }
        Ok(resp)
    }

    /// Build, sign and send a request.
    pub async fn request(
        &self,
        path: Option<&str>,
        params: RequestParameters,
        body: Option<Body>,
        content_type: Option<&str>,
    ) -> Result<Response> {
        let req = self.build(path, params, body, content_type)?;
        self.send(req).await
    }
}
