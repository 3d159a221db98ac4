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

//! Canonical query construction.

use crate::{Error, RequestParameters, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// AsciiSet used for query keys and values.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet used for the final `Signature` value and request paths.
///
/// Same as [`QUERY_ENCODE_SET`] but keeps `/`.
pub static SIGNATURE_ENCODE_SET: AsciiSet = QUERY_ENCODE_SET.remove(b'/');

/// Parameter that names the remote operation.
pub const ACTION: &str = "Action";
/// Parameter carrying the computed signature.
pub const SIGNATURE: &str = "Signature";
/// Parameter naming the HMAC algorithm.
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
/// Parameter naming the signature scheme version.
pub const SIGNATURE_VERSION: &str = "SignatureVersion";

const RESERVED_KEYS: [&str; 3] = [SIGNATURE, SIGNATURE_METHOD, SIGNATURE_VERSION];

/// Percent-encode a key or value for the canonical query.
pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, &QUERY_ENCODE_SET).to_string()
}

/// Check the caller-provided parameters before anything is signed.
///
/// `Action` must be present and the keys owned by the signer must not be.
pub fn validate_parameters(params: &RequestParameters) -> Result<()> {
    match params.get(ACTION).and_then(|v| v.as_single()) {
        Some(action) if !action.is_empty() => {}
        Some(_) => return Err(Error::validation("parameter Action must not be empty")),
        None => return Err(Error::validation("required parameter Action is missing")),
    }

    if let Some(key) = RESERVED_KEYS.iter().find(|k| params.contains_key(k)) {
        return Err(Error::validation(format!(
            "parameter {key} is reserved and set by the signer"
        )));
    }

    Ok(())
}

/// Build the canonical query string.
///
/// Every entry is encoded with [`QUERY_ENCODE_SET`], then entries are sorted
/// by the byte order of the encoded key. The sort is stable so repeated keys
/// keep the caller's order.
pub fn canonical_query(params: &RequestParameters) -> Result<String> {
    validate_parameters(params)?;
    Ok(serialize(params))
}

/// Serialize without validation. Used once the signer has added its own keys.
pub(crate) fn serialize(params: &RequestParameters) -> String {
    let mut pairs: Vec<(String, String)> = params
        .expanded()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
