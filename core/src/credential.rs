use crate::utils::Redact;
use crate::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key, secret key and merchant id.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id, sent as `AWSAccessKeyId`.
    pub access_key_id: String,
    /// Secret key used as the HMAC key. Never sent.
    pub secret_key: String,
    /// Merchant (seller) id.
    pub merchant_id: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("merchant_id", &Redact::from(&self.merchant_id))
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
            merchant_id: merchant_id.into(),
        }
    }

    /// Check that every field is set.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("access_key_id", &self.access_key_id),
            ("secret_key", &self.secret_key),
            ("merchant_id", &self.merchant_id),
        ] {
            if value.is_empty() {
                return Err(Error::validation(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
