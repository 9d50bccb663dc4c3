use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

pub type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Empty secret key. Make sure a non-empty key is configured.")]
    EmptyKey,
    #[error("Secret key could not be used to initialize HMAC-SHA256.")]
    InvalidKeyLength,
}

/// Shared secret used to sign and verify messages.
///
/// The key bytes never appear in `Debug` output.
#[derive(Clone)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn new<T: Into<Vec<u8>>>(bytes: T) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Build a keyed MAC, ready to be cloned for each computation.
pub fn keyed_mac(key: &SecretKey) -> Result<HmacSha256, CryptoError> {
    if key.as_bytes().is_empty() {
        return Err(CryptoError::EmptyKey);
    }

    HmacSha256::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::InvalidKeyLength)
}

/// Message immediately followed by the decimal timestamp, without separator.
pub fn canonical_input(message: &str, timestamp: i64) -> String {
    format!("{}{}", message, timestamp)
}

pub fn compute_signature(mac: &HmacSha256, message: &str, timestamp: i64) -> String {
    let mut mac = mac.clone();
    mac.update(canonical_input(message, timestamp).as_bytes());

    hex::encode(mac.finalize().into_bytes())
}
