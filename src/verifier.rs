use crate::{
    crypto::{compute_signature, keyed_mac, CryptoError, HmacSha256, SecretKey},
    models::StatusResponse,
};

/// Maximum age of a message, in seconds.
pub const ALLOWED_DELAY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Ok(String),
    InvalidSignature,
    Timeout,
    FutureRequest,
}

impl VerificationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok(message) => write!(f, "OK: {}", message),
            Self::InvalidSignature => f.write_str("Invalid signature"),
            Self::Timeout => f.write_str("Timeout"),
            Self::FutureRequest => f.write_str("Request sent in the future"),
        }
    }
}

impl From<VerificationResult> for StatusResponse {
    fn from(value: VerificationResult) -> Self {
        StatusResponse::new(value.to_string())
    }
}

/// Checks message signatures and freshness against a shared secret key.
///
/// The keyed MAC is built once; each computation works on its own clone,
/// so a verifier can be shared between concurrent requests.
#[derive(Clone)]
pub struct SignatureVerifier {
    mac: HmacSha256,
}

impl SignatureVerifier {
    pub fn new(key: SecretKey) -> Result<Self, CryptoError> {
        Ok(Self {
            mac: keyed_mac(&key)?,
        })
    }

    /// Signature expected for a message sent at `timestamp`.
    pub fn sign(&self, message: &str, timestamp: i64) -> String {
        compute_signature(&self.mac, message, timestamp)
    }

    pub fn verify(
        &self,
        message: &str,
        timestamp: i64,
        claimed_signature: &str,
        now: i64,
    ) -> VerificationResult {
        let expected_signature = self.sign(message, timestamp);
        if claimed_signature != expected_signature {
            tracing::info!(
                expected = %expected_signature,
                actual = %claimed_signature,
                "Signature mismatch"
            );
            return VerificationResult::InvalidSignature;
        }

        let delta = now.saturating_sub(timestamp);
        tracing::info!(now = now, delta = delta, "Signature matches, checking time");

        let result = if delta > ALLOWED_DELAY {
            tracing::info!(timestamp = timestamp, now = now, "Request timed out");
            VerificationResult::Timeout
        } else if delta < 0 {
            tracing::info!(timestamp = timestamp, now = now, "Request sent in the future");
            VerificationResult::FutureRequest
        } else {
            VerificationResult::Ok(message.to_owned())
        };

        tracing::info!(result = %result, "Verification done");
        result
    }
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("algorithm", &"HMAC-SHA256")
            .finish_non_exhaustive()
    }
}
