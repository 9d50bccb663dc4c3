use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    crypto::{CryptoError, SecretKey},
    verifier::SignatureVerifier,
};

#[derive(Debug, Clone)]
pub struct ServiceHandler {
    verifier: Arc<SignatureVerifier>,
    clock: Arc<dyn Clock>,
}

impl ServiceHandler {
    pub fn new(verifier: SignatureVerifier, clock: Arc<dyn Clock>) -> Self {
        Self {
            verifier: Arc::new(verifier),
            clock,
        }
    }

    /// Build services from configuration, with the system clock.
    ///
    /// Fails when no usable secret key is configured.
    pub fn from_config(config: &Config) -> Result<Self, CryptoError> {
        let key = SecretKey::from(config.secret_key().unwrap_or_default());

        Ok(Self::new(
            SignatureVerifier::new(key)?,
            Arc::new(SystemClock::new()),
        ))
    }

    pub fn verifier(&self) -> &SignatureVerifier {
        self.verifier.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
