use std::time::Duration;

use thiserror::Error;

use crate::{
    models::{SignedMessage, StatusResponse},
    server_info::{APP_NAME, APP_VERSION},
    verifier::SignatureVerifier,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("error while building HTTP client.")]
    CouldNotBuildClient(#[source] reqwest::Error),

    #[error("error while sending signed message.")]
    CouldNotSend(#[source] reqwest::Error),

    #[error("error code received from server.")]
    BadStatusCode(#[source] reqwest::Error),

    #[error("error while parsing server response.")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Signs messages and submits them to a verification server.
pub struct Client {
    url: String,
}

impl Client {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self { url: url.into() }
    }

    fn create_client(&self) -> Result<reqwest::Client, ClientError> {
        reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("{APP_NAME}/{APP_VERSION}"))
            .build()
            .map_err(ClientError::CouldNotBuildClient)
    }

    #[tracing::instrument(skip(self, verifier))]
    pub async fn send(
        &self,
        verifier: &SignatureVerifier,
        message: &str,
        timestamp: i64,
    ) -> Result<StatusResponse, ClientError> {
        let data = SignedMessage {
            message: message.to_owned(),
            timestamp,
            signature: verifier.sign(message, timestamp),
        };

        let resp = self
            .create_client()?
            .post(&self.url)
            .json(&data)
            .send()
            .await
            .map_err(ClientError::CouldNotSend)?;

        let response: StatusResponse = resp
            .error_for_status()
            .map_err(ClientError::BadStatusCode)?
            .json()
            .await
            .map_err(ClientError::MalformedResponse)?;

        tracing::info!(
            status = %response.status,
            message = "Server answered",
            url = %self.url
        );

        Ok(response)
    }
}
