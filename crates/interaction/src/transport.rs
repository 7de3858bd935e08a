use async_trait::async_trait;
use careweave_contact::{Acknowledgment, SubmitFormInput};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The handler answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Delivers one submission to whatever acknowledges it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, form: &SubmitFormInput) -> Result<Acknowledgment, TransportError>;
}

/// Acknowledges locally without leaving the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulated;

#[async_trait]
impl Transport for Simulated {
    async fn send(&self, _form: &SubmitFormInput) -> Result<Acknowledgment, TransportError> {
        Ok(Acknowledgment::default())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Posts the form as JSON to the contact endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, form: &SubmitFormInput) -> Result<Acknowledgment, TransportError> {
        let response = self.client.post(&self.endpoint).json(form).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Acknowledgment>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("unexpected status {status}"),
        };

        tracing::warn!(%status, %message, "contact submission rejected");

        Err(TransportError::Rejected(message))
    }
}
