/* src/client/rust/src/transport.rs */

use std::time::Duration;

use noosi_server::{BoxFuture, ContactMessage};

pub const POST_TIMEOUT: Duration = Duration::from_secs(15);

/// Any HTTP answer, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
  pub status: u16,
  pub body: String,
}

impl TransportResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// No response arrived at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not reach the server: {0}")]
pub struct TransportError(pub String);

pub trait ContactTransport: Send + Sync {
  fn post(&self, message: &ContactMessage) -> BoxFuture<Result<TransportResponse, TransportError>>;
}

/// Posts JSON to `{base}/api/contact`.
#[derive(Clone)]
pub struct HttpContactTransport {
  endpoint: String,
  client: reqwest::Client,
}

impl HttpContactTransport {
  pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(POST_TIMEOUT).build()?;
    Ok(Self::with_client(base_url, client))
  }

  pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
    Self { endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')), client }
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

impl ContactTransport for HttpContactTransport {
  fn post(&self, message: &ContactMessage) -> BoxFuture<Result<TransportResponse, TransportError>> {
    let req = self.client.post(&self.endpoint).json(message);
    Box::pin(async move {
      let resp = req.send().await.map_err(|e| TransportError(e.to_string()))?;
      let status = resp.status().as_u16();
      let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
      Ok(TransportResponse { status, body })
    })
  }
}
