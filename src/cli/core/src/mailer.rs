/* src/cli/core/src/mailer.rs */

// Resend-compatible delivery: POST the outbound mail as JSON with bearer auth.

use std::time::Duration;

use anyhow::{Context, Result};
use noosi_server::{BoxFuture, DeliveryError, Mailer, OutboundEmail, SendReceipt};
use serde::Deserialize;

use crate::config::MailSection;

#[derive(Deserialize)]
struct Accepted {
  #[serde(default)]
  id: Option<String>,
}

#[derive(Deserialize)]
struct Rejected {
  #[serde(default)]
  message: Option<String>,
}

pub struct ResendMailer {
  api_key: Option<String>,
  endpoint: String,
  client: reqwest::Client,
}

impl ResendMailer {
  pub fn new(api_key: Option<String>, mail: &MailSection) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(mail.timeout_secs))
      .build()
      .context("failed to build mail client")?;
    Ok(Self { api_key, endpoint: mail.endpoint.clone(), client })
  }
}

impl Mailer for ResendMailer {
  fn is_configured(&self) -> bool {
    self.api_key.is_some()
  }

  fn send(&self, email: OutboundEmail) -> BoxFuture<Result<SendReceipt, DeliveryError>> {
    let Some(key) = self.api_key.as_deref() else {
      return Box::pin(async { Err(DeliveryError::new("mail provider API key is not set")) });
    };
    let req = self.client.post(&self.endpoint).bearer_auth(key).json(&email);
    Box::pin(async move {
      let resp = req.send().await.map_err(|e| DeliveryError::new(e.to_string()))?;
      let status = resp.status();
      let body = resp.bytes().await.map_err(|e| DeliveryError::new(e.to_string()))?;
      if status.is_success() {
        let id = serde_json::from_slice::<Accepted>(&body).ok().and_then(|a| a.id);
        log::info!("contact mail accepted by provider (id {})", id.as_deref().unwrap_or("-"));
        return Ok(SendReceipt { id });
      }
      log::warn!("mail provider answered HTTP {status}");
      let message = serde_json::from_slice::<Rejected>(&body).ok().and_then(|r| r.message);
      Err(DeliveryError { message })
    })
  }
}
