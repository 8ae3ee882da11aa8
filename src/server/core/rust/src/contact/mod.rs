/* src/server/core/rust/src/contact/mod.rs */

mod email;
mod mailer;


use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::NoosiError;

pub use email::{Mailbox, OutboundEmail, render_email};
pub use mailer::{BoxFuture, DeliveryError, Mailer, SendReceipt};

pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const SEND_FAILED: &str = "Failed to send email";
pub const SENT: &str = "Email sent successfully";

/// Request body as received. `null` and absent fields are both `None`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactPayload {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

/// A submission with every field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
  pub name: String,
  pub email: String,
  pub message: String,
}

impl ContactPayload {
  /// Parse a request body. Only an object carries fields: arrays, strings and
  /// numbers yield an empty payload that fails validation, while `null` and
  /// invalid JSON are unreadable.
  pub fn from_json(body: &[u8]) -> Result<Self, NoosiError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(unreadable)?;
    match value {
      serde_json::Value::Object(_) => serde_json::from_value(value).map_err(unreadable),
      serde_json::Value::Null => {
        log::warn!("contact form body was null");
        Err(NoosiError::internal("Invalid request body: expected a JSON object"))
      }
      _ => Ok(Self::default()),
    }
  }

  /// Presence check only; the email address is not checked for shape.
  pub fn validate(self) -> Result<ContactMessage, NoosiError> {
    fn present(field: Option<String>) -> Option<String> {
      field.filter(|v| !v.is_empty())
    }
    match (present(self.name), present(self.email), present(self.message)) {
      (Some(name), Some(email), Some(message)) => Ok(ContactMessage { name, email, message }),
      _ => Err(NoosiError::validation(FIELDS_REQUIRED)),
    }
  }
}

fn unreadable(e: serde_json::Error) -> NoosiError {
  log::warn!("contact form body could not be parsed: {e}");
  NoosiError::internal(format!("Invalid request body: {e}"))
}

/// Success body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
}

impl ContactReply {
  pub fn sent(id: Option<String>) -> Self {
    Self { message: SENT.to_string(), id }
  }
}

/// Server half of the contact pipeline. Stateless per request.
#[derive(Clone)]
pub struct ContactService {
  mailer: Arc<dyn Mailer>,
  mailbox: Mailbox,
}

impl ContactService {
  pub fn new(mailer: Arc<dyn Mailer>, mailbox: Mailbox) -> Self {
    Self { mailer, mailbox }
  }

  pub fn mailbox(&self) -> &Mailbox {
    &self.mailbox
  }

  /// Handle one raw request body. Every failure comes back as a `NoosiError`
  /// carrying the status and message for the caller.
  pub async fn submit(&self, body: &[u8]) -> Result<ContactReply, NoosiError> {
    if !self.mailer.is_configured() {
      log::error!("contact form rejected: mail delivery credential is not configured");
      return Err(NoosiError::configuration());
    }

    let msg = ContactPayload::from_json(body)?.validate()?;

    let email = render_email(&msg, &self.mailbox);
    match self.mailer.send(email).await {
      Ok(receipt) => {
        log::info!("contact mail sent (id: {})", receipt.id.as_deref().unwrap_or("-"));
        Ok(ContactReply::sent(receipt.id))
      }
      Err(e) => {
        log::error!("contact mail delivery failed: {e}");
        let message =
          e.message.filter(|m| !m.is_empty()).unwrap_or_else(|| SEND_FAILED.to_string());
        Err(NoosiError::delivery(message))
      }
    }
  }
}
