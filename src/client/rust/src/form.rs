/* src/client/rust/src/form.rs */

use std::time::Duration;

use noosi_server::ContactMessage;
use serde::Deserialize;
use tokio::time::Instant;

use crate::transport::{ContactTransport, TransportError, TransportResponse};

/// How long the success notice stays visible.
pub const SUCCESS_NOTICE: Duration = Duration::from_secs(6);

/// Shown when the server could not be reached at all.
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
  /// The server answered with an error; the text is its reason.
  Rejected(String),
  Network,
}

impl FailureReason {
  pub fn message(&self) -> &str {
    match self {
      FailureReason::Rejected(reason) => reason,
      FailureReason::Network => NETWORK_ERROR,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
  Idle,
  Submitting,
  Succeeded { id: Option<String>, since: Instant },
  /// Behaves like `Idle` with an inline notice; fields are kept for a retry.
  Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
  Pending,
  Succeeded(Option<String>),
  Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
  #[error("all fields must be filled in")]
  MissingFields,
  #[error("a submission is already in flight")]
  InFlight,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

#[derive(Deserialize)]
struct SuccessBody {
  #[serde(default)]
  id: Option<String>,
}

/// Client side of the contact pipeline: `Idle -> Submitting -> Succeeded | Failed -> Idle`.
#[derive(Debug, Clone)]
pub struct ContactForm {
  pub name: String,
  pub email: String,
  pub message: String,
  status: FormStatus,
}

impl Default for ContactForm {
  fn default() -> Self {
    Self::new()
  }
}

impl ContactForm {
  pub fn new() -> Self {
    Self {
      name: String::new(),
      email: String::new(),
      message: String::new(),
      status: FormStatus::Idle,
    }
  }

  pub fn status(&self) -> &FormStatus {
    &self.status
  }

  /// Whether the submit button is enabled.
  pub fn can_submit(&self) -> bool {
    self.status != FormStatus::Submitting
  }

  pub fn outcome(&self) -> Option<SubmissionOutcome> {
    match &self.status {
      FormStatus::Idle => None,
      FormStatus::Submitting => Some(SubmissionOutcome::Pending),
      FormStatus::Succeeded { id, .. } => Some(SubmissionOutcome::Succeeded(id.clone())),
      FormStatus::Failed(reason) => Some(SubmissionOutcome::Failed(reason.message().to_string())),
    }
  }

  /// Enter `Submitting` and hand out the message to send.
  pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
    if !self.can_submit() {
      return Err(SubmitBlocked::InFlight);
    }
    if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
      return Err(SubmitBlocked::MissingFields);
    }
    self.status = FormStatus::Submitting;
    Ok(ContactMessage {
      name: self.name.clone(),
      email: self.email.clone(),
      message: self.message.clone(),
    })
  }

  /// Apply the server's answer (or the lack of one) to the form.
  pub fn finish(
    &mut self,
    result: Result<TransportResponse, TransportError>,
    now: Instant,
  ) -> SubmissionOutcome {
    self.status = match result {
      Ok(resp) if resp.is_success() => {
        let id = serde_json::from_str::<SuccessBody>(&resp.body).ok().and_then(|b| b.id);
        self.name.clear();
        self.email.clear();
        self.message.clear();
        FormStatus::Succeeded { id, since: now }
      }
      Ok(resp) => FormStatus::Failed(FailureReason::Rejected(rejection_reason(&resp))),
      Err(e) => {
        log::warn!("contact form submission failed: {e}");
        FormStatus::Failed(FailureReason::Network)
      }
    };
    self.outcome().unwrap_or(SubmissionOutcome::Pending)
  }

  /// Hide the success notice once it has been shown for `SUCCESS_NOTICE`.
  pub fn expire_notice(&mut self, now: Instant) -> bool {
    match self.status {
      FormStatus::Succeeded { since, .. }
        if now.saturating_duration_since(since) >= SUCCESS_NOTICE =>
      {
        self.status = FormStatus::Idle;
        true
      }
      _ => false,
    }
  }

  /// Wait until the success notice is due to disappear, then return to `Idle`.
  ///
  /// Returns `false` immediately when no success notice is showing.
  pub async fn await_notice_expiry(&mut self) -> bool {
    let FormStatus::Succeeded { since, .. } = self.status else {
      return false;
    };
    tokio::time::sleep_until(since + SUCCESS_NOTICE).await;
    self.expire_notice(Instant::now())
  }

  pub async fn submit<T: ContactTransport + ?Sized>(
    &mut self,
    transport: &T,
  ) -> Result<SubmissionOutcome, SubmitBlocked> {
    let message = self.begin_submit()?;
    let result = transport.post(&message).await;
    Ok(self.finish(result, Instant::now()))
  }
}

/// `{ "error": ... }` when the body has one, the raw body otherwise.
fn rejection_reason(resp: &TransportResponse) -> String {
  if let Ok(body) = serde_json::from_str::<ErrorBody>(&resp.body) {
    return body.error;
  }
  if resp.body.trim().is_empty() {
    return format!("HTTP {}", resp.status);
  }
  resp.body.clone()
}
