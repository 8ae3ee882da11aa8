/* src/server/core/rust/src/contact/mailer.rs */

use std::future::Future;
use std::pin::Pin;

use super::email::OutboundEmail;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Identifier the delivery provider assigned to an accepted mail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
  pub id: Option<String>,
}

/// The provider refused or failed the send. `message` is the provider's own
/// explanation when it gave one.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("mail delivery failed"))]
pub struct DeliveryError {
  pub message: Option<String>,
}

impl DeliveryError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: Some(message.into()) }
  }

  pub fn unexplained() -> Self {
    Self { message: None }
  }
}

/// External send-mail capability.
pub trait Mailer: Send + Sync {
  /// Whether the provider credential is present. Checked before any payload handling.
  fn is_configured(&self) -> bool;

  fn send(&self, email: OutboundEmail) -> BoxFuture<Result<SendReceipt, DeliveryError>>;
}
