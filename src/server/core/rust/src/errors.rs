/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Error surfaced to HTTP callers as `{ "error": message }` with `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoosiError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "CONFIGURATION_ERROR" | "DELIVERY_ERROR" | "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl NoosiError {
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  /// Missing server setup. The public message stays generic; details belong in the log.
  pub fn configuration() -> Self {
    Self::with_code("CONFIGURATION_ERROR", "Email delivery is not configured on the server")
  }

  pub fn delivery(msg: impl Into<String>) -> Self {
    Self::with_code("DELIVERY_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  /// Wire body shared by every failing endpoint.
  pub fn to_body(&self) -> serde_json::Value {
    serde_json::json!({ "error": self.message })
  }
}

impl fmt::Display for NoosiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for NoosiError {}
