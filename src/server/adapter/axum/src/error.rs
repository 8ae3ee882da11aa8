/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noosi_server::NoosiError;

/// Newtype wrapper to implement `IntoResponse` for `NoosiError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for NoosiError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub NoosiError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, axum::Json(err.to_body())).into_response()
  }
}

impl From<NoosiError> for AxumError {
  fn from(err: NoosiError) -> Self {
    Self(err)
  }
}
