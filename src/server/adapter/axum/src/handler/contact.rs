/* src/server/adapter/axum/src/handler/contact.rs */

use std::sync::Arc;

use axum::extract::State;
use noosi_server::{ContactReply, NoosiError};

use super::AppState;
use crate::error::AxumError;

/// `POST /api/contact`. The body is taken as raw bytes so a malformed payload
/// becomes a structured 500 instead of an extractor rejection.
pub(super) async fn handle_contact(
  State(state): State<Arc<AppState>>,
  body: axum::body::Bytes,
) -> Result<axum::Json<ContactReply>, AxumError> {
  let service =
    state.contact.clone().ok_or_else(|| NoosiError::not_found("Contact form is not enabled"))?;

  // Run on its own task so a panicking mailer still yields a JSON response.
  let reply = tokio::spawn(async move { service.submit(&body).await })
    .await
    .map_err(|e| {
      log::error!("contact handler task failed: {e}");
      NoosiError::internal("Internal server error")
    })? // JoinError -> Internal (task panic)
    ?; // NoosiError propagates unchanged
  Ok(axum::Json(reply))
}
