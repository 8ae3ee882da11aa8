/* src/server/adapter/axum/src/handler/translations.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use noosi_server::{Locale, NoosiError, TranslationError};

use super::AppState;
use crate::error::AxumError;

/// `GET /translations/{locale}.json`. Served with `no-store` so clients
/// always see the current content.
pub(super) async fn handle_translations(
  State(state): State<Arc<AppState>>,
  Path(file): Path<String>,
) -> Result<Response, AxumError> {
  let locale = file
    .strip_suffix(".json")
    .and_then(|code| code.parse::<Locale>().ok())
    .ok_or_else(|| NoosiError::not_found(format!("No translations for '{file}'")))?;

  let store = state
    .translations
    .clone()
    .ok_or_else(|| NoosiError::not_found("Translations are not enabled"))?;

  let bytes = tokio::task::spawn_blocking(move || store.load_raw(locale))
    .await
    .map_err(|e| NoosiError::internal(e.to_string()))?
    .map_err(|e| match e {
      TranslationError::Missing { .. } => {
        NoosiError::not_found(format!("No translations for '{locale}'"))
      }
      other => {
        log::error!("failed to serve translations: {other}");
        NoosiError::internal("Failed to load translations")
      }
    })?;

  let headers = [
    (header::CONTENT_TYPE, "application/json; charset=utf-8"),
    (header::CACHE_CONTROL, "no-store"),
  ];
  Ok((headers, bytes).into_response())
}
