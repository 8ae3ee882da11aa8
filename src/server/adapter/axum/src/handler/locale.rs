/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Uri, header};
use noosi_server::{Locale, ResolveData, resolve_chain};
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub(super) struct LocaleInfo {
  locale: Locale,
  available: Vec<Locale>,
}

/// `GET /api/locale`: detect the locale from `?lang=` and `Accept-Language`.
pub(super) async fn handle_locale(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> axum::Json<LocaleInfo> {
  let data = ResolveData {
    query: uri.query(),
    language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
  };
  let locale = resolve_chain(&state.strategies, &data);
  axum::Json(LocaleInfo { locale, available: Locale::ALL.to_vec() })
}
