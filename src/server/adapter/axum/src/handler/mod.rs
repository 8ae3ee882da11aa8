/* src/server/adapter/axum/src/handler/mod.rs */

mod contact;
mod locale;
mod translations;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use noosi_server::resolve::ResolveStrategy;
use noosi_server::{ContactService, NoosiParts, TranslationStore};

pub(crate) struct AppState {
  pub contact: Option<ContactService>,
  pub translations: Option<TranslationStore>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
}

pub(crate) fn build_router(parts: NoosiParts) -> Router {
  let mut router = Router::new().route("/api/locale", get(locale::handle_locale));

  // Routes for unregistered components are left out so they fall through to 404.
  if parts.contact.is_some() {
    router = router.route("/api/contact", post(contact::handle_contact));
  }
  if parts.translations.is_some() {
    router = router.route("/translations/{file}", get(translations::handle_translations));
  }

  let state = Arc::new(AppState {
    contact: parts.contact,
    translations: parts.translations,
    strategies: parts.strategies,
  });

  router.with_state(state)
}
