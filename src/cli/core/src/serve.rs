/* src/cli/core/src/serve.rs */

use std::sync::Arc;

use anyhow::{Context, Result};
use noosi_server::{ContactService, Locale, Mailer, NoosiServer, TranslationStore};
use noosi_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;

use crate::config::{API_KEY_ENV, NoosiConfig};
use crate::mailer::ResendMailer;
use crate::ui;

/// Assemble the site router: contact endpoint, translation tables, static files.
pub fn build_app(config: &NoosiConfig) -> Result<axum::Router> {
  let mailer = ResendMailer::new(config.api_key.clone(), &config.mail)?;
  if !mailer.is_configured() {
    ui::warn(&format!("{API_KEY_ENV} is not set -- contact submissions will be refused"));
  }
  let contact = ContactService::new(Arc::new(mailer), config.contact.clone());
  let translations = TranslationStore::new(&config.server.translations_dir);

  for locale in Locale::ALL {
    match translations.load(locale) {
      Ok(table) if table.is_empty() => ui::warn(&format!(
        "{locale}.json in {} has no strings",
        translations.dir().display()
      )),
      Ok(table) => ui::detail(&format!("{locale}: {} strings", table.len())),
      Err(e) => ui::warn(&format!("{e} -- clients will show raw keys")),
    }
  }

  let mut router =
    NoosiServer::new().contact(contact).translations(translations).into_axum_router();
  if let Some(dir) = &config.server.public_dir {
    ui::detail(&format!("static files from {}", dir.display()));
    router = router.fallback_service(ServeDir::new(dir));
  }
  Ok(router)
}

pub async fn run_serve(config: &NoosiConfig) -> Result<()> {
  let router = build_app(config)?;
  let addr = format!("{}:{}", config.server.host, config.server.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local = listener.local_addr().context("failed to read bound address")?;

  ui::ok(&format!("listening on http://{local}"));
  ui::detail("press Ctrl-C to stop");
  log::info!("serving on {local}");

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;
  ui::ok("stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    log::error!("failed to listen for Ctrl-C: {e}");
    std::future::pending::<()>().await;
  }
  log::info!("shutdown requested");
}
