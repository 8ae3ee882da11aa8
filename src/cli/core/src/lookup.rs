/* src/cli/core/src/lookup.rs */

use anyhow::{Context, Result};
use noosi_client::{HttpTableSource, LoadOutcome, Resolver};
use noosi_server::{Locale, Lookup, ResolveData};

use crate::ui::{self, DIM, RESET};

/// Resolve `keys` against a running site, the way a visitor's page would.
///
/// Without `--lang` the locale comes from the `LANG` environment variable
/// (`fi_FI.UTF-8` selects Finnish, anything else English, unset the default).
pub async fn run_lookup(base_url: &str, keys: &[String], lang: Option<Locale>) -> Result<()> {
  let source = HttpTableSource::new(base_url).context("failed to build HTTP client")?;
  let resolver = Resolver::new(source);

  let outcome = match lang {
    Some(locale) => resolver.switch(locale).await,
    None => {
      let language = std::env::var("LANG").ok();
      let data = ResolveData { query: None, language: language.as_deref() };
      resolver.detect_and_load(&data).await
    }
  };

  let locale = resolver.locale();
  if outcome == (LoadOutcome::Applied { loaded: false }) {
    ui::warn(&format!("{locale} translations could not be loaded from {base_url}"));
  } else {
    ui::arrow(&format!("{locale} from {base_url}"));
  }

  let state = resolver.snapshot();
  for key in keys {
    match state.lookup(key) {
      Lookup::Found(text) => ui::ok(&format!("{key} = {text}")),
      Lookup::Missing(miss) => ui::fail(&format!("{key} {DIM}({miss:?}, shown as key){RESET}")),
    }
  }
  Ok(())
}
