/* src/client/rust/src/resolver.rs */

use std::sync::Arc;

use noosi_server::{Locale, Lookup, ResolveData, StringTable, detect_locale, lookup_in};
use tokio::sync::watch;

use crate::address::with_locale;
use crate::source::TableSource;

/// Per-session locale state. Cheap to clone: the table is shared.
#[derive(Debug, Clone)]
pub struct ResolverState {
  pub locale: Locale,
  /// Absent while loading, and after a failed load.
  pub table: Option<Arc<StringTable>>,
  /// False from a locale change until its load settles, successfully or not.
  pub is_ready: bool,
  /// Page address kept in step with `locale` through its `lang` parameter.
  pub address: Option<String>,
  generation: u64,
}

impl ResolverState {
  fn initial() -> Self {
    Self { locale: Locale::DEFAULT, table: None, is_ready: false, address: None, generation: 0 }
  }

  pub fn lookup(&self, key: &str) -> Lookup<'_> {
    lookup_in(self.table.as_deref(), key)
  }

  /// Display text for `key`, or `key` itself when it cannot be resolved.
  pub fn t(&self, key: &str) -> String {
    self.lookup(key).or_key(key)
  }
}

/// Ticket for a table load started by `Resolver::begin_switch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
  pub locale: Locale,
  generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
  /// The result was installed; `loaded` is false when the fetch failed.
  Applied { loaded: bool },
  /// A newer locale change happened first; the result was discarded.
  Superseded,
}

/// Owns the active locale, its string table and the load lifecycle.
///
/// State is published through a `watch` channel so views can re-render when
/// `is_ready` flips. Every locale change bumps a generation counter and a load
/// only installs its table if no newer change happened meanwhile.
pub struct Resolver<S> {
  source: S,
  state: watch::Sender<ResolverState>,
}

impl<S: TableSource> Resolver<S> {
  pub fn new(source: S) -> Self {
    let (state, _) = watch::channel(ResolverState::initial());
    Self { source, state }
  }

  /// Track `address`; every locale change rewrites its `lang` parameter.
  pub fn with_address(self, address: impl Into<String>) -> Self {
    let address = address.into();
    self.state.send_modify(|s| s.address = Some(address));
    self
  }

  pub fn subscribe(&self) -> watch::Receiver<ResolverState> {
    self.state.subscribe()
  }

  pub fn snapshot(&self) -> ResolverState {
    self.state.borrow().clone()
  }

  pub fn locale(&self) -> Locale {
    self.state.borrow().locale
  }

  pub fn is_ready(&self) -> bool {
    self.state.borrow().is_ready
  }

  pub fn t(&self, key: &str) -> String {
    self.state.borrow().t(key)
  }

  /// Switch locale now: the table is dropped and `is_ready` cleared before this returns.
  pub fn begin_switch(&self, locale: Locale) -> PendingLoad {
    let mut generation = 0;
    self.state.send_modify(|s| {
      s.generation += 1;
      s.locale = locale;
      s.table = None;
      s.is_ready = false;
      s.address = s.address.as_deref().map(|a| with_locale(a, locale));
      generation = s.generation;
    });
    PendingLoad { locale, generation }
  }

  /// Fetch the table for `pending` and install it unless superseded.
  pub async fn complete(&self, pending: PendingLoad) -> LoadOutcome {
    let table = match self.source.fetch(pending.locale).await {
      Ok(table) => Some(Arc::new(table)),
      Err(e) => {
        log::warn!("failed to load {} translations: {e}", pending.locale);
        None
      }
    };
    let loaded = table.is_some();

    let applied = self.state.send_if_modified(|s| {
      if s.generation != pending.generation {
        return false;
      }
      s.table = table;
      s.is_ready = true;
      true
    });

    if applied {
      LoadOutcome::Applied { loaded }
    } else {
      log::debug!("discarded stale {} translations", pending.locale);
      LoadOutcome::Superseded
    }
  }

  pub async fn switch(&self, locale: Locale) -> LoadOutcome {
    let pending = self.begin_switch(locale);
    self.complete(pending).await
  }

  /// Initial determination: address override, then language preference, then the default.
  pub async fn detect_and_load(&self, data: &ResolveData<'_>) -> LoadOutcome {
    self.switch(detect_locale(data)).await
  }

  /// The tracked address, naming the active locale once a switch has happened.
  pub fn shareable_address(&self) -> Option<String> {
    self.state.borrow().address.clone()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use std::sync::Mutex;

  use noosi_server::{BoxFuture, Miss, TableError};
  use tokio::sync::oneshot;

  use super::*;
  use crate::source::FetchError;

  fn table(title: &str) -> StringTable {
    let json = serde_json::json!({ "hero": { "title": title } }).to_string();
    StringTable::from_json(json.as_bytes()).unwrap()
  }

  /// Answers immediately from a fixed map; missing locales fail.
  struct StaticSource(HashMap<Locale, StringTable>);

  impl StaticSource {
    fn both() -> Self {
      Self(HashMap::from([(Locale::Fi, table("Tervetuloa")), (Locale::En, table("Welcome"))]))
    }
  }

  impl TableSource for StaticSource {
    fn fetch(&self, locale: Locale) -> BoxFuture<Result<StringTable, FetchError>> {
      let result = self.0.get(&locale).cloned().ok_or(FetchError::Status(404));
      Box::pin(async move { result })
    }
  }

  /// Each fetch waits until the test releases it through a oneshot channel.
  #[derive(Default)]
  struct GatedSource {
    gates: Mutex<HashMap<Locale, Vec<oneshot::Receiver<Result<StringTable, FetchError>>>>>,
  }

  impl GatedSource {
    fn gate(&self, locale: Locale) -> oneshot::Sender<Result<StringTable, FetchError>> {
      let (tx, rx) = oneshot::channel();
      self.gates.lock().unwrap().entry(locale).or_default().push(rx);
      tx
    }
  }

  impl TableSource for GatedSource {
    fn fetch(&self, locale: Locale) -> BoxFuture<Result<StringTable, FetchError>> {
      let rx = self.gates.lock().unwrap().get_mut(&locale).and_then(|v| v.pop());
      Box::pin(async move {
        match rx {
          Some(rx) => rx.await.unwrap_or(Err(FetchError::Status(499))),
          None => Err(FetchError::Status(404)),
        }
      })
    }
  }

  #[test]
  fn starts_provisional_and_unloaded() {
    let resolver = Resolver::new(StaticSource::both());
    let state = resolver.snapshot();
    assert_eq!(state.locale, Locale::Fi);
    assert!(!state.is_ready);
    assert!(state.table.is_none());
    assert_eq!(state.lookup("hero.title"), Lookup::Missing(Miss::NoTable));
    assert_eq!(resolver.t("hero.title"), "hero.title");
  }

  #[tokio::test]
  async fn resolves_text_of_active_locale() {
    let resolver = Resolver::new(StaticSource::both());
    assert_eq!(resolver.switch(Locale::En).await, LoadOutcome::Applied { loaded: true });
    assert_eq!(resolver.t("hero.title"), "Welcome");
    resolver.switch(Locale::Fi).await;
    assert_eq!(resolver.t("hero.title"), "Tervetuloa");
    assert_eq!(resolver.t("hero.subtitle"), "hero.subtitle");
  }

  #[tokio::test]
  async fn switch_clears_ready_until_load_settles() {
    let source = GatedSource::default();
    let en_gate = source.gate(Locale::En);
    let resolver = Arc::new(Resolver::new(source));

    let pending = resolver.begin_switch(Locale::En);
    assert_eq!(resolver.locale(), Locale::En);
    assert!(!resolver.is_ready());
    assert!(resolver.snapshot().table.is_none());

    let r = resolver.clone();
    let load = tokio::spawn(async move { r.complete(pending).await });
    en_gate.send(Ok(table("Welcome"))).unwrap();
    assert_eq!(load.await.unwrap(), LoadOutcome::Applied { loaded: true });
    assert!(resolver.is_ready());
  }

  #[tokio::test]
  async fn failed_load_is_ready_without_table() {
    let resolver = Resolver::new(StaticSource(HashMap::new()));
    assert_eq!(resolver.switch(Locale::En).await, LoadOutcome::Applied { loaded: false });
    let state = resolver.snapshot();
    assert!(state.is_ready);
    assert!(state.table.is_none());
    assert_eq!(state.t("hero.title"), "hero.title");
  }

  #[tokio::test]
  async fn malformed_table_degrades_to_keys() {
    let source = GatedSource::default();
    let gate = source.gate(Locale::Fi);
    let resolver = Arc::new(Resolver::new(source));
    let pending = resolver.begin_switch(Locale::Fi);
    gate.send(Err(FetchError::Malformed(TableError::NotAnObject))).unwrap();
    assert_eq!(resolver.complete(pending).await, LoadOutcome::Applied { loaded: false });
    assert!(resolver.is_ready());
    assert_eq!(resolver.t("hero.title"), "hero.title");
  }

  #[tokio::test]
  async fn stale_response_never_overwrites_newer_locale() {
    let source = GatedSource::default();
    let fi_gate = source.gate(Locale::Fi);
    let en_gate = source.gate(Locale::En);
    let resolver = Arc::new(Resolver::new(source));

    let first = resolver.begin_switch(Locale::Fi);
    let second = resolver.begin_switch(Locale::En);

    let r = resolver.clone();
    let stale = tokio::spawn(async move { r.complete(first).await });
    let r = resolver.clone();
    let fresh = tokio::spawn(async move { r.complete(second).await });

    // The newer request finishes first, the older one afterwards.
    en_gate.send(Ok(table("Welcome"))).unwrap();
    assert_eq!(fresh.await.unwrap(), LoadOutcome::Applied { loaded: true });
    fi_gate.send(Ok(table("Tervetuloa"))).unwrap();
    assert_eq!(stale.await.unwrap(), LoadOutcome::Superseded);

    assert_eq!(resolver.locale(), Locale::En);
    assert_eq!(resolver.t("hero.title"), "Welcome");
  }

  #[tokio::test]
  async fn stale_response_before_newer_one_is_discarded() {
    let source = GatedSource::default();
    let fi_gate = source.gate(Locale::Fi);
    let en_gate = source.gate(Locale::En);
    let resolver = Arc::new(Resolver::new(source));

    let first = resolver.begin_switch(Locale::Fi);
    let second = resolver.begin_switch(Locale::En);

    fi_gate.send(Ok(table("Tervetuloa"))).unwrap();
    assert_eq!(resolver.complete(first).await, LoadOutcome::Superseded);
    assert!(!resolver.is_ready());
    assert!(resolver.snapshot().table.is_none());

    en_gate.send(Ok(table("Welcome"))).unwrap();
    resolver.complete(second).await;
    assert_eq!(resolver.t("hero.title"), "Welcome");
  }

  #[tokio::test]
  async fn subscribers_observe_ready_flip() {
    let resolver = Resolver::new(StaticSource::both());
    let mut rx = resolver.subscribe();
    resolver.switch(Locale::En).await;
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_ready);
  }

  #[tokio::test]
  async fn detection_prefers_address_override() {
    let resolver = Resolver::new(StaticSource::both()).with_address("/?lang=en#gallery");
    let data = ResolveData { query: Some("lang=en"), language: Some("fi-FI") };
    resolver.detect_and_load(&data).await;
    assert_eq!(resolver.locale(), Locale::En);
    assert_eq!(resolver.shareable_address().as_deref(), Some("/?lang=en#gallery"));

    resolver.detect_and_load(&ResolveData::default()).await;
    assert_eq!(resolver.locale(), Locale::Fi);
    assert_eq!(resolver.shareable_address().as_deref(), Some("/#gallery"));
  }

  #[tokio::test]
  async fn switch_rewrites_tracked_address_for_subscribers() {
    let resolver = Resolver::new(StaticSource::both()).with_address("/menu?table=4");
    let mut rx = resolver.subscribe();

    resolver.begin_switch(Locale::En);
    assert_eq!(rx.borrow_and_update().address.as_deref(), Some("/menu?table=4&lang=en"));

    resolver.switch(Locale::Fi).await;
    assert_eq!(rx.borrow_and_update().address.as_deref(), Some("/menu?table=4"));
  }

  #[test]
  fn untracked_address_stays_absent() {
    let resolver = Resolver::new(StaticSource::both());
    resolver.begin_switch(Locale::En);
    assert_eq!(resolver.shareable_address(), None);
  }
}
