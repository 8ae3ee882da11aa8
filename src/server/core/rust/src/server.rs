/* src/server/core/rust/src/server.rs */

use crate::contact::ContactService;
use crate::resolve::ResolveStrategy;
use crate::translations::TranslationStore;

/// Framework-agnostic parts extracted from `NoosiServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct NoosiParts {
  pub contact: Option<ContactService>,
  pub translations: Option<TranslationStore>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
}

pub struct NoosiServer {
  contact: Option<ContactService>,
  translations: Option<TranslationStore>,
  strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl NoosiServer {
  pub fn new() -> Self {
    Self { contact: None, translations: None, strategies: Vec::new() }
  }

  pub fn contact(mut self, service: ContactService) -> Self {
    self.contact = Some(service);
    self
  }

  pub fn translations(mut self, store: TranslationStore) -> Self {
    self.translations = Some(store);
    self
  }

  /// Override the locale detection chain used for requests without an explicit locale.
  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  /// Consume the builder. An empty strategy list is replaced by the default chain.
  pub fn into_parts(self) -> NoosiParts {
    let strategies = if self.strategies.is_empty() {
      crate::resolve::default_strategies()
    } else {
      self.strategies
    };
    NoosiParts { contact: self.contact, translations: self.translations, strategies }
  }
}

impl Default for NoosiServer {
  fn default() -> Self {
    Self::new()
  }
}
