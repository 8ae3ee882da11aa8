/* src/server/core/rust/src/translations.rs */

use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::table::{StringTable, TableError};

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
  #[error("no string table for locale {locale} at {}", path.display())]
  Missing { locale: Locale, path: PathBuf },
  #[error("failed to read {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("invalid string table {}: {source}", path.display())]
  Invalid { path: PathBuf, source: TableError },
}

/// String tables stored as `{dir}/{locale}.json`.
///
/// Files are read on every call so edited content is served immediately.
#[derive(Debug, Clone)]
pub struct TranslationStore {
  dir: PathBuf,
}

impl TranslationStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path_for(&self, locale: Locale) -> PathBuf {
    self.dir.join(format!("{locale}.json"))
  }

  /// Raw file contents, validated as a string table before being returned.
  pub fn load_raw(&self, locale: Locale) -> Result<Vec<u8>, TranslationError> {
    self.read(locale).map(|(bytes, _)| bytes)
  }

  pub fn load(&self, locale: Locale) -> Result<StringTable, TranslationError> {
    self.read(locale).map(|(_, table)| table)
  }

  fn read(&self, locale: Locale) -> Result<(Vec<u8>, StringTable), TranslationError> {
    let path = self.path_for(locale);
    let bytes = match std::fs::read(&path) {
      Ok(b) => b,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        return Err(TranslationError::Missing { locale, path });
      }
      Err(source) => return Err(TranslationError::Io { path, source }),
    };
    let table =
      StringTable::from_json(&bytes).map_err(|source| TranslationError::Invalid { path, source })?;
    Ok((bytes, table))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::table::Lookup;

  fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, TranslationStore) {
    let tmp = tempfile::tempdir().unwrap();
    for (name, content) in files {
      std::fs::write(tmp.path().join(name), content).unwrap();
    }
    let store = TranslationStore::new(tmp.path());
    (tmp, store)
  }

  #[test]
  fn loads_each_locale_from_its_own_file() {
    let (tmp, store) = store_with(&[
      ("fi.json", r#"{"navigation":{"about":"Meistä"}}"#),
      ("en.json", r#"{"navigation":{"about":"About"}}"#),
    ]);
    let fi = store.load(Locale::Fi).unwrap();
    let en = store.load(Locale::En).unwrap();
    assert_eq!(fi.lookup("navigation.about"), Lookup::Found("Meistä"));
    assert_eq!(en.lookup("navigation.about"), Lookup::Found("About"));
    assert_eq!(store.dir(), tmp.path());
  }

  #[test]
  fn missing_file_is_reported() {
    let (_tmp, store) = store_with(&[("fi.json", "{}")]);
    assert!(matches!(
      store.load(Locale::En),
      Err(TranslationError::Missing { locale: Locale::En, .. })
    ));
    assert!(store.load(Locale::Fi).unwrap().is_empty());
  }

  #[test]
  fn invalid_content_is_reported() {
    let (_tmp, store) = store_with(&[("fi.json", r#"{"count": 3}"#)]);
    assert!(matches!(store.load_raw(Locale::Fi), Err(TranslationError::Invalid { .. })));
  }

  #[test]
  fn edits_are_visible_without_reload() {
    let (tmp, store) = store_with(&[("en.json", r#"{"title":"Old"}"#)]);
    assert_eq!(store.load(Locale::En).unwrap().lookup("title"), Lookup::Found("Old"));
    std::fs::write(tmp.path().join("en.json"), r#"{"title":"New"}"#).unwrap();
    assert_eq!(store.load(Locale::En).unwrap().lookup("title"), Lookup::Found("New"));
  }
}
