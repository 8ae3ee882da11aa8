/* src/server/core/rust/src/table.rs */

use std::collections::BTreeMap;

use serde::Deserialize;

/// Locale-specific display strings, addressed by dotted keys such as `contact.form.name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringTable {
  Leaf(String),
  Node(BTreeMap<String, StringTable>),
}

/// Why a dotted key did not resolve to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Miss {
  /// No table is loaded (still loading, or the load failed).
  NoTable,
  /// Traversal reached a leaf while segments remained.
  NotAMapping { segment: String },
  /// The mapping has no entry for this segment.
  UnknownSegment { segment: String },
  /// The key names a sub-tree rather than a string.
  NotText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
  Found(&'a str),
  Missing(Miss),
}

impl Lookup<'_> {
  /// Collapse to display text, falling back to the key itself.
  pub fn or_key(self, key: &str) -> String {
    match self {
      Lookup::Found(text) => text.to_string(),
      Lookup::Missing(miss) => {
        log::debug!("missing translation for '{key}': {miss:?}");
        key.to_string()
      }
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
  #[error("string table is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("string table root must be an object")]
  NotAnObject,
}

impl StringTable {
  /// Parse a JSON document. Leaves must be strings and the root must be an object.
  pub fn from_json(bytes: &[u8]) -> Result<Self, TableError> {
    match serde_json::from_slice::<StringTable>(bytes)? {
      table @ StringTable::Node(_) => Ok(table),
      StringTable::Leaf(_) => Err(TableError::NotAnObject),
    }
  }

  pub fn lookup(&self, key: &str) -> Lookup<'_> {
    let mut node = self;
    for segment in key.split('.') {
      let StringTable::Node(children) = node else {
        return Lookup::Missing(Miss::NotAMapping { segment: segment.to_string() });
      };
      match children.get(segment) {
        Some(child) => node = child,
        None => return Lookup::Missing(Miss::UnknownSegment { segment: segment.to_string() }),
      }
    }
    match node {
      StringTable::Leaf(text) => Lookup::Found(text),
      StringTable::Node(_) => Lookup::Missing(Miss::NotText),
    }
  }

  /// Number of text leaves in the table.
  pub fn len(&self) -> usize {
    match self {
      StringTable::Leaf(_) => 1,
      StringTable::Node(children) => children.values().map(StringTable::len).sum(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

pub fn lookup_in<'a>(table: Option<&'a StringTable>, key: &str) -> Lookup<'a> {
  match table {
    Some(t) => t.lookup(key),
    None => Lookup::Missing(Miss::NoTable),
  }
}

/// Total lookup: the stored text, or `key` unchanged on any miss.
pub fn resolve(table: Option<&StringTable>, key: &str) -> String {
  lookup_in(table, key).or_key(key)
}
