/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language of the site.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  Fi,
  En,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::Fi, Locale::En];

  /// Used before detection completes and whenever no signal is available.
  pub const DEFAULT: Locale = Locale::Fi;

  pub fn code(self) -> &'static str {
    match self {
      Locale::Fi => "fi",
      Locale::En => "en",
    }
  }

  pub fn is_default(self) -> bool {
    self == Self::DEFAULT
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale \"{0}\"")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
  type Err = UnknownLocale;

  /// Exact, case-sensitive match on the locale code.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Locale::ALL.into_iter().find(|l| l.code() == s).ok_or_else(|| UnknownLocale(s.to_string()))
  }
}
