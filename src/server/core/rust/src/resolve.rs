/* src/server/core/rust/src/resolve.rs */

use crate::locale::Locale;

/// Query parameter that forces a locale, e.g. `/?lang=en`.
pub const LANG_PARAM: &str = "lang";

/// Signals available for deciding the active locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveData<'a> {
  /// Raw query string of the current address, with or without a leading `?`.
  pub query: Option<&'a str>,
  /// Language preference of the environment: a browser language tag such as
  /// `fi-FI`, or a full `Accept-Language` header.
  pub language: Option<&'a str>,
}

/// One step of the locale determination chain.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale>;
}

struct UrlQuery {
  param: String,
}

impl ResolveStrategy for UrlQuery {
  fn kind(&self) -> &'static str {
    "url_query"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    let query = data.query?;
    query_param(query, &self.param).and_then(|v| v.parse().ok())
  }
}

struct Language;

impl ResolveStrategy for Language {
  fn kind(&self) -> &'static str {
    "language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    let tag = preferred_tag(data.language?)?;
    if tag.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("fi")) {
      Some(Locale::Fi)
    } else {
      Some(Locale::En)
    }
  }
}

/// Explicit override from the address. Only exact locale codes are honored.
pub fn from_url_query(param: &str) -> Box<dyn ResolveStrategy> {
  Box::new(UrlQuery { param: param.to_string() })
}

/// Environment language preference: a `fi` prefix selects Finnish, anything else English.
pub fn from_language() -> Box<dyn ResolveStrategy> {
  Box::new(Language)
}

/// Default chain: `?lang=` override -> language preference -> `Locale::DEFAULT`.
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_query(LANG_PARAM), from_language()]
}

pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> Locale {
  strategies.iter().find_map(|s| s.resolve(data)).unwrap_or(Locale::DEFAULT)
}

pub fn detect_locale(data: &ResolveData<'_>) -> Locale {
  resolve_chain(&default_strategies(), data)
}

/// First value of `name` in a query string. No percent-decoding: locale codes are plain ASCII.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
  query.trim_start_matches('?').split('&').find_map(|pair| {
    let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
    (k == name).then_some(v)
  })
}

/// Pick the preferred tag. A single tag is returned as-is; an `Accept-Language`
/// list yields its highest-q entry, ties keeping header order.
fn preferred_tag(header: &str) -> Option<&str> {
  let mut best: Option<(&str, f64)> = None;
  for part in header.split(',') {
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    if lang.is_empty() {
      continue;
    }
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    if best.is_none_or(|(_, best_q)| q > best_q) {
      best = Some((lang, q));
    }
  }
  best.map(|(lang, _)| lang)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn data<'a>(query: Option<&'a str>, language: Option<&'a str>) -> ResolveData<'a> {
    ResolveData { query, language }
  }

  #[test]
  fn query_override_wins_over_language() {
    assert_eq!(detect_locale(&data(Some("lang=en"), Some("fi-FI"))), Locale::En);
    assert_eq!(detect_locale(&data(Some("?lang=fi"), Some("en-US"))), Locale::Fi);
  }

  #[test]
  fn invalid_override_defers_to_language() {
    assert_eq!(detect_locale(&data(Some("lang=sv"), Some("fi"))), Locale::Fi);
    assert_eq!(detect_locale(&data(Some("lang=EN"), Some("fi"))), Locale::Fi);
    assert_eq!(detect_locale(&data(Some("lang="), Some("en"))), Locale::En);
  }

  #[test]
  fn finnish_prefix_selects_finnish() {
    assert_eq!(detect_locale(&data(None, Some("fi-FI"))), Locale::Fi);
    assert_eq!(detect_locale(&data(None, Some("FI"))), Locale::Fi);
    assert_eq!(detect_locale(&data(None, Some("fil"))), Locale::Fi);
  }

  #[test]
  fn other_languages_select_english() {
    assert_eq!(detect_locale(&data(None, Some("sv-SE"))), Locale::En);
    assert_eq!(detect_locale(&data(None, Some("en-US"))), Locale::En);
    assert_eq!(detect_locale(&data(None, Some("f"))), Locale::En);
  }

  #[test]
  fn no_signal_uses_default() {
    assert_eq!(detect_locale(&data(None, None)), Locale::Fi);
    assert_eq!(detect_locale(&data(None, Some(""))), Locale::Fi);
    assert_eq!(detect_locale(&data(Some("page=2"), None)), Locale::Fi);
  }

  #[test]
  fn accept_language_uses_highest_q() {
    assert_eq!(detect_locale(&data(None, Some("en;q=0.5,fi-FI;q=0.9"))), Locale::Fi);
    assert_eq!(detect_locale(&data(None, Some("fi;q=0.3, sv-SE, en;q=0.8"))), Locale::En);
    assert_eq!(detect_locale(&data(None, Some("fi-FI,fi;q=0.9,en;q=0.8"))), Locale::Fi);
  }

  #[test]
  fn query_param_finds_first_match() {
    assert_eq!(query_param("a=1&lang=en&lang=fi", "lang"), Some("en"));
    assert_eq!(query_param("?lang", "lang"), Some(""));
    assert_eq!(query_param("language=en", "lang"), None);
  }

  #[test]
  fn custom_chain_order() {
    let chain = vec![from_language(), from_url_query("lang")];
    assert_eq!(resolve_chain(&chain, &data(Some("lang=en"), Some("fi"))), Locale::Fi);
    assert_eq!(chain[0].kind(), "language");
  }
}
