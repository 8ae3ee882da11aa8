/* src/client/rust/src/address.rs */

use noosi_server::{LANG_PARAM, Locale};

/// Rewrite an address so its `lang` parameter reflects `locale`.
///
/// The parameter is dropped for the default locale and set otherwise. Other
/// query parameters keep their order; the fragment is preserved.
pub fn with_locale(address: &str, locale: Locale) -> String {
  let (rest, fragment) = match address.find('#') {
    Some(idx) => address.split_at(idx),
    None => (address, ""),
  };
  let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

  let mut params: Vec<String> = query
    .split('&')
    .filter(|pair| !pair.is_empty())
    .filter(|pair| pair.split_once('=').map_or(*pair, |(k, _)| k) != LANG_PARAM)
    .map(str::to_string)
    .collect();
  if !locale.is_default() {
    params.push(format!("{LANG_PARAM}={locale}"));
  }

  let mut out = String::with_capacity(address.len() + 8);
  out.push_str(path);
  if !params.is_empty() {
    out.push('?');
    out.push_str(&params.join("&"));
  }
  out.push_str(fragment);
  out
}
