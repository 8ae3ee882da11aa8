/* src/server/core/rust/src/escape.rs */

use std::borrow::Cow;

/// Escape `&`, `<` and `>` so user text can be embedded in an HTML body.
///
/// Quotes are left alone: the output is only ever placed in element content,
/// never inside attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
  if !text.contains(['&', '<', '>']) {
    return Cow::Borrowed(text);
  }
  let mut out = String::with_capacity(text.len() + 16);
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
  Cow::Owned(out)
}
