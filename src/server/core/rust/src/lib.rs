/* src/server/core/rust/src/lib.rs */

pub mod contact;
pub mod errors;
pub mod escape;
pub mod locale;
pub mod resolve;
pub mod server;
pub mod table;
pub mod translations;

// Re-exports for ergonomic use
pub use contact::{
  BoxFuture, ContactMessage, ContactPayload, ContactReply, ContactService, DeliveryError, Mailbox,
  Mailer, OutboundEmail, SendReceipt, render_email,
};
pub use errors::NoosiError;
pub use escape::escape_html;
pub use locale::{Locale, UnknownLocale};
pub use resolve::{
  LANG_PARAM, ResolveData, ResolveStrategy, default_strategies, detect_locale, from_language,
  from_url_query, query_param, resolve_chain,
};
pub use server::{NoosiParts, NoosiServer};
pub use table::{Lookup, Miss, StringTable, TableError, lookup_in, resolve};
pub use translations::{TranslationError, TranslationStore};
