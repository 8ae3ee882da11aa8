/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_noosi_config, load_noosi_config, resolve_config};
pub use types::{API_KEY_ENV, MailSection, NoosiConfig};
