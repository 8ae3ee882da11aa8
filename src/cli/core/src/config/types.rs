/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use noosi_server::Mailbox;
use serde::Deserialize;

/// Overrides `[server].port`.
pub const PORT_ENV: &str = "PORT";
/// Delivery provider credential. Never read from the config file.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoosiConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub contact: Mailbox,
  #[serde(default)]
  pub mail: MailSection,
  #[serde(skip)]
  pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_translations_dir")]
  pub translations_dir: PathBuf,
  /// Static files served for every path no API route claims.
  #[serde(default = "default_public_dir")]
  pub public_dir: Option<PathBuf>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      translations_dir: default_translations_dir(),
      public_dir: default_public_dir(),
    }
  }
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_translations_dir() -> PathBuf {
  PathBuf::from("public/translations")
}

fn default_public_dir() -> Option<PathBuf> {
  Some(PathBuf::from("public"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailSection {
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl Default for MailSection {
  fn default() -> Self {
    Self { endpoint: default_endpoint(), timeout_secs: default_timeout_secs() }
  }
}

fn default_endpoint() -> String {
  "https://api.resend.com/emails".to_string()
}

fn default_timeout_secs() -> u64 {
  15
}

impl NoosiConfig {
  pub fn validate(&self) -> Result<()> {
    if self.contact.from.trim().is_empty() {
      bail!("contact.from must not be empty");
    }
    if self.contact.to.iter().all(|addr| addr.trim().is_empty()) {
      bail!("contact.to must list at least one address");
    }
    if self.mail.timeout_secs == 0 {
      bail!("mail.timeout_secs must be greater than zero");
    }
    Ok(())
  }

  /// Apply `PORT` and `RESEND_API_KEY`. `var` is the environment lookup.
  pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(port) = var(PORT_ENV).filter(|p| !p.trim().is_empty()) {
      self.server.port = match port.trim().parse() {
        Ok(p) => p,
        Err(_) => bail!("{PORT_ENV}={port:?} is not a valid port"),
      };
    }
    self.api_key = var(API_KEY_ENV).filter(|k| !k.trim().is_empty());
    Ok(())
  }

  /// Make relative directories relative to `base` (the directory holding noosi.toml).
  /// An empty `public_dir` turns static file serving off.
  pub fn rebase(&mut self, base: &Path) {
    if self.server.public_dir.as_ref().is_some_and(|d| d.as_os_str().is_empty()) {
      self.server.public_dir = None;
    }
    if self.server.translations_dir.is_relative() {
      self.server.translations_dir = base.join(&self.server.translations_dir);
    }
    if let Some(dir) = self.server.public_dir.as_mut().filter(|d| d.is_relative()) {
      *dir = base.join(&*dir);
    }
  }

  pub fn local_url(&self) -> String {
    format!("http://localhost:{}", self.server.port)
  }
}
