/* src/client/rust/src/source.rs */

use std::time::Duration;

use noosi_server::{BoxFuture, Locale, StringTable, TableError};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("server returned HTTP {0}")]
  Status(u16),
  #[error(transparent)]
  Malformed(#[from] TableError),
}

/// Where string tables come from. One table per locale.
pub trait TableSource: Send + Sync {
  fn fetch(&self, locale: Locale) -> BoxFuture<Result<StringTable, FetchError>>;
}

/// Fetches `{base}/translations/{locale}.json`, bypassing HTTP caches.
#[derive(Clone)]
pub struct HttpTableSource {
  base_url: String,
  client: reqwest::Client,
}

impl HttpTableSource {
  pub fn new(base_url: &str) -> Result<Self, FetchError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    Ok(Self::with_client(base_url, client))
  }

  pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
    Self { base_url: base_url.trim_end_matches('/').to_string(), client }
  }

  pub fn url_for(&self, locale: Locale) -> String {
    format!("{}/translations/{locale}.json", self.base_url)
  }
}

impl TableSource for HttpTableSource {
  fn fetch(&self, locale: Locale) -> BoxFuture<Result<StringTable, FetchError>> {
    let req = self
      .client
      .get(self.url_for(locale))
      .header(reqwest::header::CACHE_CONTROL, "no-cache")
      .header(reqwest::header::PRAGMA, "no-cache");
    Box::pin(async move {
      let resp = req.send().await?;
      let status = resp.status();
      if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
      }
      let bytes = resp.bytes().await?;
      Ok(StringTable::from_json(&bytes)?)
    })
  }
}
