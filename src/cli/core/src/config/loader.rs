/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::NoosiConfig;

/// Walk upward from `start` to find `noosi.toml`, like Cargo.toml discovery
pub fn find_noosi_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("noosi.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("noosi.toml not found (searched upward from {})", start.display());
    }
  }
}

/// Parse a config file. Relative directories are resolved against the file's directory.
pub fn load_noosi_config(path: &Path) -> Result<NoosiConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: NoosiConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  if let Some(base) = path.parent() {
    config.rebase(base);
  }
  Ok(config)
}

/// Explicit path, else discovery from the working directory, else built-in defaults.
/// Environment overrides are applied last.
pub fn resolve_config(explicit: Option<PathBuf>) -> Result<(Option<PathBuf>, NoosiConfig)> {
  let path = match explicit {
    Some(p) => Some(p),
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_noosi_config(&cwd).ok()
    }
  };
  let mut config = match &path {
    Some(p) => load_noosi_config(p)?,
    None => {
      log::debug!("no noosi.toml found, using defaults");
      NoosiConfig::default()
    }
  };
  config.apply_env(|name| std::env::var(name).ok())?;
  Ok((path, config))
}
