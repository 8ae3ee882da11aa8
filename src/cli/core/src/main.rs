/* src/cli/core/src/main.rs */

mod config;
mod lookup;
mod mailer;
mod send;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noosi_server::Locale;

use config::{NoosiConfig, find_noosi_config, load_noosi_config, resolve_config};

#[derive(Parser)]
#[command(name = "noosi", about = "Cafe Nöösi site server and tools")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site: contact endpoint, translations and static files
  Serve {
    /// Path to noosi.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Resolve translation keys against a running site
  T {
    /// Dotted keys, e.g. contact.form.send
    #[arg(required = true)]
    keys: Vec<String>,
    /// Locale to load (detected from LANG if omitted)
    #[arg(short, long)]
    lang: Option<Locale>,
    /// Base URL of the site (e.g. http://localhost:3000)
    #[arg(short, long)]
    url: Option<String>,
  },
  /// Send a message through a running site's contact form
  Send {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(short, long)]
    message: String,
    /// Base URL of the site (e.g. http://localhost:3000)
    #[arg(short, long)]
    url: Option<String>,
  },
}

/// Try to load noosi.toml from cwd upward; returns None if not found
fn try_load_config() -> Option<NoosiConfig> {
  let cwd = std::env::current_dir().ok()?;
  let path = find_noosi_config(&cwd).ok()?;
  let mut config = load_noosi_config(&path).ok()?;
  config.apply_env(|name| std::env::var(name).ok()).ok()?;
  Some(config)
}

fn base_url(explicit: Option<String>) -> String {
  explicit.unwrap_or_else(|| try_load_config().unwrap_or_default().local_url())
}

fn init_logging() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    .format_timestamp_millis()
    .init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging();

  match cli.command {
    Command::Serve { config, port } => {
      ui::banner("serve");
      let (path, mut config) = resolve_config(config)?;
      match &path {
        Some(p) => ui::arrow(&format!("config {}", p.display())),
        None => ui::arrow("no noosi.toml found, using defaults"),
      }
      if let Some(port) = port {
        config.server.port = port;
      }
      serve::run_serve(&config).await?;
    }
    Command::T { keys, lang, url } => {
      lookup::run_lookup(&base_url(url), &keys, lang).await?;
    }
    Command::Send { name, email, message, url } => {
      send::run_send(&base_url(url), name, email, message).await?;
    }
  }

  Ok(())
}
