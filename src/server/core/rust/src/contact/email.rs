/* src/server/core/rust/src/contact/email.rs */

use serde::{Deserialize, Serialize};

use super::ContactMessage;
use crate::escape::escape_html;

const ACCENT: &str = "#A64845";

/// Fixed envelope of every contact mail: who it comes from, which operator
/// mailboxes receive it, and its subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
  #[serde(default = "default_from")]
  pub from: String,
  #[serde(default = "default_to")]
  pub to: Vec<String>,
  #[serde(default = "default_subject")]
  pub subject: String,
}

impl Default for Mailbox {
  fn default() -> Self {
    Self { from: default_from(), to: default_to(), subject: default_subject() }
  }
}

fn default_from() -> String {
  "Cafe Nöösi <noreply@cafenoosi.fi>".to_string()
}

fn default_to() -> Vec<String> {
  vec!["info@cafenoosi.fi".to_string()]
}

fn default_subject() -> String {
  "Yhteydenotto Cafe Nöösi sivustolta".to_string()
}

/// Mail handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: Vec<String>,
  /// Submitter's address, so operator replies go straight back to them.
  pub reply_to: String,
  pub subject: String,
  pub html: String,
  pub text: String,
}

pub fn render_email(msg: &ContactMessage, mailbox: &Mailbox) -> OutboundEmail {
  OutboundEmail {
    from: mailbox.from.clone(),
    to: mailbox.to.clone(),
    reply_to: msg.email.clone(),
    subject: mailbox.subject.clone(),
    html: render_html(msg),
    text: render_text(msg),
  }
}

fn render_html(msg: &ContactMessage) -> String {
  let name = escape_html(&msg.name);
  let email = escape_html(&msg.email);
  let message = escape_html(&msg.message);
  format!(
    r#"<div style="font-family: Arial, Helvetica, sans-serif; line-height: 1.5; color: #111;">
  <h2 style="margin: 0 0 12px; color: {ACCENT};">Uusi yhteydenotto</h2>
  <p style="margin: 0 0 8px;"><strong>Nimi:</strong> {name}</p>
  <p style="margin: 0 0 12px;"><strong>Sähköposti:</strong> {email}</p>
  <div style="padding: 12px; background: #fafafa; border-left: 3px solid {ACCENT}; white-space: pre-wrap;">{message}</div>
  <p style="margin-top: 16px; color: #666; font-size: 12px;">Lähetetty Cafe Nöösi -sivuston yhteydenottolomakkeesta.</p>
</div>"#
  )
}

fn render_text(msg: &ContactMessage) -> String {
  format!(
    "Uusi yhteydenotto\n\nNimi: {}\nSähköposti: {}\n\nViesti:\n{}\n\nLähetetty Cafe Nöösi -sivuston yhteydenottolomakkeesta.",
    msg.name, msg.email, msg.message
  )
}
