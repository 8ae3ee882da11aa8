/* src/cli/core/src/send.rs */

use anyhow::{Context, Result, bail};
use noosi_client::{ContactForm, HttpContactTransport, SubmissionOutcome};

use crate::ui;

/// Submit a contact message through a running site's contact endpoint.
pub async fn run_send(base_url: &str, name: String, email: String, message: String) -> Result<()> {
  let transport = HttpContactTransport::new(base_url).context("failed to build HTTP client")?;
  ui::arrow(transport.endpoint());

  let mut form = ContactForm::new();
  form.name = name;
  form.email = email;
  form.message = message;

  match form.submit(&transport).await? {
    SubmissionOutcome::Succeeded(id) => {
      ui::ok("message sent");
      if let Some(id) = id {
        ui::detail(&format!("provider id {id}"));
      }
      Ok(())
    }
    SubmissionOutcome::Failed(reason) => {
      ui::fail(&reason);
      bail!("message was not sent")
    }
    SubmissionOutcome::Pending => bail!("submission did not settle"),
  }
}
