//! Add command - create a contact

use anyhow::Result;
use contatos_core::LogEvent;

use super::{finish, get_context, get_logger, log_event};

pub async fn run(telefone: &str, nome: &str, json: bool) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context(&logger, "add").await?;

    let outcome = match ctx.contact_service.add_contact(telefone, nome).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("contact_add_rejected").with_command("add").with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    let event = if outcome.is_ignored() {
        if !json {
            crate::output::warning("The backend did not accept the contact; nothing was added.");
        }
        "contact_add_ignored"
    } else {
        "contact_added"
    };

    finish(&logger, "add", event, outcome, json)
}
