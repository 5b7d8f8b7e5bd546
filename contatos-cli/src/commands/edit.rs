//! Edit command - rename a contact, keyed by phone number

use anyhow::Result;
use contatos_core::LogEvent;

use super::{finish, get_context, get_logger, log_event};

pub async fn run(telefone: &str, nome: &str, json: bool) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context(&logger, "edit").await?;

    if !ctx.contact_service.contacts().iter().any(|c| c.telefone == telefone.trim()) {
        anyhow::bail!("No contact with phone number '{}'", telefone.trim());
    }

    let outcome = match ctx.contact_service.edit_contact(telefone, nome).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("contact_update_rejected").with_command("edit").with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    finish(&logger, "edit", "contact_updated", outcome, json)
}
