//! Remove command - delete contacts by phone number

use std::io::{self, Read};

use anyhow::Result;
use colored::Colorize;
use contatos_core::{LogEvent, Notification};
use dialoguer::Confirm;

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(phones: Vec<String>, force: bool) -> Result<()> {
    // Phones from arguments, or piped on stdin (one per line or comma-separated)
    let phones: Vec<String> = if phones.is_empty() && atty::isnt(atty::Stream::Stdin) {
        if !force {
            anyhow::bail!("Pass --force when piping phone numbers; there is no terminal to confirm on.");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
            .split(|c: char| c == '\n' || c == ',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        phones
    };

    if phones.is_empty() {
        anyhow::bail!("No phone numbers provided. Pass them as arguments or pipe them on stdin.");
    }

    let logger = get_logger();
    let mut ctx = get_context(&logger, "remove").await?;

    let mut targets = Vec::new();
    for phone in &phones {
        match ctx.contact_service.contacts().iter().find(|c| &c.telefone == phone) {
            Some(contact) => targets.push(contact.clone()),
            None => output::warning(&format!("No contact with phone number '{}', skipping", phone)),
        }
    }

    if targets.is_empty() {
        return Ok(());
    }

    if !force {
        let refs: Vec<_> = targets.iter().collect();
        println!("{}", output::contacts_table(&refs));
        if !Confirm::new()
            .with_prompt(format!("Remove {} contact(s)?", targets.len()))
            .default(false)
            .interact()?
        {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let mut removed = 0;
    for contact in &targets {
        if let Err(e) = ctx.contact_service.delete_contact(&contact.telefone).await {
            log_event(
                &logger,
                LogEvent::new("contact_remove_failed")
                    .with_command("remove")
                    .with_count(removed)
                    .with_error(e.to_string()),
            );
            return Err(e.into());
        }
        removed += 1;
    }

    log_event(
        &logger,
        LogEvent::new("contact_removed").with_command("remove").with_count(removed),
    );

    if removed == 1 {
        output::notify(&Notification::contact_removed());
    } else {
        output::notify(&Notification::contacts_removed(removed));
    }

    Ok(())
}
