//! Purge command - delete every contact matching a search term

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use super::{finish, get_context, get_logger};
use crate::output;

pub async fn run(term: &str, all: bool, force: bool, json: bool) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context(&logger, "purge").await?;

    let matched = ctx.contact_service.filtered(term).len();
    if matched == 0 {
        if json {
            println!("{}", serde_json::json!({ "deleted": 0 }));
        } else {
            println!("{}", "Nenhum contato encontrado".bold());
        }
        return Ok(());
    }

    if !ctx.contact_service.can_bulk_delete(term) && !all {
        anyhow::bail!(
            "'{}' matches all {} contacts. Pass --all to delete every contact.",
            term,
            matched
        );
    }

    if !force && !json {
        println!("{}", output::contacts_table(&ctx.contact_service.filtered(term)));
        println!();
        output::warning(&format!("{} contatos encontrados", matched));
        if !Confirm::new()
            .with_prompt(format!("Delete all {} contact(s)?", matched))
            .default(false)
            .interact()?
        {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let progress = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(matched as u64)
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("=> "));
    }
    progress.set_message("removendo contatos");

    let outcome = ctx
        .contact_service
        .bulk_delete_filtered(term, |_| progress.inc(1))
        .await?;
    progress.finish_and_clear();

    finish(&logger, "purge", "bulk_delete", outcome, json)
}
