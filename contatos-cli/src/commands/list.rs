//! List command - show contacts, optionally filtered by a search term

use anyhow::Result;
use colored::Colorize;

use super::{get_context, get_logger};
use crate::output;

pub async fn run(search: Option<&str>, json: bool) -> Result<()> {
    let logger = get_logger();
    let command = if search.is_some() { "search" } else { "list" };
    let ctx = get_context(&logger, command).await?;
    let service = &ctx.contact_service;

    let term = search.unwrap_or("");
    let filtered = service.filtered(term);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if service.is_empty() {
        println!("{}", "Nenhum contato cadastrado".bold());
        println!("Adicione seu primeiro contato com 'contatos add <telefone> <nome>'.");
        return Ok(());
    }

    if filtered.is_empty() {
        println!("{}", "Nenhum contato encontrado".bold());
        println!("Nenhum contato corresponde a '{}'.", term);
        return Ok(());
    }

    println!("{}", output::contacts_table(&filtered));

    if service.can_bulk_delete(term) {
        println!();
        output::info(&format!("{} contatos encontrados", filtered.len()));
        println!(
            "{}",
            format!("Use 'contatos purge {}' to delete all of them.", term).dimmed()
        );
    }

    Ok(())
}
