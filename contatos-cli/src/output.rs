//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use contatos_core::{Contact, Notification, NotificationKind};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print a notification: bold title, then the description
pub fn notify(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => {
            success(&format!("✓ {}", notification.title.bold()));
            println!("  {}", notification.description);
        }
        NotificationKind::Error => {
            error(&format!("✗ {}", notification.title.bold()));
            eprintln!("  {}", notification.description);
        }
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of contacts: name, phone, email
pub fn contacts_table(contacts: &[&Contact]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Nome", "Telefone", "Email"]);
    for contact in contacts {
        table.add_row(vec![
            contact.nome.as_str(),
            contact.telefone.as_str(),
            contact.email.as_deref().unwrap_or(""),
        ]);
    }
    table
}
