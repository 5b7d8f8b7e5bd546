//! CLI command implementations

pub mod add;
pub mod demo;
pub mod edit;
pub mod list;
pub mod logs;
pub mod purge;
pub mod remove;

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use contatos_core::{
    ActionOutcome, ContatosContext, EntryPoint, LogEvent, LoggingService, OperationResult,
};

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONTATOS_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".contatos")
}

/// Build the context and load the contact list from the backend
pub async fn get_context(logger: &Option<LoggingService>, command: &str) -> Result<ContatosContext> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let mut ctx = ContatosContext::new(&data_dir).context("Failed to initialize contatos context")?;

    log_event(logger, LogEvent::new("command_executed").with_command(command));

    if let Err(e) = ctx.contact_service.refresh().await {
        log_event(
            logger,
            LogEvent::new("list_failed").with_command(command).with_error(e.to_string()),
        );
        return Err(e).context("Failed to load contacts");
    }

    Ok(ctx)
}

/// Print and log the outcome of an action
///
/// Failures log the message the user saw plus the underlying cause as
/// details. Exits with status 1 when the action reported an error
/// notification.
pub fn finish(
    logger: &Option<LoggingService>,
    command: &str,
    event: &str,
    outcome: ActionOutcome,
    json: bool,
) -> Result<()> {
    let log = match &outcome.error {
        Some(error) => {
            let shown = outcome
                .notification
                .as_ref()
                .map(|n| n.description.clone())
                .unwrap_or_else(|| error.clone());
            LogEvent::new(format!("{}_failed", event))
                .with_command(command)
                .with_error(shown)
                .with_error_details(error.clone())
        }
        None => LogEvent::new(event).with_command(command).with_count(outcome.affected),
    };
    log_event(logger, log);

    let failed = outcome.is_failure();

    if json {
        let result = if failed {
            let message = outcome
                .notification
                .as_ref()
                .map(|n| n.description.clone())
                .unwrap_or_default();
            OperationResult::<ActionOutcome>::fail(message)
        } else {
            OperationResult::ok(outcome)
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(notification) = &outcome.notification {
        output::notify(notification);
    }

    if failed {
        exit(1);
    }
    Ok(())
}
