//! Contatos Core - business logic for the contact manager
//!
//! Laid out as a hexagonal architecture:
//!
//! - **domain**: Contact, search filter, notifications, errors
//! - **ports**: the ContactRepository trait
//! - **services**: contact list state, bulk delete, logging, demo mode
//! - **adapters**: reqwest HTTP client and the in-memory repository

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::http::HttpContactClient;
use adapters::memory::{generate_demo_contacts, InMemoryContactRepository};
use config::Config;
use ports::ContactRepository;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{filter_contacts, Contact, Notification, NotificationKind};
pub use services::{
    ActionOutcome, ContactService, DemoService, EntryPoint, LogEntry, LogEvent, LoggingService,
};

/// Main context for Contatos operations
///
/// Holds the configuration and the contact service wired to the right
/// repository (HTTP backend, or in-memory data in demo mode).
pub struct ContatosContext {
    pub config: Config,
    pub contact_service: ContactService,
}

impl ContatosContext {
    /// Create a new context from the data directory's settings
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let repository: Arc<dyn ContactRepository> = if config.demo_mode {
            Arc::new(InMemoryContactRepository::with_contacts(generate_demo_contacts()))
        } else {
            Arc::new(HttpContactClient::new(&config.base_url, config.timeout)?)
        };

        Ok(Self {
            config,
            contact_service: ContactService::new(repository),
        })
    }

    /// Create a context around an existing repository
    pub fn with_repository(config: Config, repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            config,
            contact_service: ContactService::new(repository),
        }
    }
}
