//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. Services depend
//! only on these traits, not on concrete implementations.

mod contact_repository;

pub use contact_repository::{ContactRepository, CreateContactResponse, STATUS_OK};
