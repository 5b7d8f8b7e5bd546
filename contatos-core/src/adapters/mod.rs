//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the contacts REST backend
//! - In-memory repository for demo mode and tests

pub mod http;
pub mod memory;
