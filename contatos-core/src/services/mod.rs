//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod bulk_delete;
mod contacts;
mod demo;
pub mod logging;

pub use bulk_delete::{delete_sequentially, BulkDeleteResult};
pub use contacts::{ActionOutcome, ContactService};
pub use demo::DemoService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
