//! Background worker thread for the catalog load.
//!
//! Uses Zellij's worker API so the simulated fetch latency never blocks the
//! plugin's render loop.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
