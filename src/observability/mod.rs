//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: traces go to `~/.local/share/zellij/vitrine/vitrine-otlp.json`
//! - **Automatic Rotation**: files rotate at 10MB with 3 timestamped backups
//! - **OTLP Format**: one OTLP/JSON document per exported batch
//!
//! The filter comes from the `trace_level` plugin option (default `info`).
//! An invalid directive falls back to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
