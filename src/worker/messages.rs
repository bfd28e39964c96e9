//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread asks the worker to load the catalog; the worker answers with
//! the listings or an error. Messages carry an optional trace context so spans
//! on both threads join the same trace.

use crate::domain::Listing;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-character hex string.
    pub trace_id: String,

    /// Parent span ID as a 16-character hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace context of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active, e.g. when
    /// tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the full catalog after the given simulated latency.
    LoadCatalog {
        /// Simulated fetch latency in milliseconds.
        latency_ms: u64,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadCatalog` message carrying the current trace context.
    #[must_use]
    pub fn load_catalog(latency_ms: u64) -> Self {
        Self::LoadCatalog {
            latency_ms,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog source produced its listings.
    CatalogLoaded { listings: Vec<Listing> },

    /// The worker could not complete the request.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
