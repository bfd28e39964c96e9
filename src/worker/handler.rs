//! Worker thread implementation for the one-shot catalog load.
//!
//! The catalog source blocks for its simulated latency, so it runs here rather
//! than on the plugin thread that renders the UI.

use crate::catalog::{CatalogSource, MockCatalogSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The catalog source is built lazily from the first `LoadCatalog` message,
/// since the latency comes from plugin configuration.
#[derive(Serialize, Deserialize, Default)]
pub struct CatalogWorker {
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl CatalogWorker {
    /// Creates a worker backed by an explicit catalog source.
    #[must_use]
    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Returns the catalog source, creating the mock source on first use.
    fn source_for(&mut self, latency_ms: u64) -> &dyn CatalogSource {
        let source = self.source.get_or_insert_with(|| {
            tracing::debug!(latency_ms = latency_ms, "initializing mock catalog source");
            let mock: Box<dyn CatalogSource> =
                Box::new(MockCatalogSource::new(Duration::from_millis(latency_ms)));
            mock
        });
        &**source
    }

    fn handle_load_catalog(&mut self, latency_ms: u64) -> WorkerResponse {
        match self.source_for(latency_ms).load() {
            Ok(listings) => {
                tracing::debug!(listing_count = listings.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { listings }
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("load catalog: {e}"),
                }
            }
        }
    }

    /// Re-attaches the plugin thread's trace context to this thread.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }

    /// Processes one message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { latency_ms, .. } => self.handle_load_catalog(latency_ms),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for CatalogWorker {
    /// Deserializes the payload, handles it, and posts the response back under
    /// the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("invalid worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}
