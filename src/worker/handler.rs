//! Worker thread implementation for asynchronous catalog parsing.
//!
//! This module implements the Zellij worker thread interface, parsing API
//! response bodies off the main plugin rendering loop. It includes
//! distributed tracing support for cross-thread observability.

use crate::domain::EmojiRecord;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling catalog operations.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. Parsing the full catalog is
/// the one operation heavy enough to warrant leaving the render loop.
#[derive(Serialize, Deserialize, Default)]
pub struct ZemojiWorker {}

impl ZemojiWorker {
    /// Handles the `ParseCatalog` message.
    ///
    /// Deserializes the raw API body into emoji records, preserving the
    /// order the API returned them in.
    fn handle_parse_catalog(&self, body: &str) -> WorkerResponse {
        match serde_json::from_str::<Vec<EmojiRecord>>(body) {
            Ok(records) => {
                tracing::debug!(record_count = records.len(), "catalog body parsed");
                WorkerResponse::CatalogParsed { records }
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog body failed to parse");
                WorkerResponse::Error {
                    message: format!("parse catalog: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// This function reconstructs the OpenTelemetry context from the serialized
    /// trace information in the message, allowing spans created in the worker
    /// thread to be linked to their parent spans in the main thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let WorkerMessage::ParseCatalog { trace_context, .. } = message;
        let trace_context = trace_context.as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant. Automatically attaches trace context
    /// and creates a tracing span for the operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::ParseCatalog { body, .. } => self.handle_parse_catalog(&body),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZemojiWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> String {
        r#"[
            {"name": "grinning face", "category": "smileys and people", "group": "face positive", "htmlCode": "&#128512;"},
            {"name": "ox", "category": "animals and nature", "group": "animal mammal", "htmlCode": "&#128002;"}
        ]"#
        .to_string()
    }

    #[test]
    fn parse_catalog_returns_records_in_api_order() {
        let mut worker = ZemojiWorker::default();
        let response = worker.handle_message(WorkerMessage::parse_catalog(sample_body()));

        match response {
            WorkerResponse::CatalogParsed { records } => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].name, "grinning face");
                assert_eq!(records[1].category, "animals and nature");
            }
            other => panic!("expected CatalogParsed, got {other:?}"),
        }
    }

    #[test]
    fn parse_catalog_reports_malformed_body_as_error() {
        let mut worker = ZemojiWorker::default();
        let response = worker.handle_message(WorkerMessage::parse_catalog("not json".to_string()));

        match response {
            WorkerResponse::Error { message } => {
                assert!(message.starts_with("parse catalog:"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn parse_catalog_accepts_empty_array() {
        let mut worker = ZemojiWorker::default();
        let response = worker.handle_message(WorkerMessage::parse_catalog("[]".to_string()));

        assert_eq!(response, WorkerResponse::CatalogParsed { records: vec![] });
    }
}
