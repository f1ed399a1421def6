//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that parses catalog
//! payloads. It also implements distributed tracing context propagation
//! across thread boundaries.

use crate::domain::EmojiRecord;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    parse_catalog(ParseCatalog { body: String }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to a catalog operation that should be performed
/// off the render loop. All variants include an optional trace context for
/// distributed tracing support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Parse a raw API response body into emoji records.
    ParseCatalog {
        /// UTF-8 JSON body of the catalog response.
        body: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog body was successfully parsed.
    CatalogParsed {
        /// Emoji records in API order.
        records: Vec<EmojiRecord>,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips_without_trace_context() {
        let message = WorkerMessage::ParseCatalog {
            body: "[]".to_string(),
            trace_context: None,
        };

        let json = serde_json::to_string(&message).unwrap();
        // An absent trace context is omitted from the wire format entirely.
        assert!(!json.contains("trace_context"));

        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn message_round_trips_with_trace_context() {
        let message = WorkerMessage::ParseCatalog {
            body: "[{\"name\":\"ox\"}]".to_string(),
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };

        let json = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn response_round_trips_over_the_ipc_boundary() {
        use crate::domain::EmojiRecord;

        let response = WorkerResponse::CatalogParsed {
            records: vec![EmojiRecord {
                name: "grinning face".to_string(),
                category: "smileys and people".to_string(),
                group: "face positive".to_string(),
                html_code: "&#128512;".to_string(),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        let decoded: WorkerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);

        let error = WorkerResponse::Error {
            message: "parse catalog: expected value".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(serde_json::from_str::<WorkerResponse>(&json).unwrap(), error);
    }
}
