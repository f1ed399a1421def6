//! Observability pipeline for the plugin.
//!
//! Spans emitted through `tracing` flow into OpenTelemetry and land in a
//! rotating OTLP JSON file inside the plugin's data directory, since the
//! wasm sandbox has no network collector to send them to.
//!
//! - `init`: Subscriber setup and level filtering
//! - `tracer`: Tracer provider with the file-based exporter
//! - `span_formatter`: OTLP JSON formatting
//! - `file_writer`: Size-based file rotation

pub mod file_writer;
pub mod init;
pub mod span_formatter;
pub mod tracer;

pub use init::init_tracing;
