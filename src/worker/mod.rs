//! Background worker thread for asynchronous catalog parsing.
//!
//! This module implements the worker thread that deserializes API response
//! bodies so the main plugin UI thread never blocks on a large payload. It
//! uses Zellij's worker API for cross-thread communication and includes
//! distributed tracing support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ZemojiWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
