//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing web requests or communicating with the background worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence via the action processor.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action processor.
/// They represent the boundary between pure state transformations and effectful
/// operations like host web requests and worker communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues the catalog GET request through the Zellij host.
    ///
    /// The request completes asynchronously; the host delivers the result as a
    /// `WebRequestResult` event without blocking the render loop.
    FetchCatalog,

    /// Posts a message to the background worker thread.
    ///
    /// Enables asynchronous operations, currently parsing a fetched catalog
    /// body, without blocking the main event loop.
    PostToWorker(WorkerMessage),
}
