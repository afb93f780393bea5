//! source
//!
//! The requester seam between the host and bound commands.
//!
//! # Design
//!
//! Every tab-completion or execution call carries the identity of whoever
//! issued it. The host implements [`CommandSource`] once (for players,
//! console, command blocks, ...) and hands a [`SourceHandle`] into each
//! call. Command objects may retain the handle past construction, which is
//! why it is an `Arc` rather than a borrow.
//!
//! `send_message` takes `&self`: transports are expected to provide their
//! own interior mutability (a channel, a locked connection, a queue per
//! game tick).

use std::sync::Arc;

/// The identity and feedback channel of whoever is running a command.
pub trait CommandSource: Send + Sync {
    /// Display name of the requester (player name, `"console"`, ...).
    fn name(&self) -> String;

    /// Deliver one message to the requester. Each call is one discrete
    /// message; the transport has no concept of partial lines.
    fn send_message(&self, line: &str);
}

/// Shared handle to a [`CommandSource`], cheap to clone into command
/// objects and per-call writers.
pub type SourceHandle = Arc<dyn CommandSource>;
