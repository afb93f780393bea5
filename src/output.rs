//! output
//!
//! Redirecting parser output to the requester's chat.
//!
//! # Design
//!
//! clap renders usage and error text for a console. In a game host that
//! text lands in the requester's chat instead, one host message per
//! written chunk. [`ChatWriter`] is the single funnel: it strips carriage
//! returns (the host display does not expect them) and forwards each call
//! as one discrete message with no buffering; the transport has no
//! concept of partial lines.
//!
//! The writer is a sink over a [`SourceHandle`], not a subclass of any
//! stream type. It also implements [`std::fmt::Write`] so `write!`-style
//! formatting funnels through the same path.

use std::fmt;

use crate::source::SourceHandle;

/// Per-invocation sink that forwards parser output to the requester.
pub struct ChatWriter {
    source: SourceHandle,
}

impl ChatWriter {
    /// Bind a writer to one requester for the duration of a call.
    pub fn new(source: SourceHandle) -> Self {
        Self { source }
    }

    /// Forward `text` as exactly one message, with carriage returns
    /// removed. The caller's line breaks are kept as-is.
    pub fn write_line(&self, text: &str) {
        let cleaned = text.replace('\r', "");
        self.source.send_message(&cleaned);
    }
}

impl fmt::Write for ChatWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_line(s);
        Ok(())
    }
}
