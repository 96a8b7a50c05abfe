//! Outbound context-window policy.
//!
//! Stored history is never trimmed; the window caps only what is sent to
//! the gateway per turn, keeping request size bounded over a long
//! conversation.

use petfolio_types::llm::Message;

/// Caps the number of trailing messages sent to the gateway.
#[derive(Debug, Clone, Copy)]
pub struct ContextWindow {
    max_messages: usize,
}

impl ContextWindow {
    /// Create a window capped at `max_messages`, floored at 1 so the
    /// current user message is always sent.
    pub fn new(max_messages: usize) -> Self {
        Self {
            max_messages: max_messages.max(1),
        }
    }

    /// The most recent messages, up to the cap, in conversation order.
    pub fn trailing<'a>(&self, messages: &'a [Message]) -> &'a [Message] {
        &messages[messages.len().saturating_sub(self.max_messages)..]
    }
}
