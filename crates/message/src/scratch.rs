//! crates/message/src/scratch.rs
//! Reusable render buffer for batched message emission.

/// Reusable buffer that [`Message`](crate::Message) rendering writes into.
///
/// Sinks keep one scratch alive per logging session so rendering a batch of
/// diagnostics reuses the same allocation instead of growing a fresh buffer
/// per message. The buffer is cleared, never shrunk, between renders.
#[derive(Clone, Debug, Default)]
pub struct MessageScratch {
    buf: String,
}

impl MessageScratch {
    /// Creates an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scratch buffer with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Clears the buffer, retaining its allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the current buffer contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the buffer's capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}
