use std::sync::Arc;

use crate::checkpoint::Checkpoint;
use crate::diagnostics::FailureTrace;

/// Shared text storage with a byte-offset window.
///
/// The span keeps an `Arc<String>` alive so that views and sub-views can be
/// freely cloned and moved around without lifetimes or copies: consuming a
/// prefix advances `start`, extracting a sub-view shares the `Arc`. The
/// buffer is only ever mutated through [`append_bytes`](RawSpan::append_bytes)
/// when it is uniquely held and the window reaches the buffer end; every
/// other append rebuilds the visible window into a fresh buffer.
#[derive(Clone, Debug)]
pub(crate) struct RawSpan {
    buffer: Arc<String>,
    start: usize,
    end: usize,
    trace: FailureTrace,
}

impl RawSpan {
    pub(crate) fn new(text: String) -> Self {
        let end = text.len();
        Self {
            buffer: Arc::new(text),
            start: 0,
            end,
            trace: FailureTrace::default(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(String::new())
    }

    /// Visible content as raw bytes.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buffer.as_bytes()[self.start..self.end]
    }

    /// Visible content as text. The window must sit on scalar boundaries,
    /// which byte-stepping views must check before calling.
    pub(crate) fn as_str(&self) -> &str {
        &self.buffer[self.start..self.end]
    }

    pub(crate) fn byte_len(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn is_scalar_aligned(&self) -> bool {
        self.buffer.is_char_boundary(self.start) && self.buffer.is_char_boundary(self.end)
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.start, self.end)
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.start = checkpoint.start();
        self.end = checkpoint.end();
    }

    /// Consumes `n` bytes from the front.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.start + n <= self.end);
        self.start += n;
    }

    /// Splits off the first `n` bytes as a sub-span sharing the same buffer.
    pub(crate) fn split_prefix(&mut self, n: usize) -> RawSpan {
        debug_assert!(self.start + n <= self.end);
        let head = RawSpan {
            buffer: Arc::clone(&self.buffer),
            start: self.start,
            end: self.start + n,
            trace: self.trace,
        };
        self.start += n;
        head
    }

    pub(crate) fn take_rest(&mut self) -> RawSpan {
        let len = self.byte_len();
        self.split_prefix(len)
    }

    /// Appends bytes after the visible content. Returns `false` and appends
    /// nothing if the result would not be valid UTF-8 text.
    pub(crate) fn append_bytes(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return true;
        }
        if self.end == self.buffer.len() {
            if let Ok(text) = std::str::from_utf8(bytes) {
                if let Some(buffer) = Arc::get_mut(&mut self.buffer) {
                    buffer.push_str(text);
                    self.end = buffer.len();
                    return true;
                }
            }
        }
        // Shared buffer, or a join that needs validating as a whole:
        // rebuild just the visible window.
        let mut owned = Vec::with_capacity(self.byte_len() + bytes.len());
        owned.extend_from_slice(self.bytes());
        owned.extend_from_slice(bytes);
        match String::from_utf8(owned) {
            Ok(text) => {
                self.start = 0;
                self.end = text.len();
                self.buffer = Arc::new(text);
                true
            }
            Err(_) => false,
        }
    }

    /// Drops content beyond the first `byte_len` bytes. Valid across the
    /// reallocating append path, unlike a checkpoint restore.
    pub(crate) fn truncate(&mut self, byte_len: usize) {
        debug_assert!(byte_len <= self.byte_len());
        self.end = self.start + byte_len;
        if let Some(buffer) = Arc::get_mut(&mut self.buffer) {
            if buffer.is_char_boundary(self.end) {
                buffer.truncate(self.end);
            }
        }
    }

    pub(crate) fn trace(&self) -> &FailureTrace {
        &self.trace
    }

    pub(crate) fn note_expected(&mut self, expected: &'static str) {
        let offset = self.start;
        self.trace.note(offset, expected);
    }
}
