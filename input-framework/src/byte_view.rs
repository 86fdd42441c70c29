use std::fmt;

use crate::checkpoint::Checkpoint;
use crate::diagnostics::FailureTrace;
use crate::input::Input;
use crate::scalar_view::ScalarView;
use crate::span::RawSpan;

/// A UTF-8-byte-stepping view over the same shared text a [`ScalarView`]
/// covers.
///
/// Byte-level consumption may leave the window mid-scalar; reinterpreting
/// such a window as scalars is refused rather than realigned. Appends must
/// keep the backing text valid UTF-8 and fail atomically otherwise.
#[derive(Clone, Debug)]
pub struct ByteView {
    span: RawSpan,
}

impl ByteView {
    /// Creates a view over the bytes of the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            span: RawSpan::new(text.into()),
        }
    }

    /// Creates an empty view, the usual print target.
    pub fn empty() -> Self {
        Self {
            span: RawSpan::empty(),
        }
    }

    pub(crate) fn from_span(span: RawSpan) -> Self {
        Self { span }
    }

    /// Returns the remaining content as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.span.bytes()
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Consumes and returns the next byte.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.span.advance(1);
        Some(byte)
    }

    /// Splits off the first `n` bytes, or returns `None` (consuming nothing)
    /// if fewer remain.
    pub fn take(&mut self, n: usize) -> Option<ByteView> {
        if n > self.byte_len() {
            return None;
        }
        Some(ByteView {
            span: self.span.split_prefix(n),
        })
    }

    /// Consumes `prefix` if the content starts with it.
    pub fn strip_prefix(&mut self, prefix: &[u8]) -> bool {
        if self.as_bytes().starts_with(prefix) {
            self.span.advance(prefix.len());
            true
        } else {
            false
        }
    }

    /// Appends text after the content. Returns `false`, with nothing
    /// appended, if the content currently ends mid-scalar and the join is
    /// not valid text.
    pub fn append_str(&mut self, text: &str) -> bool {
        self.span.append_bytes(text.as_bytes())
    }

    /// Reinterprets the remaining bytes as the scalar view of the same text.
    /// No copy. Returns `None` if the window does not sit on scalar
    /// boundaries.
    pub fn to_scalars(&self) -> Option<ScalarView> {
        if self.span.is_scalar_aligned() {
            Some(ScalarView::from_span(self.span.clone()))
        } else {
            None
        }
    }

    /// Records that `expected` failed to match at the current offset.
    pub fn note_expected(&mut self, expected: &'static str) {
        self.span.note_expected(expected);
    }

    /// Returns the failure trace accumulated so far.
    pub fn trace(&self) -> &FailureTrace {
        self.span.trace()
    }
}

impl From<ScalarView> for ByteView {
    fn from(scalars: ScalarView) -> Self {
        ByteView::from_span(scalars.into_span())
    }
}

impl Input for ByteView {
    fn len(&self) -> usize {
        self.span.byte_len()
    }

    fn byte_len(&self) -> usize {
        self.span.byte_len()
    }

    fn checkpoint(&self) -> Checkpoint {
        self.span.checkpoint()
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.span.restore(checkpoint);
    }

    fn take_rest(&mut self) -> Self {
        ByteView {
            span: self.span.take_rest(),
        }
    }

    fn append(&mut self, suffix: &Self) -> bool {
        self.span.append_bytes(suffix.span.bytes())
    }

    fn truncate(&mut self, byte_len: usize) {
        self.span.truncate(byte_len);
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for ByteView {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteView {}

impl PartialEq<&[u8]> for ByteView {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<ByteView> for &[u8] {
    fn eq(&self, other: &ByteView) -> bool {
        *self == other.as_bytes()
    }
}
