use std::fmt;

use crate::byte_view::ByteView;
use crate::checkpoint::Checkpoint;
use crate::diagnostics::FailureTrace;
use crate::input::Input;
use crate::span::RawSpan;

/// A Unicode-scalar-stepping view over shared text.
///
/// This is the representation most text combinators are written against.
/// Its window always sits on scalar boundaries, so the content is valid text
/// by construction and appends cannot fail.
#[derive(Clone, Debug)]
pub struct ScalarView {
    span: RawSpan,
}

impl ScalarView {
    /// Creates a view over the given text.
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
        debug_assert!(span.is_scalar_aligned());
        Self { span }
    }

    pub(crate) fn into_span(self) -> RawSpan {
        self.span
    }

    /// Returns the remaining content.
    pub fn as_str(&self) -> &str {
        self.span.as_str()
    }

    /// Returns the next scalar without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Consumes and returns the next scalar.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.span.advance(ch.len_utf8());
        Some(ch)
    }

    /// Splits off the first `n` scalars, or returns `None` (consuming
    /// nothing) if fewer remain.
    pub fn take(&mut self, n: usize) -> Option<ScalarView> {
        let mut width = 0;
        let mut count = 0;
        for ch in self.as_str().chars() {
            if count == n {
                break;
            }
            width += ch.len_utf8();
            count += 1;
        }
        if count < n {
            return None;
        }
        Some(ScalarView {
            span: self.span.split_prefix(width),
        })
    }

    /// Consumes `prefix` if the content starts with it.
    pub fn strip_prefix(&mut self, prefix: &str) -> bool {
        if self.as_str().starts_with(prefix) {
            self.span.advance(prefix.len());
            true
        } else {
            false
        }
    }

    /// Appends text after the content.
    pub fn push_str(&mut self, text: &str) {
        let appended = self.span.append_bytes(text.as_bytes());
        debug_assert!(appended);
    }

    /// Reinterprets this view as the byte view of the same text. No copy.
    pub fn into_bytes(self) -> ByteView {
        ByteView::from_span(self.span)
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

impl Input for ScalarView {
    fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    fn is_empty(&self) -> bool {
        self.byte_len() == 0
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
        ScalarView {
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

impl fmt::Display for ScalarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq for ScalarView {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ScalarView {}

impl PartialEq<&str> for ScalarView {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ScalarView> for &str {
    fn eq(&self, other: &ScalarView) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let view = ScalarView::new("hé");
        assert_eq!(view.peek(), Some('h'));
        assert_eq!(view.as_str(), "hé");
    }

    #[test]
    fn test_advance_steps_scalars() {
        let mut view = ScalarView::new("héllo");
        assert_eq!(view.advance(), Some('h'));
        assert_eq!(view.advance(), Some('é'));
        assert_eq!(view.as_str(), "llo");
    }

    #[test]
    fn test_take_counts_scalars_not_bytes() {
        let mut view = ScalarView::new("héllo");
        let head = view.take(2).unwrap();
        assert_eq!(head, "hé");
        assert_eq!(view.as_str(), "llo");
    }

    #[test]
    fn test_take_too_many_consumes_nothing() {
        let mut view = ScalarView::new("hi");
        assert!(view.take(3).is_none());
        assert_eq!(view.as_str(), "hi");
    }

    #[test]
    fn test_strip_prefix() {
        let mut view = ScalarView::new("#FF");
        assert!(view.strip_prefix("#"));
        assert_eq!(view.as_str(), "FF");
        assert!(!view.strip_prefix("#"));
        assert_eq!(view.as_str(), "FF");
    }

    #[test]
    fn test_len_is_scalar_count() {
        let view = ScalarView::new("hé");
        assert_eq!(view.len(), 2);
        assert_eq!(view.byte_len(), 3);
    }

    #[test]
    fn test_push_str_then_parse_back() {
        let mut view = ScalarView::empty();
        view.push_str("ab");
        view.push_str("cd");
        assert_eq!(view, "abcd");
    }

    #[test]
    fn test_restore_is_exact() {
        let mut view = ScalarView::new("abc");
        let checkpoint = view.checkpoint();
        view.advance();
        view.advance();
        view.restore(checkpoint);
        assert_eq!(view, "abc");
    }

    #[test]
    fn test_trace_survives_restore() {
        let mut view = ScalarView::new("abc");
        let checkpoint = view.checkpoint();
        view.advance();
        view.note_expected("digit");
        view.restore(checkpoint);
        assert_eq!(view.trace().offset(), Some(1));
        assert_eq!(view.trace().expected(), Some("digit"));
    }
}
