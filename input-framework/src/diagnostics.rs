/// Best-effort record of the furthest offset at which a parse failure was
/// observed, together with a description of what was expected there.
///
/// The trace is carried by every view and survives checkpoint restores, so
/// an enclosing combinator that backtracks still leaves the deepest failure
/// visible for reporting. Control flow never depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureTrace {
    offset: Option<usize>,
    expected: Option<&'static str>,
}

impl FailureTrace {
    /// Returns the absolute byte offset of the furthest recorded failure.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns the description recorded at the furthest failure.
    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    /// Records a failure, keeping only the furthest one seen so far.
    pub(crate) fn note(&mut self, offset: usize, expected: &'static str) {
        if self.offset.map_or(true, |seen| offset >= seen) {
            self.offset = Some(offset);
            self.expected = Some(expected);
        }
    }
}
