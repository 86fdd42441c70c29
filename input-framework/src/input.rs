use crate::checkpoint::Checkpoint;

/// The sequence contract combinators are generic over.
///
/// An implementation is a cursor over an immutable backing buffer: consuming
/// elements is offset arithmetic and never copies the untouched suffix, and
/// a failed parse restores the cursor with [`restore`](Input::restore) so the
/// view is indistinguishable from its pre-call state (the failure trace
/// excepted, which is diagnostics only).
pub trait Input: Clone {
    /// Number of elements remaining (scalars or bytes, per the view).
    fn len(&self) -> usize;

    /// Returns `true` if no elements remain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining content size in bytes, independent of the element type.
    fn byte_len(&self) -> usize;

    /// Saves the current window for backtracking.
    fn checkpoint(&self) -> Checkpoint;

    /// Restores a previously saved window. Only valid across operations that
    /// do not append.
    fn restore(&mut self, checkpoint: Checkpoint);

    /// Splits off everything from the current position to the end. The
    /// suffix has the same type as the view itself.
    fn take_rest(&mut self) -> Self;

    /// Appends another view's content after this one. Returns `false`, with
    /// nothing appended, if the combined content would not be valid text.
    fn append(&mut self, suffix: &Self) -> bool;

    /// Drops content beyond the first `byte_len` bytes. This is the rollback
    /// used by printers, valid even after an append reallocated the buffer.
    fn truncate(&mut self, byte_len: usize);
}
