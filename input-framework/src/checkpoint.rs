/// A saved window over the backing buffer, used to support backtracking.
///
/// Restoring a checkpoint is pure offset assignment. It is only valid on the
/// view the checkpoint was taken from, and only across operations that do not
/// reallocate the buffer (parsing never does; printing uses
/// [`Input::truncate`](crate::Input::truncate) for rollback instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    start: usize,
    end: usize,
}

impl Checkpoint {
    /// Creates a checkpoint for the given byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the start byte offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end byte offset.
    pub fn end(&self) -> usize {
        self.end
    }
}
