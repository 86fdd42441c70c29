//! Input Framework
//!
//! Shared input substrate for the combinator framework: two views over the
//! same backing text (Unicode scalars and UTF-8 bytes), checkpoints for
//! backtracking, and a best-effort failure trace for diagnostics.

pub mod byte_view;
pub mod checkpoint;
pub mod diagnostics;
pub mod input;
pub mod scalar_view;
mod span;

pub use byte_view::ByteView;
pub use checkpoint::Checkpoint;
pub use diagnostics::FailureTrace;
pub use input::Input;
pub use scalar_view::ScalarView;
