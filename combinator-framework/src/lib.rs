//! Combinator Framework
//!
//! Bidirectional parse/print combinators over the input-framework views.
//! A combinator is a plain value implementing [`Parser`] and, when every
//! piece of it is invertible, [`Printer`]; composition is a static tree
//! built once and invoked repeatedly, with all mutable state living in the
//! input passed to each call.

pub mod error;
pub mod from_scalar_view;
pub mod map;
pub mod rest;
pub mod seq;
pub mod traits;

pub use error::PrintError;
pub use from_scalar_view::FromScalarView;
pub use input_framework::{ByteView, Checkpoint, FailureTrace, Input, ScalarView};
pub use map::{Map, MapConst, MapConvert};
pub use rest::Rest;
pub use seq::Seq;
pub use traits::{Conversion, Identity, Parser, Printer};
