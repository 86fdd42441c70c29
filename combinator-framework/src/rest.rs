use std::fmt;
use std::marker::PhantomData;

use input_framework::Input;

use crate::error::PrintError;
use crate::traits::{Parser, Printer};

/// Consumes everything to the end of the input and returns it as its output.
///
/// Parsing is total: it succeeds on any input, including an empty one, and
/// leaves the input empty. Printing appends the output's full contents.
/// Commonly the final element of a sequence, delegating "everything left
/// over" to downstream logic.
pub struct Rest<In> {
    _input: PhantomData<fn(In) -> In>,
}

impl<In> Rest<In> {
    pub fn new() -> Self {
        Self { _input: PhantomData }
    }
}

impl<In> Default for Rest<In> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In> Clone for Rest<In> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<In> fmt::Debug for Rest<In> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rest")
    }
}

impl<In: Input> Parser for Rest<In> {
    type Input = In;
    type Output = In;

    fn parse(&self, input: &mut In) -> Option<In> {
        Some(input.take_rest())
    }
}

impl<In: Input> Printer for Rest<In> {
    fn print(&self, output: &In, input: &mut In) -> Result<(), PrintError> {
        if input.append(output) {
            Ok(())
        } else {
            Err(PrintError::InvalidText)
        }
    }
}
