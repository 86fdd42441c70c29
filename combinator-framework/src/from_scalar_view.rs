use input_framework::{ByteView, ScalarView};

use crate::error::PrintError;
use crate::traits::{Parser, Printer};

/// Lifts a combinator over the scalar view of text into one over the UTF-8
/// byte view of the same text.
///
/// This lets the bulk of a combinator catalogue be written once against
/// logical scalars and still run against byte input: the remaining bytes are
/// reinterpreted as scalars without copying, the wrapped combinator runs,
/// and whatever remains is reinterpreted back, success or not.
pub struct FromScalarView<P> {
    parser: P,
}

impl<P> FromScalarView<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P> Parser for FromScalarView<P>
where
    P: Parser<Input = ScalarView>,
{
    type Input = ByteView;
    type Output = P::Output;

    fn parse(&self, input: &mut ByteView) -> Option<P::Output> {
        // A window starting or ending mid-scalar cannot be reinterpreted;
        // report an ordinary failure without consuming.
        let mut scalars = input.to_scalars()?;
        let output = self.parser.parse(&mut scalars);
        // Install the re-encoded remainder whether or not the wrapped parse
        // succeeded; on failure it equals the original window.
        *input = scalars.into_bytes();
        output
    }
}

impl<P> Printer for FromScalarView<P>
where
    P: Printer<Input = ScalarView>,
{
    fn print(&self, output: &P::Output, input: &mut ByteView) -> Result<(), PrintError> {
        let mut scalars = ScalarView::empty();
        self.parser.print(output, &mut scalars)?;
        if input.append_str(scalars.as_str()) {
            Ok(())
        } else {
            Err(PrintError::InvalidText)
        }
    }
}
