use input_framework::Input;

use crate::error::PrintError;
use crate::traits::{Conversion, Parser, Printer};

/// Transforms a combinator's output through a one-way function.
///
/// Parse-only: an arbitrary function cannot be inverted, so `Map` never
/// implements [`Printer`]. Use [`MapConvert`] when the transform must be
/// reversible.
pub struct Map<P, F> {
    parser: P,
    transform: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(parser: P, transform: F) -> Self {
        Self { parser, transform }
    }
}

impl<P, F, T> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> T,
{
    type Input = P::Input;
    type Output = T;

    fn parse(&self, input: &mut Self::Input) -> Option<T> {
        self.parser.parse(input).map(&self.transform)
    }
}

/// Discards the upstream output and substitutes a fixed value.
///
/// Printing recovers the upstream output via `Default`, which is only
/// meaningful when the upstream carries no data (unit tuples of token
/// matchers). Printing a value other than the configured constant fails.
pub struct MapConst<P, T> {
    parser: P,
    output: T,
}

impl<P, T> MapConst<P, T> {
    pub(crate) fn new(parser: P, output: T) -> Self {
        Self { parser, output }
    }
}

impl<P, T> Parser for MapConst<P, T>
where
    P: Parser,
    T: Clone,
{
    type Input = P::Input;
    type Output = T;

    fn parse(&self, input: &mut Self::Input) -> Option<T> {
        self.parser.parse(input)?;
        Some(self.output.clone())
    }
}

impl<P, T> Printer for MapConst<P, T>
where
    P: Printer,
    P::Output: Default,
    T: Clone + PartialEq,
{
    fn print(&self, output: &T, input: &mut Self::Input) -> Result<(), PrintError> {
        if *output != self.output {
            return Err(PrintError::OutsideDomain);
        }
        self.parser.print(&P::Output::default(), input)
    }
}

/// Transforms a combinator's output through a bidirectional [`Conversion`].
///
/// This is what keeps a sequence printable through a non-identity transform:
/// the conversion is un-applied before anything is appended.
pub struct MapConvert<P, C> {
    parser: P,
    conversion: C,
}

impl<P, C> MapConvert<P, C> {
    pub(crate) fn new(parser: P, conversion: C) -> Self {
        Self { parser, conversion }
    }
}

impl<P, C> Parser for MapConvert<P, C>
where
    P: Parser,
    P::Input: Input,
    C: Conversion<Source = P::Output>,
{
    type Input = P::Input;
    type Output = C::Target;

    fn parse(&self, input: &mut Self::Input) -> Option<C::Target> {
        let checkpoint = input.checkpoint();
        let source = self.parser.parse(input)?;
        match self.conversion.apply(source) {
            Some(target) => Some(target),
            None => {
                // A rejected conversion is an ordinary parse failure, so the
                // upstream consumption must be undone too.
                input.restore(checkpoint);
                None
            }
        }
    }
}

impl<P, C> Printer for MapConvert<P, C>
where
    P: Printer,
    P::Input: Input,
    C: Conversion<Source = P::Output>,
{
    fn print(&self, output: &C::Target, input: &mut Self::Input) -> Result<(), PrintError> {
        let source = self
            .conversion
            .unapply(output)
            .ok_or(PrintError::NoInverse)?;
        self.parser.print(&source, input)
    }
}
