use input_framework::Input;

use crate::error::PrintError;
use crate::traits::{Parser, Printer};

/// Runs an ordered, fixed-arity tuple of combinators in sequence.
///
/// The output is the tuple of the children's outputs (the bare value for a
/// one-element tuple). If any child fails, the whole sequence fails and the
/// input is restored to where the sequence started. The sequence prints when
/// every child prints, appending each child's share in order.
///
/// ```
/// use combinator_framework::{Parser, Rest, ScalarView, Seq};
///
/// let rest = Seq::new((Rest::new(),));
/// let mut input = ScalarView::new("leftover");
/// assert_eq!(rest.parse(&mut input).unwrap(), "leftover");
/// ```
pub struct Seq<P> {
    parsers: P,
}

impl<P> Seq<P> {
    /// Wraps a tuple of combinators that share one input representation.
    pub fn new(parsers: P) -> Self {
        Self { parsers }
    }
}

impl<P: Parser> Parser for Seq<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: &mut Self::Input) -> Option<Self::Output> {
        self.parsers.parse(input)
    }
}

impl<P: Printer> Printer for Seq<P> {
    fn print(&self, output: &Self::Output, input: &mut Self::Input) -> Result<(), PrintError> {
        self.parsers.print(output, input)
    }
}

// A one-element sequence yields the child's output directly, not a 1-tuple.
impl<In, P0> Parser for (P0,)
where
    In: Input,
    P0: Parser<Input = In>,
{
    type Input = In;
    type Output = P0::Output;

    fn parse(&self, input: &mut In) -> Option<Self::Output> {
        self.0.parse(input)
    }
}

impl<In, P0> Printer for (P0,)
where
    In: Input,
    P0: Printer<Input = In>,
{
    fn print(&self, output: &Self::Output, input: &mut In) -> Result<(), PrintError> {
        self.0.print(output, input)
    }
}

macro_rules! impl_sequence {
    ($($parser:ident . $idx:tt),+) => {
        impl<In, $($parser),+> Parser for ($($parser,)+)
        where
            In: Input,
            $($parser: Parser<Input = In>,)+
        {
            type Input = In;
            type Output = ($($parser::Output,)+);

            fn parse(&self, input: &mut In) -> Option<Self::Output> {
                let checkpoint = input.checkpoint();
                Some(($(
                    match self.$idx.parse(input) {
                        Some(output) => output,
                        None => {
                            // Earlier children consumed; undo them all.
                            input.restore(checkpoint);
                            return None;
                        }
                    },
                )+))
            }
        }

        impl<In, $($parser),+> Printer for ($($parser,)+)
        where
            In: Input,
            $($parser: Printer<Input = In>,)+
        {
            fn print(&self, output: &Self::Output, input: &mut In) -> Result<(), PrintError> {
                let mark = input.byte_len();
                $(
                    if let Err(err) = self.$idx.print(&output.$idx, input) {
                        input.truncate(mark);
                        return Err(err);
                    }
                )+
                Ok(())
            }
        }
    };
}

impl_sequence!(P0.0, P1.1);
impl_sequence!(P0.0, P1.1, P2.2);
impl_sequence!(P0.0, P1.1, P2.2, P3.3);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6, P7.7);
