use std::marker::PhantomData;

use crate::error::PrintError;
use crate::map::{Map, MapConst, MapConvert};

/// The parse side of a combinator.
///
/// A combinator is constructed once and is immutable thereafter; the same
/// tree can serve concurrent calls as long as each call owns its input.
pub trait Parser {
    /// The input representation this combinator consumes.
    type Input;
    /// The value a successful parse produces.
    type Output;

    /// Attempts to consume a prefix of `input` and produce an output.
    ///
    /// On success the input is advanced past the consumed prefix. On failure
    /// the input is left exactly as received, so an enclosing combinator can
    /// retry an alternative from the same position. Failure carries no
    /// payload; diagnostic context goes through the input's failure trace.
    fn parse(&self, input: &mut Self::Input) -> Option<Self::Output>;

    /// Transforms the output through a one-way function. The result parses
    /// only; a bare function has no inverse to print through.
    fn map<F, T>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        Map::new(self, transform)
    }

    /// Discards the output and substitutes a fixed value. Intended for
    /// matchers whose outputs carry no data, which keeps the result
    /// printable.
    fn value<T>(self, output: T) -> MapConst<Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        MapConst::new(self, output)
    }

    /// Transforms the output through a bidirectional [`Conversion`], keeping
    /// the result printable.
    fn via<C>(self, conversion: C) -> MapConvert<Self, C>
    where
        Self: Sized,
        C: Conversion<Source = Self::Output>,
    {
        MapConvert::new(self, conversion)
    }
}

/// The print side of a combinator: the exact inverse of [`Parser::parse`]
/// wherever both are defined.
pub trait Printer: Parser {
    /// Appends a representation of `output` onto the end of `input`.
    ///
    /// Fails only when `output` is outside the combinator's representable
    /// domain, and never partially appends: either the full representation
    /// lands or the input is untouched.
    fn print(&self, output: &Self::Output, input: &mut Self::Input) -> Result<(), PrintError>;
}

/// A pure bidirectional mapping between two value representations, failable
/// in either direction.
pub trait Conversion {
    /// The representation on the parse side.
    type Source;
    /// The representation on the output side.
    type Target;

    /// Maps a parsed value forward, or rejects it.
    fn apply(&self, source: Self::Source) -> Option<Self::Target>;

    /// Maps an output value back, or rejects it.
    fn unapply(&self, target: &Self::Target) -> Option<Self::Source>;
}

/// The pass-through conversion.
pub struct Identity<T> {
    _value: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    pub fn new() -> Self {
        Self { _value: PhantomData }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Conversion for Identity<T> {
    type Source = T;
    type Target = T;

    fn apply(&self, source: T) -> Option<T> {
        Some(source)
    }

    fn unapply(&self, target: &T) -> Option<T> {
        Some(target.clone())
    }
}
