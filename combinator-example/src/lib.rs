//! Sample leaf combinators built on the combinator framework.
//!
//! The framework's core knows nothing about concrete grammars; these leaves
//! show how a combinator catalogue plugs into the [`Parser`]/[`Printer`]
//! contract from the outside. The demo binaries assemble them into small
//! round-tripping grammars.

use combinator_framework::{
    Conversion, Input, Parser, PrintError, Printer, ScalarView, Seq,
};

/// Matches and prints a fixed piece of text, producing no data.
#[derive(Clone, Debug)]
pub struct Literal {
    text: &'static str,
}

impl Literal {
    pub fn new(text: &'static str) -> Self {
        Self { text }
    }
}

impl Parser for Literal {
    type Input = ScalarView;
    type Output = ();

    fn parse(&self, input: &mut ScalarView) -> Option<()> {
        if input.strip_prefix(self.text) {
            Some(())
        } else {
            input.note_expected(self.text);
            None
        }
    }
}

impl Printer for Literal {
    fn print(&self, _output: &(), input: &mut ScalarView) -> Result<(), PrintError> {
        input.push_str(self.text);
        Ok(())
    }
}

/// A fixed-width unsigned decimal integer.
///
/// Prints with leading zeros; a value too wide for the field is outside the
/// printable domain.
#[derive(Clone, Debug)]
pub struct FixedUInt {
    digits: usize,
}

impl FixedUInt {
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }
}

impl Parser for FixedUInt {
    type Input = ScalarView;
    type Output = u32;

    fn parse(&self, input: &mut ScalarView) -> Option<u32> {
        let checkpoint = input.checkpoint();
        let window = match input.take(self.digits) {
            Some(window) => window,
            None => {
                input.note_expected("decimal digits");
                return None;
            }
        };
        // str::parse would accept a leading '+' inside the window.
        if !window.as_str().chars().all(|ch| ch.is_ascii_digit()) {
            input.restore(checkpoint);
            input.note_expected("decimal digits");
            return None;
        }
        match window.as_str().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                // Overflow for very wide fields.
                input.restore(checkpoint);
                input.note_expected("decimal digits");
                None
            }
        }
    }
}

impl Printer for FixedUInt {
    fn print(&self, output: &u32, input: &mut ScalarView) -> Result<(), PrintError> {
        let text = format!("{output:0width$}", width = self.digits);
        if text.len() != self.digits {
            return Err(PrintError::OutsideDomain);
        }
        input.push_str(&text);
        Ok(())
    }
}

/// Two hexadecimal scalars to a byte. Prints uppercase, parses either case.
#[derive(Clone, Debug)]
pub struct HexByte;

impl Parser for HexByte {
    type Input = ScalarView;
    type Output = u8;

    fn parse(&self, input: &mut ScalarView) -> Option<u8> {
        let checkpoint = input.checkpoint();
        let window = match input.take(2) {
            Some(window) => window,
            None => {
                input.note_expected("two hex digits");
                return None;
            }
        };
        if !window.as_str().chars().all(|ch| ch.is_ascii_hexdigit()) {
            input.restore(checkpoint);
            input.note_expected("two hex digits");
            return None;
        }
        u8::from_str_radix(window.as_str(), 16).ok()
    }
}

impl Printer for HexByte {
    fn print(&self, output: &u8, input: &mut ScalarView) -> Result<(), PrintError> {
        input.push_str(&format!("{output:02X}"));
        Ok(())
    }
}

/// The color value produced by the `#RRGGBB` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Conversion between the raw grammar tuple and [`Rgb`].
#[derive(Clone, Debug)]
pub struct RgbConversion;

impl Conversion for RgbConversion {
    type Source = ((), u8, u8, u8);
    type Target = Rgb;

    fn apply(&self, ((), red, green, blue): Self::Source) -> Option<Rgb> {
        Some(Rgb { red, green, blue })
    }

    fn unapply(&self, color: &Rgb) -> Option<Self::Source> {
        Some(((), color.red, color.green, color.blue))
    }
}

/// Builds the `#RRGGBB` parser-printer.
pub fn hex_color() -> impl Printer<Input = ScalarView, Output = Rgb> {
    Seq::new((Literal::new("#"), HexByte, HexByte, HexByte)).via(RgbConversion)
}
