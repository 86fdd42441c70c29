use combinator_framework::{Conversion, Identity, Parser, PrintError, Printer, ScalarView, Seq};

/// Matches and prints a fixed piece of text.
#[derive(Clone)]
struct Lit(&'static str);

impl Parser for Lit {
    type Input = ScalarView;
    type Output = ();

    fn parse(&self, input: &mut ScalarView) -> Option<()> {
        if input.strip_prefix(self.0) {
            Some(())
        } else {
            input.note_expected(self.0);
            None
        }
    }
}

impl Printer for Lit {
    fn print(&self, _output: &(), input: &mut ScalarView) -> Result<(), PrintError> {
        input.push_str(self.0);
        Ok(())
    }
}

/// Consumes and returns a single scalar.
#[derive(Clone)]
struct AnyChar;

impl Parser for AnyChar {
    type Input = ScalarView;
    type Output = char;

    fn parse(&self, input: &mut ScalarView) -> Option<char> {
        match input.advance() {
            Some(ch) => Some(ch),
            None => {
                input.note_expected("any scalar");
                None
            }
        }
    }
}

impl Printer for AnyChar {
    fn print(&self, output: &char, input: &mut ScalarView) -> Result<(), PrintError> {
        let mut buf = [0u8; 4];
        input.push_str(output.encode_utf8(&mut buf));
        Ok(())
    }
}

/// Scalar <-> decimal digit value.
struct CharDigit;

impl Conversion for CharDigit {
    type Source = char;
    type Target = u32;

    fn apply(&self, source: char) -> Option<u32> {
        source.to_digit(10)
    }

    fn unapply(&self, target: &u32) -> Option<char> {
        char::from_digit(*target, 10)
    }
}

#[test]
fn test_sequence_outputs_tuple() {
    let pair = Seq::new((AnyChar, AnyChar));
    let mut input = ScalarView::new("ab!");
    assert_eq!(pair.parse(&mut input), Some(('a', 'b')));
    assert_eq!(input, "!");
}

#[test]
fn test_single_element_yields_bare_value() {
    let one = Seq::new((AnyChar,));
    let mut input = ScalarView::new("x");
    assert_eq!(one.parse(&mut input), Some('x'));
}

#[test]
fn test_sequence_failure_restores_input() {
    let both = Seq::new((Lit("a"), Lit("b")));
    let mut input = ScalarView::new("ax");
    assert_eq!(both.parse(&mut input), None);
    // The first child consumed "a" before the second failed; the sequence
    // must undo that too.
    assert_eq!(input, "ax");
}

#[test]
fn test_sequence_fails_iff_some_child_fails_in_order() {
    let all = Seq::new((Lit("a"), Lit("b"), Lit("c")));

    let mut input = ScalarView::new("abc");
    assert_eq!(all.parse(&mut input), Some(((), (), ())));
    assert!(input.as_str().is_empty());

    // C fails on the remainder left by A and B.
    let mut input = ScalarView::new("abx");
    assert_eq!(all.parse(&mut input), None);
    assert_eq!(input, "abx");

    // A fails immediately.
    let mut input = ScalarView::new("x");
    assert_eq!(all.parse(&mut input), None);
    assert_eq!(input, "x");
}

#[test]
fn test_sequence_print_concatenates_in_order() {
    let pair = Seq::new((Lit("("), AnyChar));
    let mut out = ScalarView::empty();
    pair.print(&((), 'z'), &mut out).unwrap();
    assert_eq!(out, "(z");
}

#[test]
fn test_sequence_print_rollback_on_child_failure() {
    // The second child only prints the constant 0.
    let seq = Seq::new((Lit("ok"), Lit("x").value(0u8)));
    let mut out = ScalarView::empty();
    let err = seq.print(&((), 1u8), &mut out).unwrap_err();
    assert_eq!(err, PrintError::OutsideDomain);
    // The first child's "ok" must not survive.
    assert_eq!(out, "");
}

#[test]
fn test_map_transforms_output() {
    let digit = AnyChar.map(|ch| ch as u32);
    let mut input = ScalarView::new("A");
    assert_eq!(digit.parse(&mut input), Some(65));
}

#[test]
fn test_value_substitutes_constant() {
    let marker = Lit("go").value(7u8);
    let mut input = ScalarView::new("go!");
    assert_eq!(marker.parse(&mut input), Some(7));
    assert_eq!(input, "!");

    let mut input = ScalarView::new("no");
    assert_eq!(marker.parse(&mut input), None);
    assert_eq!(input, "no");
}

#[test]
fn test_value_prints_through_unit_upstream() {
    let marker = Lit("go").value(7u8);
    let mut out = ScalarView::empty();
    marker.print(&7, &mut out).unwrap();
    assert_eq!(out, "go");
}

#[test]
fn test_via_rejected_conversion_backtracks() {
    let digit = AnyChar.via(CharDigit);
    let mut input = ScalarView::new("x1");
    // AnyChar consumes 'x', then the conversion rejects it.
    assert_eq!(digit.parse(&mut input), None);
    assert_eq!(input, "x1");
}

#[test]
fn test_via_round_trips() {
    let digit = AnyChar.via(CharDigit);
    let mut input = ScalarView::new("7");
    let value = digit.parse(&mut input).unwrap();
    assert_eq!(value, 7);

    let mut out = ScalarView::empty();
    digit.print(&value, &mut out).unwrap();
    assert_eq!(out, "7");
}

#[test]
fn test_via_identity_is_transparent() {
    let same = Seq::new((AnyChar,)).via(Identity::new());
    let mut input = ScalarView::new("q");
    assert_eq!(same.parse(&mut input), Some('q'));

    let mut out = ScalarView::empty();
    same.print(&'q', &mut out).unwrap();
    assert_eq!(out, "q");
}

#[test]
fn test_failure_trace_records_furthest_expected() {
    let all = Seq::new((Lit("a"), Lit("b")));
    let mut input = ScalarView::new("ax");
    assert_eq!(all.parse(&mut input), None);
    assert_eq!(input.trace().offset(), Some(1));
    assert_eq!(input.trace().expected(), Some("b"));
}
