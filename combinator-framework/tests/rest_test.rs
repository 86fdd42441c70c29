use combinator_framework::{ByteView, Input, Parser, PrintError, Printer, Rest, ScalarView};

#[test]
fn test_rest_consumes_everything() {
    let rest = Rest::new();
    let mut input = ScalarView::new("héllo");
    let output = rest.parse(&mut input).unwrap();
    assert_eq!(output, "héllo");
    assert!(input.is_empty());
}

#[test]
fn test_rest_succeeds_on_empty_input() {
    let rest = Rest::new();
    let mut input = ScalarView::new("");
    let output = rest.parse(&mut input).unwrap();
    assert!(output.is_empty());
    assert!(input.is_empty());
}

#[test]
fn test_rest_over_byte_view() {
    let rest = Rest::new();
    let mut input = ByteView::new("é!");
    let output = rest.parse(&mut input).unwrap();
    assert_eq!(output.as_bytes(), "é!".as_bytes());
    assert_eq!(input.byte_len(), 0);
}

#[test]
fn test_rest_print_appends_contents() {
    let rest = Rest::new();
    let mut out = ScalarView::new("head:");
    rest.print(&ScalarView::new("tail"), &mut out).unwrap();
    assert_eq!(out, "head:tail");
}

#[test]
fn test_rest_round_trip() {
    let rest = Rest::new();
    let mut out = ScalarView::empty();
    rest.print(&ScalarView::new("é and more"), &mut out).unwrap();

    let parsed = rest.parse(&mut out).unwrap();
    assert_eq!(parsed, "é and more");
    assert!(out.is_empty());
}

#[test]
fn test_rest_print_refuses_invalid_byte_join() {
    // A byte window ending mid-scalar cannot take arbitrary text after it.
    let mut source = ByteView::new("aé");
    let mut target = source.take(2).unwrap();
    let before = target.as_bytes().to_vec();

    let rest = Rest::new();
    let err = rest.print(&ByteView::new("x"), &mut target).unwrap_err();
    assert_eq!(err, PrintError::InvalidText);
    assert_eq!(target.as_bytes(), before.as_slice());
}
