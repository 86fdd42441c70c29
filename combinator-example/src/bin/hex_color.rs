//! Round-trips `#RRGGBB` color literals through the hex-color grammar.

use combinator_example::hex_color;
use combinator_framework::{Parser, Printer, ScalarView};

fn main() {
    let grammar = hex_color();

    for sample in ["#FF0000", "#00FF80", "#123ABC", "#nope", "plain text"] {
        let mut input = ScalarView::new(sample);
        match grammar.parse(&mut input) {
            Some(color) => {
                let mut printed = ScalarView::empty();
                match grammar.print(&color, &mut printed) {
                    Ok(()) => println!("{sample:12} -> {color:?} -> {printed}"),
                    Err(err) => println!("{sample:12} -> {color:?} -> print failed: {err}"),
                }
            }
            None => {
                let trace = input.trace();
                println!(
                    "{sample:12} -> no match (expected {:?} at byte {:?})",
                    trace.expected(),
                    trace.offset()
                );
            }
        }
    }
}
