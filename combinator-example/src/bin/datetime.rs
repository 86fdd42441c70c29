//! Round-trips RFC-3339-style UTC timestamps, built from nested sequences
//! with range-checking conversions.

use combinator_example::{FixedUInt, Literal};
use combinator_framework::{Conversion, Parser, Printer, ScalarView, Seq};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timestamp {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// `YYYY-MM-DD` tuple to a validated (year, month, day) triple.
struct DateConversion;

impl Conversion for DateConversion {
    type Source = (u32, (), u32, (), u32);
    type Target = (u32, u32, u32);

    fn apply(&self, (year, (), month, (), day): Self::Source) -> Option<Self::Target> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some((year, month, day))
        } else {
            None
        }
    }

    fn unapply(&self, &(year, month, day): &Self::Target) -> Option<Self::Source> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some((year, (), month, (), day))
        } else {
            None
        }
    }
}

/// `hh:mm:ss` tuple to a validated (hour, minute, second) triple.
struct TimeConversion;

impl Conversion for TimeConversion {
    type Source = (u32, (), u32, (), u32);
    type Target = (u32, u32, u32);

    fn apply(&self, (hour, (), minute, (), second): Self::Source) -> Option<Self::Target> {
        // Second 60 admits leap seconds.
        if hour < 24 && minute < 60 && second <= 60 {
            Some((hour, minute, second))
        } else {
            None
        }
    }

    fn unapply(&self, &(hour, minute, second): &Self::Target) -> Option<Self::Source> {
        if hour < 24 && minute < 60 && second <= 60 {
            Some((hour, (), minute, (), second))
        } else {
            None
        }
    }
}

struct TimestampConversion;

impl Conversion for TimestampConversion {
    type Source = ((u32, u32, u32), (), (u32, u32, u32), ());
    type Target = Timestamp;

    fn apply(&self, ((year, month, day), (), (hour, minute, second), ()): Self::Source) -> Option<Timestamp> {
        Some(Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    fn unapply(&self, ts: &Timestamp) -> Option<Self::Source> {
        Some((
            (ts.year, ts.month, ts.day),
            (),
            (ts.hour, ts.minute, ts.second),
            (),
        ))
    }
}

fn timestamp() -> impl Printer<Input = ScalarView, Output = Timestamp> {
    let date = Seq::new((
        FixedUInt::new(4),
        Literal::new("-"),
        FixedUInt::new(2),
        Literal::new("-"),
        FixedUInt::new(2),
    ))
    .via(DateConversion);

    let time = Seq::new((
        FixedUInt::new(2),
        Literal::new(":"),
        FixedUInt::new(2),
        Literal::new(":"),
        FixedUInt::new(2),
    ))
    .via(TimeConversion);

    Seq::new((date, Literal::new("T"), time, Literal::new("Z"))).via(TimestampConversion)
}

fn main() {
    let grammar = timestamp();

    for sample in [
        "2023-01-02T03:04:05Z",
        "1999-12-31T23:59:59Z",
        "2023-13-01T00:00:00Z",
        "not a date",
    ] {
        let mut input = ScalarView::new(sample);
        match grammar.parse(&mut input) {
            Some(ts) => {
                let mut printed = ScalarView::empty();
                match grammar.print(&ts, &mut printed) {
                    Ok(()) => println!("{sample:22} -> {ts:?} -> {printed}"),
                    Err(err) => println!("{sample:22} -> {ts:?} -> print failed: {err}"),
                }
            }
            None => {
                let trace = input.trace();
                println!(
                    "{sample:22} -> no match (expected {:?} at byte {:?})",
                    trace.expected(),
                    trace.offset()
                );
            }
        }
    }
}
