use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use combinator_framework::{
    Conversion, Input, Parser, PrintError, Printer, ScalarView, Seq,
};

// --- Bench-local leaf combinators ---

#[derive(Clone)]
struct Lit(&'static str);

impl Parser for Lit {
    type Input = ScalarView;
    type Output = ();

    fn parse(&self, input: &mut ScalarView) -> Option<()> {
        if input.strip_prefix(self.0) {
            Some(())
        } else {
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

#[derive(Clone)]
struct HexByte;

impl Parser for HexByte {
    type Input = ScalarView;
    type Output = u8;

    fn parse(&self, input: &mut ScalarView) -> Option<u8> {
        let checkpoint = input.checkpoint();
        let window = input.take(2)?;
        match u8::from_str_radix(window.as_str(), 16) {
            Ok(value) if window.as_str().chars().all(|ch| ch.is_ascii_hexdigit()) => Some(value),
            _ => {
                input.restore(checkpoint);
                None
            }
        }
    }
}

impl Printer for HexByte {
    fn print(&self, output: &u8, input: &mut ScalarView) -> Result<(), PrintError> {
        input.push_str(&format!("{output:02X}"));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BenchColor {
    red: u8,
    green: u8,
    blue: u8,
}

struct ColorConversion;

impl Conversion for ColorConversion {
    type Source = ((), u8, u8, u8);
    type Target = BenchColor;

    fn apply(&self, ((), red, green, blue): Self::Source) -> Option<BenchColor> {
        Some(BenchColor { red, green, blue })
    }

    fn unapply(&self, color: &BenchColor) -> Option<Self::Source> {
        Some(((), color.red, color.green, color.blue))
    }
}

fn color_benchmark(c: &mut Criterion) {
    let grammar = Seq::new((Lit("#"), HexByte, HexByte, HexByte)).via(ColorConversion);
    let input = "#FF0000";
    let expected = BenchColor {
        red: 0xFF,
        green: 0x00,
        blue: 0x00,
    };

    let mut group = c.benchmark_group("color");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| {
            let mut view = ScalarView::new(black_box(input));
            let parsed = grammar.parse(&mut view);
            assert_eq!(parsed, Some(expected));
            parsed
        })
    });

    group.bench_function("print", |b| {
        b.iter(|| {
            let mut view = ScalarView::empty();
            grammar
                .print(black_box(&expected), &mut view)
                .expect("pure colors always print");
            view
        })
    });

    group.finish();
}

criterion_group!(benches, color_benchmark);
criterion_main!(benches);
