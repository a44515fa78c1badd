use std::hint::black_box as bb;

use criterion::Criterion;
use isotime::{
    fmt::iso8601::Parser, parse_time_string, TimeOfDay, TimezoneOffset,
};

use crate::benchmark;

pub(super) fn define(c: &mut Criterion) {
    parse_layouts(c);
    parse_fraction(c);
    parse_offset(c);
    parse_error(c);
}

/// Measures the time it takes to parse the same time of day written in the
/// basic and extended layouts.
fn parse_layouts(c: &mut Criterion) {
    const NAME: &str = "parse/layout";

    let expected = TimeOfDay::new(9, 46, 0, 0).unwrap();
    for (layout, string) in [("basic", "094600"), ("extended", "09:46:00")] {
        benchmark(c, format!("{NAME}/{layout}"), |b| {
            b.iter(|| {
                let t = parse_time_string(bb(string)).unwrap();
                assert_eq!(t, expected);
            })
        });
    }
}

/// Measures parsing a fractional hour, which spills over into every smaller
/// unit.
fn parse_fraction(c: &mut Criterion) {
    const NAME: &str = "parse/fraction";
    const STRING: &str = "09.123456789";

    let expected = TimeOfDay::new(9, 7, 24, 444).unwrap();
    benchmark(c, format!("{NAME}/hour"), |b| {
        b.iter(|| {
            let t = parse_time_string(bb(STRING)).unwrap();
            assert_eq!(t, expected);
        })
    });
}

/// Measures parsing a time string that ends with a signed offset, which
/// requires scanning the offset as well.
fn parse_offset(c: &mut Criterion) {
    const NAME: &str = "parse/offset";
    const STRING: &str = "09:46:00.250-05:30";

    let expected = TimeOfDay::new(9, 46, 0, 250)
        .unwrap()
        .with_offset(TimezoneOffset::negative(5, 30, 0).unwrap());
    benchmark(c, format!("{NAME}/str"), |b| {
        b.iter(|| {
            let t = parse_time_string(bb(STRING)).unwrap();
            assert_eq!(t, expected);
        })
    });

    static PARSER: Parser = Parser::new();
    benchmark(c, format!("{NAME}/bytes"), |b| {
        b.iter(|| {
            let t = PARSER.parse_time_bytes(bb(STRING.as_bytes())).unwrap();
            assert_eq!(t, expected);
        })
    });
}

/// Measures how long it takes to reject a string. This includes building
/// the error chain for the offset.
fn parse_error(c: &mut Criterion) {
    const NAME: &str = "parse/error";
    const STRING: &str = "09:46:00+05Z";

    benchmark(c, format!("{NAME}/nested"), |b| {
        b.iter(|| {
            assert!(parse_time_string(bb(STRING)).is_err());
        })
    });
}
