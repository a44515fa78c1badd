use std::{fmt::Write, hint::black_box as bb};

use criterion::Criterion;
use isotime::{fmt::iso8601::Printer, TimeOfDay, TimezoneOffset};

use crate::benchmark;

pub(super) fn define(c: &mut Criterion) {
    print_time(c);
}

/// Measures printing a time of day with milliseconds and an offset, in both
/// layouts, into a reused buffer.
fn print_time(c: &mut Criterion) {
    const NAME: &str = "print/time";

    let time = TimeOfDay::new(9, 46, 0, 250)
        .unwrap()
        .with_offset(TimezoneOffset::negative(5, 30, 0).unwrap());
    for (layout, printer, expected) in [
        ("extended", Printer::new(), "09:46:00.250-05:30"),
        ("basic", Printer::new().extended(false), "094600.250-0530"),
    ] {
        let mut buf = String::with_capacity(24);
        benchmark(c, format!("{NAME}/{layout}"), |b| {
            b.iter(|| {
                buf.clear();
                printer.print_time(bb(&time), &mut buf).unwrap();
                assert_eq!(buf, expected);
            })
        });
    }

    let mut buf = String::with_capacity(24);
    benchmark(c, format!("{NAME}/display"), |b| {
        b.iter(|| {
            buf.clear();
            write!(buf, "{}", bb(&time)).unwrap();
            assert_eq!(buf, "09:46:00.250-05:30");
        })
    });
}
