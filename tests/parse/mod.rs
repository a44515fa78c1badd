use isotime::{
    fmt::iso8601::{Parser, Printer},
    parse_time_string, parse_timezone_offset, ErrorKind, OffsetDirection,
    TimeOfDay, TimezoneOffset,
};

fn parts(t: TimeOfDay) -> (u8, u8, u8, u32) {
    (t.hour(), t.minute(), t.second(), t.millisecond())
}

fn offset_parts(offset: TimezoneOffset) -> (u8, u8, u8, i8) {
    (
        offset.hour(),
        offset.minute(),
        offset.second(),
        offset.direction().signum(),
    )
}

fn kind(input: &str) -> ErrorKind {
    parse_time_string(input).unwrap_err().kind()
}

#[test]
fn compact_strings() {
    let _ = crate::Logger::init();

    let t = parse_time_string("123045").unwrap();
    assert_eq!(parts(t), (12, 30, 45, 0));
    assert_eq!(offset_parts(t.offset()), (0, 0, 0, 0));

    let t = parse_time_string("123045+01").unwrap();
    assert_eq!(parts(t), (12, 30, 45, 0));
    assert_eq!(offset_parts(t.offset()), (1, 0, 0, 1));
}

#[test]
fn delimited_strings_match_compact() {
    let _ = crate::Logger::init();

    for (compact, delimited) in [
        ("000000", "00:00:00"),
        ("235959", "23:59:59"),
        ("240000", "24:00:00"),
        ("0930", "09:30"),
    ] {
        assert_eq!(
            parse_time_string(compact).unwrap(),
            parse_time_string(delimited).unwrap(),
        );
    }
}

#[test]
fn mixed_delimiters() {
    let _ = crate::Logger::init();

    assert_eq!(kind("12:3045"), ErrorKind::Delimiter);
    assert_eq!(kind("1230:45"), ErrorKind::Delimiter);
}

#[test]
fn fraction_depth() {
    let _ = crate::Logger::init();

    let got = |s| parts(parse_time_string(s).unwrap());
    assert_eq!(got("12.5"), (12, 30, 0, 0));
    assert_eq!(got("12:30.5"), (12, 30, 30, 0));
    assert_eq!(got("12:30:30.500"), (12, 30, 30, 500));
}

#[test]
fn zero_offset_designator() {
    let _ = crate::Logger::init();

    let t = parse_time_string("14Z").unwrap();
    assert_eq!(parts(t), (14, 0, 0, 0));
    assert_eq!(offset_parts(t.offset()), (0, 0, 0, 0));

    assert_eq!(kind("14Z5"), ErrorKind::ZeroOffsetPosition);
}

#[test]
fn signed_offsets() {
    let _ = crate::Logger::init();

    let t = parse_time_string("12:30+05:00").unwrap();
    assert_eq!(offset_parts(t.offset()), (5, 0, 0, 1));

    let t = parse_time_string("12:30-05:30").unwrap();
    assert_eq!(offset_parts(t.offset()), (5, 30, 0, -1));
    assert_eq!(t.offset().to_seconds(), -19_800);
}

#[test]
fn nested_designator() {
    let _ = crate::Logger::init();

    assert_eq!(kind("12:30+05Z"), ErrorKind::TimezoneNesting);
    assert_eq!(kind("12:30-05+01"), ErrorKind::TimezoneNesting);
    assert_eq!(kind("12:30-05:99"), ErrorKind::Range);
    assert_eq!(
        parse_timezone_offset("+05").unwrap_err().kind(),
        ErrorKind::TimezoneNesting,
    );

    let err = parse_time_string("12:30+05Z").unwrap_err();
    insta::assert_snapshot!(
        err,
        @"failed to parse UTC offset after designator '+' at index 5: unexpected time zone designator 'Z' at index 8, time zone designators may not appear inside a UTC offset",
    );
}

#[test]
fn elements_cut_short() {
    let _ = crate::Logger::init();

    let got = |s| parts(parse_time_string(s).unwrap());
    assert_eq!(got("123"), (12, 0, 0, 0));
    assert_eq!(got("12:3"), (12, 0, 0, 0));
    assert_eq!(got("12:30:"), (12, 30, 0, 0));
    assert_eq!(got("1230456"), (12, 30, 45, 0));

    let t = parse_time_string("12:3Z").unwrap();
    assert_eq!(parts(t), (12, 0, 0, 0));
    assert_eq!(t.offset(), TimezoneOffset::UNSPECIFIED);

    assert_eq!(kind("1Z"), ErrorKind::Unterminated);
    assert_eq!(kind("-0530"), ErrorKind::Unterminated);
}

#[test]
fn designator_first() {
    let _ = crate::Logger::init();

    assert_eq!(kind("Z5"), ErrorKind::ZeroOffsetPosition);
    assert_eq!(kind("ZZ"), ErrorKind::ZeroOffsetPosition);
    assert_eq!(kind("-5"), ErrorKind::Length);
}

#[test]
fn out_of_range() {
    let _ = crate::Logger::init();

    assert_eq!(kind("25:00"), ErrorKind::Range);
    assert_eq!(kind("12:60"), ErrorKind::Range);
    assert_eq!(kind("12:30:60"), ErrorKind::Range);
    assert!(parse_time_string("25:00").unwrap_err().is_range());
    assert!(parse_time_string("24:59:59").is_ok());
}

#[test]
fn too_short() {
    let _ = crate::Logger::init();

    assert_eq!(kind(""), ErrorKind::Length);
    assert_eq!(kind("1"), ErrorKind::Length);
    assert_eq!(kind("Z"), ErrorKind::Length);
}

#[test]
fn bad_digit() {
    let _ = crate::Logger::init();

    let err = parse_time_string("1a:30").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Digit);
    insta::assert_snapshot!(err, @"expected number at index 1, but found 'a'");
}

#[test]
fn offset_only_entry_point() {
    let _ = crate::Logger::init();

    let offset = parse_timezone_offset("0530").unwrap();
    assert_eq!(offset_parts(offset), (5, 30, 0, 0));
    assert_eq!(offset.direction(), OffsetDirection::Unspecified);

    let offset = parse_timezone_offset("05:30:15.5").unwrap();
    assert_eq!(offset_parts(offset), (5, 30, 15, 0));

    insta::assert_snapshot!(
        parse_timezone_offset("05:75").unwrap_err(),
        @"parameter 'offset minute' with value 75 is not in the required range of 0..=59",
    );
}

#[cfg(feature = "std")]
#[test]
fn errors_are_std_errors() {
    let _ = crate::Logger::init();

    let err: Box<dyn std::error::Error> =
        Box::new(parse_time_string("1Z").unwrap_err());
    assert_eq!(
        err.to_string(),
        "unexpected end of time string, expected two digit hour",
    );
}

#[test]
fn from_str_and_display() {
    let _ = crate::Logger::init();

    for input in [
        "00:00:00",
        "12:30:45.123",
        "24:00:00",
        "12:30:45-05:30",
        "12:30:45+14:00:30",
    ] {
        let t: TimeOfDay = input.parse().unwrap();
        assert_eq!(t.to_string(), input);
    }

    static BASIC: Printer = Printer::new().extended(false);
    let t: TimeOfDay = "12:30:45.5-0100".parse().unwrap();
    assert_eq!(BASIC.time_to_string(&t), "123045.005-0100");
}

#[test]
fn strict_midnight_parser() {
    let _ = crate::Logger::init();

    static STRICT: Parser = Parser::new().strict_midnight(true);
    assert!(STRICT.parse_time("24:00").is_ok());
    assert_eq!(
        STRICT.parse_time("24:00:30").unwrap_err().kind(),
        ErrorKind::Range
    );
}

quickcheck::quickcheck! {
    fn prop_compact_and_delimited(hour: u8, minute: u8, second: u8) -> bool {
        let (hour, minute, second) = (hour % 25, minute % 60, second % 60);
        let compact = format!("{hour:02}{minute:02}{second:02}");
        let delimited = format!("{hour:02}:{minute:02}:{second:02}");
        let want = (hour, minute, second, 0);
        let (Ok(t1), Ok(t2)) =
            (parse_time_string(&compact), parse_time_string(&delimited))
        else {
            return false;
        };
        parts(t1) == want
            && parts(t2) == want
            && t1.offset() == TimezoneOffset::UNSPECIFIED
            && t1 == t2
    }
}
