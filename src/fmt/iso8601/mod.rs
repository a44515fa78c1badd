/*!
A parser and printer for ISO 8601 time of day strings.

# Grammar

The parser accepts strings of the following form:

```text
time       = hour [ minute [ second ] ] [ fraction ] [ designator ]
hour       = 2DIGIT
minute     = [ ":" ] 2DIGIT
second     = [ ":" ] 2DIGIT
fraction   = ( "." | "," ) 1*DIGIT
designator = "Z" | ( "+" | "-" ) offset
offset     = hour [ minute [ second ] ] [ fraction ]
```

The `:` delimiters must either all be present (the "extended" layout) or
all be absent (the "basic" layout). Whichever is used after the hour binds
the rest of the string. The UTC offset after a `+` or `-` decides its own
layout independently of the time before it.

A fraction applies to the unit following the last element written. A
fractional hour becomes minutes, seconds and milliseconds. A fractional
minute becomes seconds and milliseconds. The digits following the second,
on the other hand, are taken as a count of milliseconds as written. A
fraction on the seconds of a UTC offset is accepted but discarded.

# Example

```
use isotime::fmt::iso8601::{Parser, Printer};

static PARSER: Parser = Parser::new();
static PRINTER: Printer = Printer::new().extended(false);

let t = PARSER.parse_time("12:30.5+05")?;
assert_eq!(PRINTER.time_to_string(&t), "123030+0500");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    error::{iso8601::Error as E, Error},
    time::{TimeOfDay, TimezoneOffset},
};

mod parser;
mod printer;

/// A parser for ISO 8601 time of day strings.
///
/// Parsers are cheap to copy and can be constructed in a `const` context,
/// so it's usually most convenient to put one in a `static`.
///
/// # Example
///
/// ```
/// use isotime::{fmt::iso8601::Parser, ErrorKind};
///
/// static PARSER: Parser = Parser::new().strict_midnight(true);
///
/// assert!(PARSER.parse_time("24:00:00").is_ok());
/// let err = PARSER.parse_time("24:00:01").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    p: parser::TimeParser,
}

impl Parser {
    /// Create a new ISO 8601 parser with the default configuration.
    #[inline]
    pub const fn new() -> Parser {
        Parser { p: parser::TimeParser::new() }
    }

    /// When enabled, an hour of `24` is only accepted when the minute,
    /// second and millisecond are all zero. That is, `24:00:00` is the only
    /// time allowed in the 24th hour.
    ///
    /// This is disabled by default, in which case `24:30` is accepted.
    /// This setting does not apply to the hour of a UTC offset.
    #[inline]
    pub const fn strict_midnight(self, yes: bool) -> Parser {
        Parser { p: self.p.strict_midnight(yes) }
    }

    /// Parse a time of day string.
    ///
    /// The returned time always has an offset. It is
    /// [`TimezoneOffset::UNSPECIFIED`] when the string had no designator or
    /// ended with `Z`.
    ///
    /// # Errors
    ///
    /// This returns an error when the input is not a valid ISO 8601 time of
    /// day string, or when any of its elements are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::{fmt::iso8601::Parser, OffsetDirection};
    ///
    /// static PARSER: Parser = Parser::new();
    ///
    /// let t = PARSER.parse_time("083015,250-0800")?;
    /// assert_eq!(t.hour(), 8);
    /// assert_eq!(t.second(), 15);
    /// assert_eq!(t.millisecond(), 250);
    /// assert_eq!(t.offset().direction(), OffsetDirection::Negative);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_time<I: AsRef<str>>(
        &self,
        input: I,
    ) -> Result<TimeOfDay, Error> {
        self.p.parse_time(input.as_ref())
    }

    /// Parse a time of day string from bytes.
    ///
    /// # Errors
    ///
    /// In addition to the errors returned by [`Parser::parse_time`], this
    /// returns an error of kind [`ErrorKind::Type`](crate::ErrorKind::Type)
    /// when the input is not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::{fmt::iso8601::Parser, ErrorKind};
    ///
    /// static PARSER: Parser = Parser::new();
    ///
    /// let t = PARSER.parse_time_bytes(b"1230")?;
    /// assert_eq!((t.hour(), t.minute()), (12, 30));
    ///
    /// let err = PARSER.parse_time_bytes(b"12\xFF30").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_time_bytes<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<TimeOfDay, Error> {
        let input = core::str::from_utf8(input.as_ref()).map_err(|err| {
            E::InvalidUtf8 { valid_up_to: err.valid_up_to() }
        })?;
        self.p.parse_time(input)
    }

    /// Parse the digits of a UTC offset without any leading designator.
    ///
    /// The direction of the offset returned is always
    /// [`OffsetDirection::Unspecified`](crate::OffsetDirection::Unspecified).
    ///
    /// # Errors
    ///
    /// This returns an error when the input is not a valid offset. In
    /// particular, a designator anywhere in the input is an error of kind
    /// [`ErrorKind::TimezoneNesting`](crate::ErrorKind::TimezoneNesting).
    pub fn parse_offset<I: AsRef<str>>(
        &self,
        input: I,
    ) -> Result<TimezoneOffset, Error> {
        self.p.parse_offset(input.as_ref())
    }

    /// Parse a designator on its own, as found at the end of a time string.
    ///
    /// This accepts `Z`, which produces [`TimezoneOffset::UNSPECIFIED`],
    /// or a `+` or `-` followed by the digits of an offset. For symmetry
    /// with the `Display` impl of [`TimezoneOffset`], digits without a sign
    /// are accepted too and are parsed like [`Parser::parse_offset`].
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::{fmt::iso8601::Parser, TimezoneOffset};
    ///
    /// static PARSER: Parser = Parser::new();
    ///
    /// let offset = PARSER.parse_designator("Z")?;
    /// assert_eq!(offset, TimezoneOffset::UNSPECIFIED);
    /// assert_eq!(
    ///     PARSER.parse_designator("+01:30")?,
    ///     TimezoneOffset::positive(1, 30, 0)?,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_designator<I: AsRef<str>>(
        &self,
        input: I,
    ) -> Result<TimezoneOffset, Error> {
        self.p.parse_designator(input.as_ref())
    }
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

/// A printer for ISO 8601 time of day strings.
///
/// By default, this prints the extended layout, i.e., with `:` delimiters.
///
/// The seconds are always written. The milliseconds are written only when
/// they are non-zero, and the offset only when its direction is specified.
/// The seconds of an offset are written only when they are non-zero.
///
/// # Example
///
/// ```
/// use isotime::{fmt::iso8601::Printer, TimeOfDay, TimezoneOffset};
///
/// let t = TimeOfDay::new(7, 0, 0, 0)?
///     .with_offset(TimezoneOffset::positive(9, 0, 0)?);
/// assert_eq!(Printer::new().time_to_string(&t), "07:00:00+09:00");
/// assert_eq!(
///     Printer::new().extended(false).time_to_string(&t),
///     "070000+0900",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Printer {
    p: printer::TimePrinter,
}

impl Printer {
    /// Create a new ISO 8601 printer with the default configuration.
    #[inline]
    pub const fn new() -> Printer {
        Printer { p: printer::TimePrinter::new() }
    }

    /// Whether to print the extended layout, with `:` delimiters between
    /// elements, or the basic layout without them.
    ///
    /// This is enabled by default.
    #[inline]
    pub const fn extended(self, yes: bool) -> Printer {
        Printer { p: self.p.extended(yes) }
    }

    /// Format a time of day into a string.
    pub fn time_to_string(&self, time: &TimeOfDay) -> alloc::string::String {
        let mut buf = alloc::string::String::with_capacity(24);
        // Writing into a `String` never fails.
        let _ = self.print_time(time, &mut buf);
        buf
    }

    /// Print a time of day to the writer given.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to `wtr` fails.
    pub fn print_time<W: core::fmt::Write>(
        &self,
        time: &TimeOfDay,
        wtr: W,
    ) -> core::fmt::Result {
        self.p.print_time(time, wtr)
    }

    /// Print a UTC offset designator to the writer given.
    ///
    /// This writes `Z` for [`TimezoneOffset::UNSPECIFIED`].
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to `wtr` fails.
    pub fn print_offset<W: core::fmt::Write>(
        &self,
        offset: &TimezoneOffset,
        wtr: W,
    ) -> core::fmt::Result {
        self.p.print_offset(offset, wtr)
    }
}

impl Default for Printer {
    fn default() -> Printer {
        Printer::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::{ErrorKind, OffsetDirection};

    use super::*;

    static PARSER: Parser = Parser::new();

    #[test]
    fn compact_and_delimited_agree() {
        let pairs = [
            ("12", "12"),
            ("1230", "12:30"),
            ("123045", "12:30:45"),
            ("123045.5", "12:30:45.5"),
            ("1230,5", "12:30,5"),
            ("123045Z", "12:30:45Z"),
            ("123045+0530", "12:30:45+05:30"),
            ("123045-053015", "12:30:45-05:30:15"),
        ];
        for (basic, extended) in pairs {
            assert_eq!(
                PARSER.parse_time(basic).unwrap(),
                PARSER.parse_time(extended).unwrap(),
                "{basic} vs {extended}",
            );
        }
    }

    #[test]
    fn separators_are_interchangeable() {
        for (dot, comma) in [("12.5", "12,5"), ("12:30:45.25", "12:30:45,25")]
        {
            assert_eq!(
                PARSER.parse_time(dot).unwrap(),
                PARSER.parse_time(comma).unwrap(),
            );
        }
    }

    #[test]
    fn offset_direction_requires_sign() {
        for input in ["12", "12:30", "12Z", "12:30:45.5Z"] {
            let t = PARSER.parse_time(input).unwrap();
            assert_eq!(t.offset(), TimezoneOffset::UNSPECIFIED, "{input}");
        }
        let t = PARSER.parse_time("12+00").unwrap();
        assert_eq!(t.offset().direction(), OffsetDirection::Positive);
        let t = PARSER.parse_time("12-00").unwrap();
        assert_eq!(t.offset().direction(), OffsetDirection::Negative);

        let offset = PARSER.parse_offset("0530").unwrap();
        assert_eq!(offset.direction(), OffsetDirection::Unspecified);
    }

    #[test]
    fn strict_midnight() {
        let strict = Parser::new().strict_midnight(true);
        assert!(strict.parse_time("24").is_ok());
        assert!(strict.parse_time("24:00:00").is_ok());
        assert!(strict.parse_time("24:00:00.000").is_ok());
        insta::assert_snapshot!(
            strict.parse_time("24:30").unwrap_err(),
            @"hour 24 is only allowed when the minute, second and millisecond are all zero",
        );
        assert_eq!(
            strict.parse_time("24:00:00.001").unwrap_err().kind(),
            ErrorKind::Range,
        );
        // Offsets are not subject to this rule.
        assert!(strict.parse_time("12+24:30").is_ok());
        assert!(PARSER.parse_time("24:30").is_ok());
    }

    #[test]
    fn invalid_utf8() {
        insta::assert_snapshot!(
            PARSER.parse_time_bytes(b"12:\xF0").unwrap_err(),
            @"expected a time string of valid UTF-8, but found invalid UTF-8 after index 3",
        );
        let t = PARSER.parse_time_bytes("12:30Z").unwrap();
        assert_eq!((t.hour(), t.minute()), (12, 30));
    }

    #[test]
    fn designators() {
        assert_eq!(
            PARSER.parse_designator("Z").unwrap(),
            TimezoneOffset::UNSPECIFIED,
        );
        assert_eq!(
            PARSER.parse_designator("-1100").unwrap(),
            TimezoneOffset::negative(11, 0, 0).unwrap(),
        );
        insta::assert_snapshot!(
            PARSER.parse_designator("Z0").unwrap_err(),
            @"unexpected zero offset time zone designator `Z` at index 0, it may only appear as the last character",
        );
        insta::assert_snapshot!(
            PARSER.parse_designator("+").unwrap_err(),
            @"failed to parse UTC offset after designator '+' at index 0: expected UTC offset of length at least 2 after the sign at index 0, but got length 0",
        );
        insta::assert_snapshot!(
            PARSER.parse_designator("+05+01").unwrap_err(),
            @"failed to parse UTC offset after designator '+' at index 0: unexpected time zone designator '+' at index 3, time zone designators may not appear inside a UTC offset",
        );
        insta::assert_snapshot!(
            PARSER.parse_designator("").unwrap_err(),
            @"expected time string of length at least 2, but got length 0",
        );
    }

    #[test]
    fn printer_writes_both_layouts() {
        let t = PARSER.parse_time("12:30:45.500-03:30").unwrap();
        let mut buf = String::new();
        Printer::new().print_time(&t, &mut buf).unwrap();
        assert_eq!(buf, "12:30:45.500-03:30");

        let mut buf = String::new();
        Printer::new().extended(false).print_time(&t, &mut buf).unwrap();
        assert_eq!(buf, "123045.500-0330");
        assert_eq!(PARSER.parse_time(&buf).unwrap(), t);
    }

    quickcheck::quickcheck! {
        fn prop_basic_and_extended_round_trip(
            hour: u8,
            minute: u8,
            second: u8
        ) -> bool {
            let (hour, minute, second) = (hour % 25, minute % 60, second % 60);
            let basic = alloc::format!("{hour:02}{minute:02}{second:02}");
            let extended =
                alloc::format!("{hour:02}:{minute:02}:{second:02}");
            let expected = TimeOfDay::new(hour, minute, second, 0).unwrap();
            PARSER.parse_time(basic).unwrap() == expected
                && PARSER.parse_time(extended).unwrap() == expected
        }

        fn prop_print_then_parse(time: TimeOfDay, extended: bool) -> bool {
            let printer = Printer::new().extended(extended);
            let mut buf = String::new();
            printer.print_time(&time, &mut buf).unwrap();
            PARSER.parse_time(&buf).unwrap() == time
        }

        fn prop_display_matches_printer(time: TimeOfDay) -> bool {
            let mut buf = String::new();
            Printer::new().print_time(&time, &mut buf).unwrap();
            buf == time.to_string()
        }
    }
}
