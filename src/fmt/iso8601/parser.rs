use crate::{
    error::{iso8601::Error as E, Error, ErrorContext},
    fmt::util::{
        parse_millisecond, scale_fraction, two_digits, MILLIS_PER_HOUR,
        MILLIS_PER_MINUTE,
    },
    time::{OffsetDirection, TimeOfDay, TimezoneOffset},
};

/// A parser for ISO 8601 time of day strings and UTC offsets.
#[derive(Clone, Copy, Debug)]
pub(super) struct TimeParser {
    strict_midnight: bool,
}

impl TimeParser {
    pub(super) const fn new() -> TimeParser {
        TimeParser { strict_midnight: false }
    }

    pub(super) const fn strict_midnight(self, yes: bool) -> TimeParser {
        TimeParser { strict_midnight: yes, ..self }
    }

    /// Parses a complete time of day string, including any designator at
    /// the end of it.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(super) fn parse_time(&self, input: &str) -> Result<TimeOfDay, Error> {
        let fields = Scanner::new(input, 0, Mode::TopLevel).scan()?;
        if self.strict_midnight && fields.hour == 24 && !fields.is_on_hour()
        {
            return Err(Error::from(E::NotMidnight));
        }
        Ok(fields.to_time())
    }

    /// Parses the digits of a UTC offset. No designator may appear anywhere
    /// in the input.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(super) fn parse_offset(
        &self,
        input: &str,
    ) -> Result<TimezoneOffset, Error> {
        let fields = Scanner::new(input, 0, Mode::OffsetOnly).scan()?;
        Ok(fields.to_offset(OffsetDirection::Unspecified))
    }

    /// Parses a designator on its own: `Z`, or a signed UTC offset. Digits
    /// without a sign are parsed like `parse_offset`.
    pub(super) fn parse_designator(
        &self,
        input: &str,
    ) -> Result<TimezoneOffset, Error> {
        let direction = match input.as_bytes().first() {
            Some(&b'Z') if input.len() == 1 => {
                return Ok(TimezoneOffset::UNSPECIFIED);
            }
            Some(&b'Z') => {
                return Err(Error::from(E::ZuluNotLast { index: 0 }));
            }
            Some(&b'+') => OffsetDirection::Positive,
            Some(&b'-') => OffsetDirection::Negative,
            _ => return self.parse_offset(input),
        };
        Ok(scan_offset(input, 0, direction)?.to_offset(direction))
    }
}

/// Scans the UTC offset following the `+` or `-` at `index`.
///
/// A failure is wrapped in context naming the designator, and keeps the
/// kind of the failure inside the offset.
fn scan_offset(
    input: &str,
    index: usize,
    direction: OffsetDirection,
) -> Result<Fields, Error> {
    let result = Scanner::new(input, index + 1, Mode::OffsetOnly).scan();
    let kind = match result {
        Ok(fields) => return Ok(fields),
        Err(ref err) => err.kind(),
    };
    let designator =
        if direction == OffsetDirection::Negative { '-' } else { '+' };
    result.context(E::FailedOffset { designator, index, kind })
}

// Where a misplaced `:` was found, completing the message of
// `E::UnexpectedDelimiter`.
const AFTER_SECOND: &str = "after the second, no time element follows it";
const IN_FRACTION: &str = "inside a decimal fraction";
const IN_ELEMENT: &str = "where a digit was expected";
const IN_BASIC: &str = "since no delimiter was found after the hour";

/// Whether a scan is of a complete time string or of the part of one that
/// follows a `+` or `-` designator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    TopLevel,
    OffsetOnly,
}

impl Mode {
    /// The names of the hour, minute and second used in error messages.
    fn names(self) -> [&'static str; 3] {
        match self {
            Mode::TopLevel => ["hour", "minute", "second"],
            Mode::OffsetOnly => {
                ["offset hour", "offset minute", "offset second"]
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Element {
    Hour,
    Minute,
    Second,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Reading the two digits of an element, or the delimiter before it.
    Expect(Element),
    /// All three elements have been read. Further digits are ignored, and
    /// only a fraction or a designator may follow.
    AfterSecond,
    /// Reading the digits of a fraction, which begin at `start`.
    InDecimal { start: usize },
    /// A designator ended the scan.
    Done,
}

/// Whether `:` delimiters separate the elements.
///
/// This is decided by the byte following the hour and binds every element
/// after it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Layout {
    Undecided,
    Basic,
    Extended,
}

/// The values produced by a successful scan, with ranges checked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Fields {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u32,
    offset: TimezoneOffset,
}

impl Fields {
    fn is_on_hour(&self) -> bool {
        self.minute == 0 && self.second == 0 && self.millisecond == 0
    }

    fn to_time(&self) -> TimeOfDay {
        TimeOfDay::new_unchecked(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
        .with_offset(self.offset)
    }

    fn to_offset(&self, direction: OffsetDirection) -> TimezoneOffset {
        if self.millisecond != 0 {
            debug!(
                "discarding {} milliseconds from UTC offset \
                 {:02}:{:02}:{:02}, offsets have second precision",
                self.millisecond,
                self.hour,
                self.minute,
                self.second,
            );
        }
        TimezoneOffset::new_unchecked(
            direction,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// A single forward scan over a time string.
///
/// The scanner looks at each byte once, starting at `start`, and decides
/// what to do with it based only on its current state. All indices it
/// reports are indices into the full `input`, even when it was started
/// after a designator.
///
/// An element cut short by the end of the input, a designator or a
/// fraction is left unset, and so defaults to zero.
#[derive(Debug)]
struct Scanner<'i> {
    input: &'i str,
    start: usize,
    mode: Mode,
    state: State,
    layout: Layout,
    /// The first digit of the element being read, if it has been seen.
    pending: Option<u8>,
    /// Whether a `:` was consumed for the element being read.
    delimited: bool,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    millisecond: Option<u32>,
    offset: TimezoneOffset,
}

impl<'i> Scanner<'i> {
    fn new(input: &'i str, start: usize, mode: Mode) -> Scanner<'i> {
        Scanner {
            input,
            start,
            mode,
            state: State::Expect(Element::Hour),
            layout: Layout::Undecided,
            pending: None,
            delimited: false,
            hour: None,
            minute: None,
            second: None,
            millisecond: None,
            offset: TimezoneOffset::UNSPECIFIED,
        }
    }

    fn scan(mut self) -> Result<Fields, Error> {
        let len = self.input.get(self.start..).unwrap_or("").chars().count();
        if len < 2 {
            let err = if self.start == 0 {
                E::TooShort { len }
            } else {
                E::TooShortOffset { len, index: self.start - 1 }
            };
            return Err(Error::from(err));
        }

        let bytes = self.input.as_bytes();
        let mut i = self.start;
        while i < bytes.len() && self.state != State::Done {
            let byte = bytes[i];
            match (self.state, byte) {
                (_, b'Z' | b'+' | b'-') => self.designator(i, byte)?,
                (State::Expect(element), _) => {
                    self.element_byte(element, i, byte)?
                }
                (State::AfterSecond, b'0'..=b'9') => {}
                (State::AfterSecond, b'.' | b',') => {
                    self.state = State::InDecimal { start: i + 1 };
                }
                (State::AfterSecond, b':') => {
                    return Err(self.misplaced_delimiter(i, AFTER_SECOND));
                }
                (State::InDecimal { .. }, b'0'..=b'9') => {}
                (State::InDecimal { .. }, b'.' | b',') => {
                    return Err(Error::from(E::DecimalRepeated { index: i }));
                }
                (State::InDecimal { .. }, b':') => {
                    return Err(self.misplaced_delimiter(i, IN_FRACTION));
                }
                _ => return Err(self.unexpected(i)),
            }
            i += 1;
        }
        if let State::InDecimal { start } = self.state {
            self.fraction(start, self.input.len())?;
        }
        self.fields()
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn element_byte(
        &mut self,
        element: Element,
        i: usize,
        byte: u8,
    ) -> Result<(), Error> {
        // Between two elements, where a delimiter or fraction may appear
        // instead of the next digit.
        let at_boundary = element != Element::Hour
            && self.pending.is_none()
            && !self.delimited;
        match byte {
            b'0'..=b'9' => {
                if at_boundary {
                    self.decide_layout(Layout::Basic, i, byte)?;
                }
                let Some(tens) = self.pending.take() else {
                    self.pending = Some(byte);
                    return Ok(());
                };
                let value = two_digits(tens, byte);
                self.delimited = false;
                self.state = match element {
                    Element::Hour => {
                        self.hour = Some(value);
                        State::Expect(Element::Minute)
                    }
                    Element::Minute => {
                        self.minute = Some(value);
                        State::Expect(Element::Second)
                    }
                    Element::Second => {
                        self.second = Some(value);
                        State::AfterSecond
                    }
                };
                Ok(())
            }
            b':' if at_boundary => {
                self.decide_layout(Layout::Extended, i, byte)?;
                self.delimited = true;
                Ok(())
            }
            b':' => Err(self.misplaced_delimiter(i, IN_ELEMENT)),
            // A lone digit of the minute or second is dropped, and the
            // fraction applies to the element it would have started.
            b'.' | b',' if element != Element::Hour => {
                self.state = State::InDecimal { start: i + 1 };
                Ok(())
            }
            b'.' | b',' => Err(Error::from(E::DecimalBeforeHour { index: i })),
            _ => Err(self.unexpected(i)),
        }
    }

    /// Handles a designator at index `i`. This always ends the scan.
    fn designator(&mut self, i: usize, byte: u8) -> Result<(), Error> {
        if self.mode == Mode::OffsetOnly {
            return Err(Error::from(E::NestedDesignator {
                designator: char::from(byte),
                index: i,
            }));
        }
        if let State::InDecimal { start } = self.state {
            self.fraction(start, i)?;
        }
        self.state = State::Done;

        let direction = match byte {
            b'Z' if i + 1 < self.input.len() => {
                return Err(Error::from(E::ZuluNotLast { index: i }));
            }
            b'Z' => return Ok(()),
            b'+' => OffsetDirection::Positive,
            _ => OffsetDirection::Negative,
        };
        trace!("parsing UTC offset after {:?} at index {i}", byte as char);
        self.offset =
            scan_offset(self.input, i, direction)?.to_offset(direction);
        Ok(())
    }

    /// Applies the fraction whose digits span `start..end` to the element
    /// following the last one that was read.
    fn fraction(&mut self, start: usize, end: usize) -> Result<(), Error> {
        let digits = &self.input.as_bytes()[start..end];
        if digits.is_empty() {
            return Err(Error::from(E::DecimalEmpty { index: start - 1 }));
        }
        if self.second.is_some() {
            self.millisecond = Some(parse_millisecond(digits)?);
            return Ok(());
        }

        let mut millis = if self.minute.is_some() {
            scale_fraction(digits, MILLIS_PER_MINUTE)
        } else {
            let millis = scale_fraction(digits, MILLIS_PER_HOUR);
            // Less than 60 since the fraction is less than one hour.
            self.minute = Some((millis / MILLIS_PER_MINUTE) as u8);
            millis % MILLIS_PER_MINUTE
        };
        self.second = Some((millis / 1_000) as u8);
        millis %= 1_000;
        self.millisecond = Some(millis as u32);
        Ok(())
    }

    /// Checks the ranges of every element read and fills in the missing
    /// ones with zero.
    fn fields(&self) -> Result<Fields, Error> {
        let names = self.mode.names();
        let Some(hour) = self.hour else {
            return Err(Error::from(E::MissingHour { what: names[0] }));
        };
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let checks = [
            (names[0], hour, 24),
            (names[1], minute, 59),
            (names[2], second, 59),
        ];
        for (what, value, max) in checks {
            if value > max {
                return Err(Error::range(what, value, 0, max));
            }
        }
        Ok(Fields {
            hour,
            minute,
            second,
            millisecond: self.millisecond.unwrap_or(0),
            offset: self.offset,
        })
    }

    /// Called with the byte following the hour or the minute. The first
    /// call decides the layout and every later call must agree with it.
    fn decide_layout(
        &mut self,
        found: Layout,
        i: usize,
        byte: u8,
    ) -> Result<(), Error> {
        match (self.layout, found) {
            (Layout::Undecided, _) => {
                trace!("detected {found:?} layout at index {i}");
                self.layout = found;
                Ok(())
            }
            (Layout::Basic, Layout::Basic)
            | (Layout::Extended, Layout::Extended) => Ok(()),
            (_, Layout::Basic) => Err(Error::from(E::ExpectedDelimiter {
                found: char::from(byte),
                index: i,
            })),
            (_, _) => Err(self.misplaced_delimiter(i, IN_BASIC)),
        }
    }

    fn misplaced_delimiter(&self, i: usize, place: &'static str) -> Error {
        Error::from(E::UnexpectedDelimiter { index: i, place })
    }

    /// Returns an error for an unexpected character at index `i`.
    fn unexpected(&self, i: usize) -> Error {
        let found = self
            .input
            .get(i..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Error::from(E::ExpectedDigit { found, index: i })
    }
}
