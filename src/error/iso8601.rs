use crate::error::{self, ErrorKind};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DecimalBeforeHour {
        index: usize,
    },
    DecimalEmpty {
        index: usize,
    },
    DecimalRepeated {
        index: usize,
    },
    ExpectedDelimiter {
        found: char,
        index: usize,
    },
    ExpectedDigit {
        found: char,
        index: usize,
    },
    /// Context for a failure inside a signed UTC offset. It carries the
    /// kind of that failure.
    FailedOffset {
        designator: char,
        index: usize,
        kind: ErrorKind,
    },
    InvalidUtf8 {
        valid_up_to: usize,
    },
    MillisecondOverflow {
        digits: usize,
    },
    MissingHour {
        what: &'static str,
    },
    NestedDesignator {
        designator: char,
        index: usize,
    },
    NotMidnight,
    TooShort {
        len: usize,
    },
    TooShortOffset {
        len: usize,
        index: usize,
    },
    UnexpectedDelimiter {
        index: usize,
        place: &'static str,
    },
    ZuluNotLast {
        index: usize,
    },
}

impl Error {
    pub(crate) fn kind(&self) -> ErrorKind {
        use self::Error::*;

        match *self {
            DecimalBeforeHour { .. }
            | DecimalEmpty { .. }
            | DecimalRepeated { .. } => ErrorKind::DecimalPlacement,
            ExpectedDelimiter { .. } | UnexpectedDelimiter { .. } => {
                ErrorKind::Delimiter
            }
            ExpectedDigit { .. } => ErrorKind::Digit,
            FailedOffset { kind, .. } => kind,
            InvalidUtf8 { .. } => ErrorKind::Type,
            MillisecondOverflow { .. } | NotMidnight => ErrorKind::Range,
            MissingHour { .. } => ErrorKind::Unterminated,
            NestedDesignator { .. } => ErrorKind::TimezoneNesting,
            TooShort { .. } | TooShortOffset { .. } => ErrorKind::Length,
            ZuluNotLast { .. } => ErrorKind::ZeroOffsetPosition,
        }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorDetail::Iso8601(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DecimalBeforeHour { index } => write!(
                f,
                "unexpected decimal separator at index {index} before \
                 the two digit hour, a decimal separator may only \
                 follow the hour or a later time element",
            ),
            DecimalEmpty { index } => write!(
                f,
                "expected at least one digit after the decimal separator \
                 at index {index}, but found none",
            ),
            DecimalRepeated { index } => write!(
                f,
                "unexpected second decimal separator at index {index}, \
                 a decimal separator may only appear once",
            ),
            ExpectedDelimiter { found, index } => write!(
                f,
                "expected time element delimiter `:` at index {index} \
                 since a delimiter was found after the hour, \
                 but found {found:?}",
            ),
            ExpectedDigit { found, index } => write!(
                f,
                "expected number at index {index}, but found {found:?}",
            ),
            FailedOffset { designator, index, .. } => write!(
                f,
                "failed to parse UTC offset after designator \
                 {designator:?} at index {index}",
            ),
            InvalidUtf8 { valid_up_to } => write!(
                f,
                "expected a time string of valid UTF-8, \
                 but found invalid UTF-8 after index {valid_up_to}",
            ),
            MillisecondOverflow { digits } => write!(
                f,
                "millisecond value with {digits} digits is too big, \
                 it must fit into a 32-bit unsigned integer",
            ),
            MissingHour { what } => write!(
                f,
                "unexpected end of time string, expected two digit {what}",
            ),
            NestedDesignator { designator, index } => write!(
                f,
                "unexpected time zone designator {designator:?} at \
                 index {index}, time zone designators may not appear \
                 inside a UTC offset",
            ),
            NotMidnight => f.write_str(
                "hour 24 is only allowed when the minute, \
                 second and millisecond are all zero",
            ),
            TooShort { len } => write!(
                f,
                "expected time string of length at least 2, \
                 but got length {len}",
            ),
            TooShortOffset { len, index } => write!(
                f,
                "expected UTC offset of length at least 2 after the \
                 sign at index {index}, but got length {len}",
            ),
            UnexpectedDelimiter { index, place } => write!(
                f,
                "unexpected time element delimiter `:` at index {index} \
                 {place}",
            ),
            ZuluNotLast { index } => write!(
                f,
                "unexpected zero offset time zone designator `Z` at \
                 index {index}, it may only appear as the last character",
            ),
        }
    }
}
