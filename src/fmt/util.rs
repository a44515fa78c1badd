use crate::error::{iso8601::Error as E, Error};

/// The number of fractional digits that take part in scaling a fraction.
///
/// Nine digits is nanosecond precision for a fraction of a second, which is
/// far below the millisecond resolution of the values produced here. Any
/// digits beyond this are validated by the scanner but otherwise ignored.
const MAX_FRACTION_DIGITS: usize = 9;

/// The number of milliseconds in one hour.
pub(crate) const MILLIS_PER_HOUR: u64 = 3_600_000;

/// The number of milliseconds in one minute.
pub(crate) const MILLIS_PER_MINUTE: u64 = 60_000;

/// Combines two ASCII digits into a two digit number.
///
/// Callers must ensure both bytes are ASCII digits.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn two_digits(tens: u8, ones: u8) -> u8 {
    debug_assert!(tens.is_ascii_digit() && ones.is_ascii_digit());
    (tens - b'0') * 10 + (ones - b'0')
}

/// Scales the decimal fraction written by `digits` (the ASCII digits after
/// the decimal separator) by the given unit, in milliseconds.
///
/// For example, the digits `5` of a fractional hour scaled by
/// `MILLIS_PER_HOUR` is `1_800_000`, i.e., thirty minutes.
///
/// This uses integer arithmetic, so there is no rounding error. The result
/// is truncated to whole milliseconds and is always less than `unit`.
///
/// Callers must ensure `digits` is non-empty and all ASCII digits.
pub(crate) fn scale_fraction(digits: &[u8], unit: u64) -> u64 {
    debug_assert!(!digits.is_empty());
    debug_assert!(digits.iter().all(u8::is_ascii_digit));

    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    let mut numerator: u64 = 0;
    let mut denominator: u64 = 1;
    for &byte in digits {
        numerator = numerator * 10 + u64::from(byte - b'0');
        denominator *= 10;
    }
    // Can't overflow: the numerator is less than 10^9 and the biggest unit
    // is an hour, 3.6 * 10^6 milliseconds.
    numerator * unit / denominator
}

/// Parses the ASCII digits following the decimal separator after a second
/// as a whole number of milliseconds.
///
/// The digits are taken as written. That is, `500` is 500 milliseconds and
/// `5` is 5 milliseconds. Leading zeros are permitted.
///
/// Callers must ensure `digits` is non-empty and all ASCII digits.
pub(crate) fn parse_millisecond(digits: &[u8]) -> Result<u32, Error> {
    debug_assert!(digits.iter().all(u8::is_ascii_digit));

    let mut n: u32 = 0;
    for &byte in digits {
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(u32::from(byte - b'0')))
            .ok_or(E::MillisecondOverflow { digits: digits.len() })?;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_hour() {
        assert_eq!(scale_fraction(b"5", MILLIS_PER_HOUR), 1_800_000);
        assert_eq!(scale_fraction(b"25", MILLIS_PER_HOUR), 900_000);
        // 0.51 hours is 30 minutes and 36 seconds.
        assert_eq!(scale_fraction(b"51", MILLIS_PER_HOUR), 1_836_000);
        assert_eq!(scale_fraction(b"0", MILLIS_PER_HOUR), 0);
        assert_eq!(scale_fraction(b"000", MILLIS_PER_HOUR), 0);
    }

    #[test]
    fn fraction_of_minute() {
        assert_eq!(scale_fraction(b"5", MILLIS_PER_MINUTE), 30_000);
        assert_eq!(scale_fraction(b"75", MILLIS_PER_MINUTE), 45_000);
        // 0.333 minutes is 19.98 seconds.
        assert_eq!(scale_fraction(b"333", MILLIS_PER_MINUTE), 19_980);
    }

    #[test]
    fn fraction_is_truncated_and_bounded() {
        // 0.99999... of an hour never reaches a full hour.
        let got = scale_fraction(b"999999999999999", MILLIS_PER_HOUR);
        assert_eq!(got, 3_599_999);
        // Digits past the ninth have no effect.
        assert_eq!(
            scale_fraction(b"1234567891", MILLIS_PER_MINUTE),
            scale_fraction(b"123456789", MILLIS_PER_MINUTE),
        );
    }

    #[test]
    fn millisecond_digits() {
        assert_eq!(parse_millisecond(b"500").unwrap(), 500);
        assert_eq!(parse_millisecond(b"5").unwrap(), 5);
        assert_eq!(parse_millisecond(b"005").unwrap(), 5);
        assert_eq!(parse_millisecond(b"4294967295").unwrap(), u32::MAX);
        insta::assert_snapshot!(
            parse_millisecond(b"4294967296").unwrap_err(),
            @"millisecond value with 10 digits is too big, it must fit into a 32-bit unsigned integer",
        );
    }

    #[test]
    fn two_digit_values() {
        assert_eq!(two_digits(b'0', b'0'), 0);
        assert_eq!(two_digits(b'0', b'7'), 7);
        assert_eq!(two_digits(b'2', b'4'), 24);
        assert_eq!(two_digits(b'9', b'9'), 99);
    }
}
