use crate::{
    error::Error,
    fmt::iso8601::{Parser, Printer},
};

/// The default parser and printer used by the trait impls in this module.
static PARSER: Parser = Parser::new();
static PRINTER: Printer = Printer::new();

/// A time of day, as parsed from an ISO 8601 time string.
///
/// A `TimeOfDay` is made up of an hour, minute, second and millisecond,
/// along with the UTC offset designated by the string it was parsed from.
/// The offset is always present. When the string had no signed offset (no
/// designator at all, or the zero offset designator `Z`), the offset is
/// [`TimezoneOffset::UNSPECIFIED`].
///
/// # Ranges
///
/// * The hour is in the range `0..=24`. ISO 8601 uses `24:00:00` to denote
/// the end of a day. Other minutes and seconds with hour `24` are accepted
/// unless the parser is configured with
/// [`Parser::strict_midnight`](crate::fmt::iso8601::Parser::strict_midnight).
/// * The minute and second are in the range `0..=59`. Leap seconds are not
/// supported.
/// * The millisecond is any `u32`. When parsed from a fraction following
/// the second, it is the digits of that fraction taken as written. So
/// `12:00:00.500` has millisecond `500`, while `12:00:00.5` has
/// millisecond `5`.
///
/// # Parsing and printing
///
/// This type implements `FromStr` with the same semantics as
/// [`parse_time_string`](crate::parse_time_string), and `Display` with the
/// extended ISO 8601 layout. Printing and then parsing a `TimeOfDay`
/// recovers the same value, as long as its offset is either signed or
/// unspecified and zero.
///
/// ```
/// use isotime::{TimeOfDay, TimezoneOffset};
///
/// let t = TimeOfDay::new(9, 5, 0, 250)?
///     .with_offset(TimezoneOffset::negative(3, 30, 0)?);
/// assert_eq!(t.to_string(), "09:05:00.250-03:30");
/// assert_eq!("09:05:00.250-03:30".parse::<TimeOfDay>()?, t);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u32,
    offset: TimezoneOffset,
}

impl TimeOfDay {
    /// Midnight at the start of a day, `00:00:00`, with an unspecified
    /// offset.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay::new_unchecked(0, 0, 0, 0);

    /// Creates a new time of day with an unspecified offset.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is greater than `24`, or
    /// when the minute or second is greater than `59`.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(23, 59, 59, 0)?;
    /// assert_eq!(t.to_string(), "23:59:59");
    ///
    /// assert!(TimeOfDay::new(25, 0, 0, 0).is_err());
    /// assert!(TimeOfDay::new(12, 60, 0, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u32,
    ) -> Result<TimeOfDay, Error> {
        check_clock("hour", "minute", "second", hour, minute, second)?;
        Ok(TimeOfDay::new_unchecked(hour, minute, second, millisecond))
    }

    /// Creates a new time of day without checking ranges.
    #[inline]
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u32,
    ) -> TimeOfDay {
        TimeOfDay {
            hour,
            minute,
            second,
            millisecond,
            offset: TimezoneOffset::UNSPECIFIED,
        }
    }

    /// Returns this time of day with the given UTC offset.
    ///
    /// Note that an offset with an unspecified direction is not printed by
    /// `Display` (or [`Printer`]), since a time string can only designate
    /// a signed offset.
    #[inline]
    pub fn with_offset(self, offset: TimezoneOffset) -> TimeOfDay {
        TimeOfDay { offset, ..self }
    }

    /// Returns the hour, in the range `0..=24`.
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute, in the range `0..=59`.
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second, in the range `0..=59`.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the millisecond.
    #[inline]
    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Returns the UTC offset.
    #[inline]
    pub fn offset(&self) -> TimezoneOffset {
        self.offset
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER.print_time(self, f)
    }
}

impl core::str::FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<TimeOfDay, Error> {
        PARSER.parse_time(s)
    }
}

/// The direction of a UTC offset.
///
/// The [`OffsetDirection::signum`] of a direction is the `-1`, `0` or `1`
/// that it corresponds to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(i8)]
pub enum OffsetDirection {
    /// A `-` designator. The offset is behind UTC.
    Negative = -1,
    /// No signed offset was given. This is the direction of a time string
    /// without a designator, or with the zero offset designator `Z`.
    #[default]
    Unspecified = 0,
    /// A `+` designator. The offset is ahead of UTC.
    Positive = 1,
}

impl OffsetDirection {
    /// Returns `-1`, `0` or `1` for a negative, unspecified or positive
    /// direction, respectively.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::OffsetDirection;
    ///
    /// assert_eq!(OffsetDirection::Negative.signum(), -1);
    /// assert_eq!(OffsetDirection::Unspecified.signum(), 0);
    /// assert_eq!(OffsetDirection::Positive.signum(), 1);
    /// ```
    #[inline]
    pub fn signum(self) -> i8 {
        self as i8
    }
}

/// A UTC offset, as designated at the end of an ISO 8601 time string.
///
/// An offset has an hour, minute and second, each with the same ranges as
/// the corresponding fields of a [`TimeOfDay`], and an [`OffsetDirection`].
///
/// # Parsing and printing
///
/// The `FromStr` impl accepts a complete designator: `Z`, or `+` or `-`
/// followed by the offset digits in either layout. Digits without a sign
/// are also accepted and produce an offset with an unspecified direction.
/// The `Display` impl is the inverse: it prints `Z` for
/// [`TimezoneOffset::UNSPECIFIED`], the sign only when the direction is not
/// unspecified, and the second only when it is non-zero.
///
/// ```
/// use isotime::{OffsetDirection, TimezoneOffset};
///
/// let offset: TimezoneOffset = "-0530".parse()?;
/// assert_eq!(offset.direction(), OffsetDirection::Negative);
/// assert_eq!(offset.to_string(), "-05:30");
/// assert_eq!(offset.to_seconds(), -19_800);
///
/// let offset: TimezoneOffset = "Z".parse()?;
/// assert_eq!(offset, TimezoneOffset::UNSPECIFIED);
/// assert_eq!(offset.to_string(), "Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimezoneOffset {
    direction: OffsetDirection,
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimezoneOffset {
    /// The offset of a time string without a signed offset. All of its
    /// fields are zero and its direction is
    /// [`OffsetDirection::Unspecified`].
    pub const UNSPECIFIED: TimezoneOffset = TimezoneOffset::new_unchecked(
        OffsetDirection::Unspecified,
        0,
        0,
        0,
    );

    /// Creates a new offset ahead of UTC.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is greater than `24`, or
    /// when the minute or second is greater than `59`.
    pub fn positive(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<TimezoneOffset, Error> {
        TimezoneOffset::new(OffsetDirection::Positive, hour, minute, second)
    }

    /// Creates a new offset behind UTC.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is greater than `24`, or
    /// when the minute or second is greater than `59`.
    pub fn negative(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<TimezoneOffset, Error> {
        TimezoneOffset::new(OffsetDirection::Negative, hour, minute, second)
    }

    fn new(
        direction: OffsetDirection,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<TimezoneOffset, Error> {
        check_clock(
            "offset hour",
            "offset minute",
            "offset second",
            hour,
            minute,
            second,
        )?;
        Ok(TimezoneOffset::new_unchecked(direction, hour, minute, second))
    }

    #[inline]
    pub(crate) const fn new_unchecked(
        direction: OffsetDirection,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimezoneOffset {
        TimezoneOffset { direction, hour, minute, second }
    }

    /// Returns the direction of this offset.
    #[inline]
    pub fn direction(&self) -> OffsetDirection {
        self.direction
    }

    /// Returns the hour, in the range `0..=24`.
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute, in the range `0..=59`.
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second, in the range `0..=59`.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the total number of seconds in this offset, negated when the
    /// direction is negative.
    ///
    /// An offset with an unspecified direction is treated as positive. The
    /// offsets produced by parsing a time string with no signed offset are
    /// always zero.
    pub fn to_seconds(&self) -> i32 {
        let magnitude = i32::from(self.hour) * 3600
            + i32::from(self.minute) * 60
            + i32::from(self.second);
        match self.direction {
            OffsetDirection::Negative => -magnitude,
            OffsetDirection::Unspecified | OffsetDirection::Positive => {
                magnitude
            }
        }
    }
}

impl core::fmt::Display for TimezoneOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER.print_offset(self, f)
    }
}

impl core::str::FromStr for TimezoneOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<TimezoneOffset, Error> {
        PARSER.parse_designator(s)
    }
}

/// Checks the ranges shared by a time of day and a UTC offset.
fn check_clock(
    hour_name: &'static str,
    minute_name: &'static str,
    second_name: &'static str,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<(), Error> {
    if hour > 24 {
        return Err(Error::range(hour_name, hour, 0, 24));
    }
    if minute > 59 {
        return Err(Error::range(minute_name, minute, 0, 59));
    }
    if second > 59 {
        return Err(Error::range(second_name, second, 0, 59));
    }
    Ok(())
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeOfDay, D::Error> {
        use serde::de;

        struct TimeOfDayVisitor;

        impl<'de> de::Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 time of day string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<TimeOfDay, E> {
                PARSER.parse_time_bytes(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimeOfDay, E> {
                PARSER.parse_time(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimezoneOffset {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimezoneOffset {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimezoneOffset, D::Error> {
        use serde::de;

        struct TimezoneOffsetVisitor;

        impl<'de> de::Visitor<'de> for TimezoneOffsetVisitor {
            type Value = TimezoneOffset;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a UTC offset designator string")
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimezoneOffset, E> {
                PARSER.parse_designator(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimezoneOffsetVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeOfDay {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeOfDay {
        use quickcheck::Arbitrary;

        let hour = u8::arbitrary(g) % 25;
        let minute = u8::arbitrary(g) % 60;
        let second = u8::arbitrary(g) % 60;
        // Mostly sub-second values, but sometimes bigger ones too.
        let millisecond = if bool::arbitrary(g) {
            u32::arbitrary(g) % 1_000
        } else {
            u32::arbitrary(g)
        };
        TimeOfDay::new_unchecked(hour, minute, second, millisecond)
            .with_offset(TimezoneOffset::arbitrary(g))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimezoneOffset {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimezoneOffset {
        use quickcheck::Arbitrary;

        let direction = *g
            .choose(&[
                OffsetDirection::Negative,
                OffsetDirection::Unspecified,
                OffsetDirection::Positive,
            ])
            .unwrap();
        // Only a signed offset can be written in a time string.
        if direction == OffsetDirection::Unspecified {
            return TimezoneOffset::UNSPECIFIED;
        }
        let hour = u8::arbitrary(g) % 25;
        let minute = u8::arbitrary(g) % 60;
        let second = u8::arbitrary(g) % 60;
        TimezoneOffset::new_unchecked(direction, hour, minute, second)
    }
}
