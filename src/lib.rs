/*!
Isotime parses and prints ISO 8601 "time of day" strings.

A time of day string is made up of an hour, an optional minute and an
optional second, either written with `:` delimiters (the "extended" layout,
e.g., `12:30:45`) or without them (the "basic" layout, e.g., `123045`). The
last element present may carry a decimal fraction introduced by `.` or `,`.
The string may end with a UTC offset designator: either `Z` or a signed
offset like `+05:30`.

The scan is lenient past the hour. A minute or second with only one digit
is dropped and defaults to zero, so `123` and `12:3Z` are both `12:00:00`.
Digits after the second are ignored.

Parsing is done with a single forward scan over the input. No regex engine
and no general purpose datetime library is involved.

# Example

```
use isotime::{parse_time_string, TimeOfDay};

let t = parse_time_string("12:30:45+05:30")?;
assert_eq!(t.hour(), 12);
assert_eq!(t.minute(), 30);
assert_eq!(t.second(), 45);
assert_eq!(t.offset().hour(), 5);
assert_eq!(t.offset().minute(), 30);
assert_eq!(t.offset().direction().signum(), 1);

// The basic layout is equivalent.
assert_eq!(t, "123045+0530".parse::<TimeOfDay>()?);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Fractions

A decimal fraction applies to whichever unit follows the last element that
was written out. A fraction on the hour becomes minutes, a fraction on the
minute becomes seconds:

```
use isotime::parse_time_string;

let t = parse_time_string("12.5")?;
assert_eq!((t.hour(), t.minute(), t.second()), (12, 30, 0));

let t = parse_time_string("12:30.5")?;
assert_eq!((t.hour(), t.minute(), t.second()), (12, 30, 30));

let t = parse_time_string("12:30:30.500")?;
assert_eq!(t.millisecond(), 500);

# Ok::<(), Box<dyn std::error::Error>>(())
```

Fractions are computed with exact integer arithmetic. Any part of a
fractional hour or minute that does not fit in the next unit down spills
over into seconds and milliseconds. Precision below one millisecond is
truncated.

# Errors

All failures are reported through the single [`Error`] type. Its
[`Error::kind`] method returns an [`ErrorKind`] describing what went wrong:

```
use isotime::{parse_time_string, ErrorKind};

let kind = |s: &str| parse_time_string(s).unwrap_err().kind();
assert_eq!(kind("12:3045"), ErrorKind::Delimiter);
assert_eq!(kind("25:00"), ErrorKind::Range);
assert_eq!(kind("14Z5"), ErrorKind::ZeroOffsetPosition);
```

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`].
* **logging** - Emits `trace` and `debug` level messages via the [`log`]
crate while scanning.
* **serde** - Provides `Serialize` and `Deserialize` impls for
[`TimeOfDay`] and [`TimezoneOffset`].
* **perf-inline** (enabled by default) - Aggressively inlines the scanner.

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors are reference counted, so we always need a heap.
extern crate alloc;

pub use crate::{
    error::{Error, ErrorKind},
    time::{OffsetDirection, TimeOfDay, TimezoneOffset},
};

#[macro_use]
mod logging;

mod error;
pub mod fmt;
mod time;

/// Parses an ISO 8601 time of day string.
///
/// The string may use either the extended layout (`12:30:45`) or the basic
/// layout (`123045`), may carry a fraction on its last element and may end
/// with a `Z` or a signed offset. The returned value always has an offset.
/// When no signed offset was present, it is
/// [`TimezoneOffset::UNSPECIFIED`].
///
/// This uses the default [`fmt::iso8601::Parser`] configuration.
///
/// # Errors
///
/// This returns an error when the input is not a valid ISO 8601 time of day
/// string. See [`ErrorKind`] for the categories of failure.
///
/// # Example
///
/// ```
/// use isotime::parse_time_string;
///
/// let t = parse_time_string("14Z")?;
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.offset().direction().signum(), 0);
///
/// let t = parse_time_string("12:30-05:30")?;
/// assert_eq!(t.offset().direction().signum(), -1);
/// assert_eq!(t.offset().minute(), 30);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_time_string(input: &str) -> Result<TimeOfDay, Error> {
    static P: fmt::iso8601::Parser = fmt::iso8601::Parser::new();
    P.parse_time(input)
}

/// Parses the digits of a UTC offset, without any leading sign.
///
/// This is the same scan used for the part of a time string following a
/// `+` or `-` designator. Since no sign is parsed, the direction of the
/// returned offset is always [`OffsetDirection::Unspecified`]. A designator
/// (`Z`, `+` or `-`) anywhere in the input is an error.
///
/// # Example
///
/// ```
/// use isotime::{parse_timezone_offset, ErrorKind};
///
/// let offset = parse_timezone_offset("05:30")?;
/// assert_eq!((offset.hour(), offset.minute()), (5, 30));
/// assert_eq!(offset.direction().signum(), 0);
///
/// let err = parse_timezone_offset("05Z").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TimezoneNesting);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_timezone_offset(input: &str) -> Result<TimezoneOffset, Error> {
    static P: fmt::iso8601::Parser = fmt::iso8601::Parser::new();
    P.parse_offset(input)
}
