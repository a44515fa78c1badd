/*!
Configurable parsing and printing of time of day strings.

The top-level [`parse_time_string`](crate::parse_time_string) function and
the `FromStr` and `Display` impls on [`TimeOfDay`](crate::TimeOfDay) and
[`TimezoneOffset`](crate::TimezoneOffset) all use the default configuration
of the types in [`iso8601`]. Use those types directly to parse from bytes,
to reject `24:30` style times or to print the basic layout.
*/

pub mod iso8601;
mod util;
