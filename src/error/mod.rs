use alloc::sync::Arc;

pub(crate) mod iso8601;

/// An error that can occur in this crate.
///
/// Every failure in this crate, whether it comes from scanning malformed
/// input or from a value being out of range, is reported through this one
/// type. The broad category of a failure is available via [`Error::kind`].
/// The [`core::fmt::Display`] impl produces a message that cites the
/// offending character and its position where applicable.
///
/// # Design
///
/// This crate uses a single error type for all of its operations. The
/// structured details of each failure are kept private so that messages can
/// evolve without breaking callers. Callers that need to branch on the
/// failure should use [`Error::kind`].
///
/// An error may have a cause. For example, a failure inside the UTC offset
/// of a time string is reported as a failure to parse the offset, caused by
/// the specific problem found in it. The `Display` impl writes out the whole
/// chain, and [`Error::kind`] always reports the kind of the root cause.
///
/// The internal representation is reference counted. This makes an `Error`
/// cheap to clone and keeps it the size of a single pointer, which in turn
/// keeps `Result<TimeOfDay, Error>` small.
///
/// [`TimeOfDay`]: crate::TimeOfDay
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Clone, Debug)]
struct ErrorInner {
    detail: ErrorDetail,
    cause: Option<Error>,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::{parse_time_string, ErrorKind};
    ///
    /// let err = parse_time_string("1a:30").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Digit);
    ///
    /// let err = parse_time_string("12:30+05Z").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TimezoneNesting);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        // Context around a cause records the kind of that cause when it is
        // created, so the outermost error already knows the kind.
        self.inner.detail.kind()
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its allowed range.
    ///
    /// This is a convenience for `err.kind() == ErrorKind::Range`.
    ///
    /// # Example
    ///
    /// ```
    /// use isotime::{parse_time_string, TimeOfDay};
    ///
    /// assert!(parse_time_string("25:00").unwrap_err().is_range());
    /// assert!(parse_time_string("12:60").unwrap_err().is_range());
    /// assert!(TimeOfDay::new(12, 0, 60, 0).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "minute")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorDetail::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // The consequent was just created, so this never actually clones.
        let inner = Arc::make_mut(&mut err.inner);
        debug_assert!(
            inner.cause.is_none(),
            "cause of consequence must be `None`"
        );
        inner.cause = Some(self);
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// root cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(&err.inner.detail, f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.kind())
                .field("detail", &self.inner.detail)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The category of an [`Error`].
///
/// Each variant corresponds to one way in which a time of day string can be
/// rejected. More specific information, such as the offending character and
/// its position, is available in the error's `Display` output.
///
/// This enum is non-exhaustive. New categories may be added in semver
/// compatible releases.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The input was not text. This occurs when parsing from bytes that are
    /// not valid UTF-8.
    Type,
    /// The input was shorter than two characters. This also applies to the
    /// part of the input following a `+` or `-` offset designator.
    Length,
    /// The `:` delimiter was used inconsistently: either it appeared in a
    /// string using the basic layout, or it was missing from a position
    /// where the extended layout requires it.
    Delimiter,
    /// A decimal separator (`.` or `,`) appeared before the two digit hour,
    /// appeared more than once, or was not followed by any digits.
    DecimalPlacement,
    /// A character that is neither a digit nor one of `:`, `.`, `,`, `Z`,
    /// `+` or `-` was found.
    Digit,
    /// A designator (`Z`, `+` or `-`) appeared inside the UTC offset part of
    /// the string.
    TimezoneNesting,
    /// The zero offset designator `Z` was followed by more input.
    ZeroOffsetPosition,
    /// The input ended, or hit a designator, before the two digit hour was
    /// complete. A minute or second cut short is not an error, it defaults
    /// to zero.
    Unterminated,
    /// An hour, minute, second or millisecond value was out of range.
    Range,
}

/// The structured details of an error.
#[derive(Clone, Debug)]
enum ErrorDetail {
    Iso8601(self::iso8601::Error),
    Range(RangeError),
}

impl ErrorDetail {
    fn kind(&self) -> ErrorKind {
        match *self {
            ErrorDetail::Iso8601(ref err) => err.kind(),
            ErrorDetail::Range(_) => ErrorKind::Range,
        }
    }
}

impl core::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorDetail::Iso8601(ref err) => core::fmt::Display::fmt(err, f),
            ErrorDetail::Range(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorDetail> for Error {
    fn from(detail: ErrorDetail) -> Error {
        Error { inner: Arc::new(ErrorInner { detail, cause: None }) }
    }
}

/// An error that occurs when a value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which value was out of bounds, the value given and its minimum and
/// maximum allowed values.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `Error::context` work without needing public `From`
/// impls for the crate internal error types.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
