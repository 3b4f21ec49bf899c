//! Error types.

use core::fmt;

/// Detailed cause of an [`ArgumentError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentErrorKind {
    /// The argument is blank where a value is required, or is not one of
    /// the accepted values.
    InvalidArgument,
    /// The argument is outside the accepted numeric range.
    OutOfRange,
}

/// An error occurred when passing an argument to a [`UriBuilder`] method.
///
/// The builder is left as it was before the call.
///
/// [`UriBuilder`]: crate::UriBuilder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    param: &'static str,
}

impl ArgumentError {
    pub(crate) fn new(kind: ArgumentErrorKind, param: &'static str) -> Self {
        tracing::trace!(param, ?kind, "argument rejected");
        Self { kind, param }
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// Returns the name of the offending parameter.
    #[inline]
    #[must_use]
    pub fn param(&self) -> &'static str {
        self.param
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ArgumentErrorKind::InvalidArgument => {
                write!(f, "argument `{}` cannot be empty or white space", self.param)
            }
            ArgumentErrorKind::OutOfRange => write!(
                f,
                "argument `{}` should be between -1 and 65535, inclusive",
                self.param
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed by the URI syntax.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid IP literal address.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
    /// Port number that does not fit in 16 bits.
    ///
    /// The error index points to the first digit of the port.
    InvalidPort,
    /// A base URI without a scheme whose implied authority has no host.
    ///
    /// The error index is always `0`.
    MissingHost,
}

/// An error occurred when parsing a base URI.
///
/// Indexes are byte offsets into the base URI with surrounding
/// white space removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
            ParseErrorKind::MissingHost => "missing host at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl std::error::Error for ParseError {}

/// Either kind of error produced while building a URI.
///
/// Useful for propagating errors from setters and [`to_uri`]
/// with `?` in the same function.
///
/// [`to_uri`]: crate::UriBuilder::to_uri
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::{Error, UriBuilder};
///
/// fn build(host: &str) -> Result<String, Error> {
///     let uri = UriBuilder::from_base("https://example.com/")
///         .host(host)?
///         .port(8443)?
///         .to_uri()?;
///     Ok(uri.into_string())
/// }
///
/// assert_eq!(build("example.org").unwrap(), "https://example.org:8443/");
/// assert!(matches!(build(" "), Err(Error::Argument(_))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A setter rejected its argument.
    Argument(ArgumentError),
    /// The base URI is malformed.
    Parse(ParseError),
}

impl From<ArgumentError> for Error {
    #[inline]
    fn from(e: ArgumentError) -> Self {
        Error::Argument(e)
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(e) => fmt::Display::fmt(e, f),
            Error::Parse(e) => write!(f, "malformed base URI: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Argument(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}
