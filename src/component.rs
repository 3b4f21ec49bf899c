//! URI scheme types.

use crate::{
    error::{ArgumentError, ArgumentErrorKind},
    pct_enc::table,
};
use core::{fmt, str::FromStr};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. Schemes of a [`Uri`] built by
/// this crate are always lowercase.
///
/// [`Uri`]: crate::Uri
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::{component::Scheme, Uri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("HTTP");
///
/// let uri = Uri::parse("http://example.com/")?;
/// assert_eq!(uri.scheme(), SCHEME_HTTP);
/// assert_eq!(uri.scheme().as_str(), "http");
/// # Ok::<_, fluent_uri_builder::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if is_valid_scheme(s.as_bytes()) {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the default port of the scheme, if known.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_uri_builder::component::Scheme;
    ///
    /// assert_eq!(Scheme::new_or_panic("HTTPS").default_port(), Some(443));
    /// assert_eq!(Scheme::new_or_panic("file").default_port(), None);
    /// assert_eq!(Scheme::new_or_panic("foo").default_port(), None);
    /// ```
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        default_port(&self.inner)
    }
}

const fn is_valid_scheme(s: &[u8]) -> bool {
    let [first, rem @ ..] = s else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    let mut rem = rem;
    while let [x, rest @ ..] = rem {
        if !table::SCHEME.allows(*x) {
            return false;
        }
        rem = rest;
    }
    true
}

/// Returns the default port of a scheme, compared case-insensitively.
pub(crate) fn default_port(scheme: &str) -> Option<u16> {
    const PORTS: &[(&str, u16)] = &[
        ("ftp", 21),
        ("gopher", 70),
        ("http", 80),
        ("https", 443),
        ("mailto", 25),
        ("news", 119),
        ("ws", 80),
        ("wss", 443),
    ];
    PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

/// A scheme the builder can switch a URI to.
///
/// Each tag maps to a canonical lowercase scheme name.
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::SchemeTag;
///
/// assert_eq!(SchemeTag::Https.as_str(), "https");
/// assert_eq!("FTP".parse::<SchemeTag>().unwrap(), SchemeTag::Ftp);
/// assert!("gemini".parse::<SchemeTag>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SchemeTag {
    /// `file`
    File,
    /// `ftp`
    Ftp,
    /// `gopher`
    Gopher,
    /// `http`
    Http,
    /// `https`
    Https,
    /// `mailto`
    Mailto,
    /// `news`
    News,
}

impl SchemeTag {
    /// All scheme tags, in declaration order.
    pub const ALL: [SchemeTag; 7] = [
        SchemeTag::File,
        SchemeTag::Ftp,
        SchemeTag::Gopher,
        SchemeTag::Http,
        SchemeTag::Https,
        SchemeTag::Mailto,
        SchemeTag::News,
    ];

    /// Returns the canonical scheme name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemeTag::File => "file",
            SchemeTag::Ftp => "ftp",
            SchemeTag::Gopher => "gopher",
            SchemeTag::Http => "http",
            SchemeTag::Https => "https",
            SchemeTag::Mailto => "mailto",
            SchemeTag::News => "news",
        }
    }

    /// Returns the canonical scheme as a [`Scheme`].
    #[must_use]
    pub const fn scheme(self) -> &'static Scheme {
        Scheme::new_validated(self.as_str())
    }

    /// Returns the default port of the scheme, if any.
    #[must_use]
    pub fn default_port(self) -> Option<u16> {
        default_port(self.as_str())
    }
}

impl fmt::Display for SchemeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeTag {
    type Err = ArgumentError;

    /// Looks up a tag by scheme name, ignoring ASCII case.
    ///
    /// Names outside the enumeration fail with
    /// [`InvalidArgument`](ArgumentErrorKind::InvalidArgument).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ArgumentError::new(ArgumentErrorKind::InvalidArgument, "scheme"))
    }
}
