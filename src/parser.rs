use crate::{
    component::Scheme,
    error::{ParseError, ParseErrorKind},
    pct_enc::{self, table::*, Table},
};
use std::net::Ipv6Addr;

type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Returns immediately with a parse error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// Components of a parsed base URI, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: Option<Authority<'a>>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    pub(crate) userinfo: Option<&'a str>,
    /// Raw host, including the brackets of an IP literal.
    pub(crate) host: &'a str,
    pub(crate) port: Option<u16>,
}

impl Components<'static> {
    /// What an empty base URI stands for: `http://localhost/`.
    pub(crate) const DEFAULT: Components<'static> = Components {
        scheme: "http",
        authority: Some(Authority {
            userinfo: None,
            host: "localhost",
            port: None,
        }),
        path: "/",
        query: None,
        fragment: None,
    };
}

/// Parses a base URI.
///
/// The input is expected to be trimmed and non-empty. A base without a scheme
/// is read as though it were prefixed with `http://`.
pub(crate) fn parse(s: &str) -> Result<Components<'_>> {
    let mut end = s.len();

    let fragment = match s.find('#') {
        Some(i) => {
            end = i;
            Some(validate(s, i + 1, s.len(), FRAGMENT)?)
        }
        None => None,
    };

    let query = match s[..end].find('?') {
        Some(i) => {
            let q = validate(s, i + 1, end, QUERY)?;
            end = i;
            Some(q)
        }
        None => None,
    };

    let (scheme, hier_start, force_authority) = match s[..end].find(':') {
        Some(i) if Scheme::new(&s[..i]).is_some() => (&s[..i], i + 1, false),
        _ => ("http", 0, true),
    };

    let mut start = hier_start;
    let authority = if s[start..end].starts_with("//") || force_authority {
        if s[start..end].starts_with("//") {
            start += 2;
        }
        let auth_end = s[start..end].find('/').map_or(end, |i| start + i);
        let auth = parse_authority(s, start, auth_end)?;
        if force_authority && auth.host.is_empty() {
            err!(0, MissingHost);
        }
        start = auth_end;
        Some(auth)
    } else {
        None
    };

    let path = validate(s, start, end, PATH)?;

    Ok(Components {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

fn parse_authority(s: &str, mut start: usize, end: usize) -> Result<Authority<'_>> {
    let userinfo = match s[start..end].find('@') {
        Some(i) => {
            let userinfo = validate(s, start, start + i, USERINFO)?;
            start += i + 1;
            Some(userinfo)
        }
        None => None,
    };

    let bytes = s.as_bytes();
    let host_end = if bytes.get(start) == Some(&b'[') {
        let Some(i) = s[start..end].find(']') else {
            err!(start, InvalidIpLiteral);
        };
        let literal_end = start + i + 1;
        if !is_valid_ip_literal(&s[start + 1..literal_end - 1]) {
            err!(start, InvalidIpLiteral);
        }
        if literal_end != end && bytes[literal_end] != b':' {
            err!(literal_end, UnexpectedChar);
        }
        literal_end
    } else {
        let host_end = s[start..end].find(':').map_or(end, |i| start + i);
        validate(s, start, host_end, REG_NAME)?;
        host_end
    };
    let host = &s[start..host_end];

    // Note that the port subcomponent can be empty.
    let port = if host_end < end {
        parse_port(s, host_end + 1, end)?
    } else {
        None
    };

    Ok(Authority {
        userinfo,
        host,
        port,
    })
}

fn parse_port(s: &str, start: usize, end: usize) -> Result<Option<u16>> {
    let digits = validate(s, start, end, DIGIT)?;
    if digits.is_empty() {
        return Ok(None);
    }
    match digits.parse() {
        Ok(port) => Ok(Some(port)),
        Err(_) => err!(start, InvalidPort),
    }
}

/// Checks the text between the brackets of an IP literal.
pub(crate) fn is_valid_ip_literal(s: &str) -> bool {
    // IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
    // ABNF strings are case-insensitive.
    if let Some(rest) = s.strip_prefix(['v', 'V']) {
        let Some((ver, addr)) = rest.split_once('.') else {
            return false;
        };
        !ver.is_empty()
            && ver.bytes().all(pct_enc::is_hexdig)
            && !addr.is_empty()
            && addr.bytes().all(|x| IPV_FUTURE.allows(x))
    } else {
        s.parse::<Ipv6Addr>().is_ok()
    }
}

/// Validates `s[start..end]` with the table, returning the slice.
fn validate(s: &str, start: usize, end: usize, table: Table) -> Result<&str> {
    let bytes = s.as_bytes();
    let mut i = start;

    while i < end {
        let x = bytes[i];
        if x == b'%' && table.allows_pct_encoded() {
            if !pct_enc::is_octet_at(&bytes[..end], i) {
                err!(i, InvalidOctet);
            }
            i += 3;
        } else if table.allows(x) {
            i += 1;
        } else {
            err!(i, UnexpectedChar);
        }
    }
    Ok(&s[start..end])
}
