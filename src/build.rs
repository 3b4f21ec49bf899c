//! Serialization of URI components into a [`Uri`].

use crate::{
    component::default_port,
    internal::{AuthMeta, Meta},
    pct_enc::{encode_to, table::*},
    Uri,
};
use core::num::NonZeroUsize;
use std::{borrow::Cow, net::Ipv6Addr};

/// Unencoded (or partially encoded) components to serialize.
///
/// Valid percent-encoded octets in any text component are kept as they are,
/// so components taken from a parsed URI come out unchanged.
#[derive(Clone, Debug)]
pub(crate) struct Parts<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: Option<AuthParts<'a>>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<Cow<'a, str>>,
    pub(crate) fragment: Option<&'a str>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct AuthParts<'a> {
    pub(crate) user: Option<&'a str>,
    pub(crate) password: Option<&'a str>,
    pub(crate) host: &'a str,
    pub(crate) port: Option<u16>,
}

struct Serializer {
    buf: String,
    meta: Meta,
}

impl Serializer {
    fn push_scheme(&mut self, v: &str) {
        self.buf.extend(v.chars().map(|c| c.to_ascii_lowercase()));
        self.meta.scheme_end = self.buf.len();
        self.buf.push(':');
    }

    fn start_authority(&mut self) {
        self.buf.push_str("//");
        self.meta.auth_meta = Some(AuthMeta::default());
    }

    fn auth_meta(&mut self) -> &mut AuthMeta {
        self.meta.auth_meta.get_or_insert_with(AuthMeta::default)
    }

    fn push_userinfo(&mut self, user: &str, password: Option<&str>) {
        encode_to(user, USER, &mut self.buf);
        if let Some(password) = password {
            self.buf.push(':');
            encode_to(password, USERINFO, &mut self.buf);
        }
        let end = self.buf.len();
        self.auth_meta().userinfo_end = Some(end);
        self.buf.push('@');
    }

    fn push_host(&mut self, host: &str) {
        let start = self.buf.len();

        if is_ip_literal(host) {
            self.buf.push_str(host);
        } else if let Ok(addr) = host.parse::<Ipv6Addr>() {
            self.buf.push('[');
            self.buf.push_str(&addr.to_string());
            self.buf.push(']');
        } else {
            encode_to(host, REG_NAME, &mut self.buf);
        }
        lowercase_except_octets(&mut self.buf, start);

        let end = self.buf.len();
        self.auth_meta().host_bounds = (start, end);
    }

    fn push_port(&mut self, port: Option<u16>) {
        let scheme = &self.buf[..self.meta.scheme_end];
        let default = default_port(scheme);

        if let Some(port) = port.filter(|&port| Some(port) != default) {
            self.buf.push(':');
            self.buf.push_str(&port.to_string());
        }
        self.auth_meta().port = port.or(default);
    }

    fn push_path(&mut self, v: &str) {
        let start = self.buf.len();

        if self.meta.auth_meta.is_some() {
            if !v.starts_with('/') {
                self.buf.push('/');
            }
        } else if v.starts_with("//") {
            // Keeps the path from being read as an authority.
            self.buf.push_str("/.");
        }
        encode_to(v, PATH, &mut self.buf);

        self.meta.path_bounds = (start, self.buf.len());
    }

    fn push_query(&mut self, v: &str) {
        self.buf.push('?');
        encode_to(v, QUERY, &mut self.buf);
        self.meta.query_end = NonZeroUsize::new(self.buf.len());
    }

    fn push_fragment(&mut self, v: &str) {
        self.buf.push('#');
        self.meta.fragment_start = NonZeroUsize::new(self.buf.len());
        encode_to(v, FRAGMENT, &mut self.buf);
    }
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') && host.ends_with(']')
}

/// Lowercases ASCII letters in `buf[start..]`, leaving the hexadecimal
/// digits of percent-encoded octets as they are.
fn lowercase_except_octets(buf: &mut String, start: usize) {
    let tail = buf.split_off(start);
    let mut octet_digits = 0;
    for ch in tail.chars() {
        if octet_digits > 0 {
            octet_digits -= 1;
            buf.push(ch);
        } else if ch == '%' {
            octet_digits = 2;
            buf.push(ch);
        } else {
            buf.push(ch.to_ascii_lowercase());
        }
    }
}

/// Serializes the parts into a fully percent-encoded URI.
pub(crate) fn serialize(parts: &Parts<'_>) -> Uri {
    let mut s = Serializer {
        buf: String::new(),
        meta: Meta::default(),
    };

    s.push_scheme(parts.scheme);

    if let Some(auth) = &parts.authority {
        s.start_authority();
        if let Some(user) = auth.user {
            s.push_userinfo(user, auth.password);
        }
        s.push_host(auth.host);
        s.push_port(auth.port);
    }

    s.push_path(parts.path);

    if let Some(query) = &parts.query {
        s.push_query(query);
    }
    if let Some(fragment) = parts.fragment {
        s.push_fragment(fragment);
    }

    Uri {
        val: s.buf,
        meta: s.meta,
    }
}
