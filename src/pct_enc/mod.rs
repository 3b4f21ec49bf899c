//! Percent-encoding utilities.
//!
//! Two encoders live here. [`encode_to`] escapes the text of a URI component
//! with uppercase hexadecimal digits and leaves already percent-encoded octets
//! intact when the table allows them. [`encode_form_to`] is the query codec:
//! it form-encodes a query key or value with lowercase hexadecimal digits and
//! writes a space as `"+"`.

pub mod table;

pub use table::Table;

use core::str;

const fn gen_octet_table(hex_digits: &[u8; 16]) -> [u8; 256 * 3] {
    let mut i = 0;
    let mut table = [0; 256 * 3];
    while i < 256 {
        table[i * 3] = b'%';
        table[i * 3 + 1] = hex_digits[i >> 4];
        table[i * 3 + 2] = hex_digits[i & 0b1111];
        i += 1;
    }
    table
}

const UPPER: &[u8; 256 * 3] = &gen_octet_table(b"0123456789ABCDEF");
const LOWER: &[u8; 256 * 3] = &gen_octet_table(b"0123456789abcdef");

const UPPER_STR: &str = match str::from_utf8(UPPER) {
    Ok(s) => s,
    Err(_) => unreachable!(),
};

const LOWER_STR: &str = match str::from_utf8(LOWER) {
    Ok(s) => s,
    Err(_) => unreachable!(),
};

/// Percent-encodes a byte with uppercase hexadecimal digits.
pub(crate) fn encode_byte(x: u8) -> &'static str {
    &UPPER_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes a byte with lowercase hexadecimal digits.
pub(crate) fn encode_byte_lower(x: u8) -> &'static str {
    &LOWER_STR[x as usize * 3..x as usize * 3 + 3]
}

#[inline]
pub(crate) const fn is_hexdig(x: u8) -> bool {
    table::HEXDIG.allows(x)
}

#[inline]
pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    is_hexdig(hi) && is_hexdig(lo)
}

/// Checks whether a well-formed percent-encoded octet starts at index `i`.
#[inline]
pub(crate) fn is_octet_at(s: &[u8], i: usize) -> bool {
    matches!(s.get(i..i + 3), Some(&[b'%', hi, lo]) if is_hexdig_pair(hi, lo))
}

/// Percent-encodes a string with the given table and appends the result onto `buf`.
///
/// A byte is preserved if the table [allows] it and percent-encoded otherwise.
/// When the table [allows percent-encoded octets], every well-formed octet
/// in the input is copied as is, so encoding a component twice is a no-op.
///
/// [allows]: Table::allows
/// [allows percent-encoded octets]: Table::allows_pct_encoded
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::pct_enc::{encode_to, table::PATH};
///
/// let mut buf = String::new();
/// encode_to("/a b/%7E/%zz", PATH, &mut buf);
/// assert_eq!(buf, "/a%20b/%7E/%25zz");
/// ```
pub fn encode_to(s: &str, table: Table, buf: &mut String) {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut start = 0;

    while i < bytes.len() {
        let x = bytes[i];
        if table.allows(x) {
            i += 1;
        } else if x == b'%' && table.allows_pct_encoded() && is_octet_at(bytes, i) {
            i += 3;
        } else {
            buf.push_str(&s[start..i]);
            let len = utf8_len(x);
            for &b in &bytes[i..i + len] {
                buf.push_str(encode_byte(b));
            }
            i += len;
            start = i;
        }
    }
    buf.push_str(&s[start..]);
}

/// Returns the length of a UTF-8 sequence given its first byte.
#[inline]
const fn utf8_len(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0x80..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

/// Form-encodes a query key or value and appends the result onto `buf`.
///
/// Bytes allowed by [`FORM_DATA`] are preserved, a space is written as `"+"`,
/// and every other byte is percent-encoded with **lowercase** hexadecimal
/// digits. Nothing is treated as already encoded: `"%"` itself becomes `"%25"`.
///
/// [`FORM_DATA`]: table::FORM_DATA
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::pct_enc::encode_form_to;
///
/// let mut buf = String::new();
/// encode_form_to(":?&=#/@ x", &mut buf);
/// assert_eq!(buf, "%3a%3f%26%3d%23%2f%40+x");
/// ```
pub fn encode_form_to(s: &str, buf: &mut String) {
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        if ch.is_ascii() && table::FORM_DATA.allows(ch as u8) {
            continue;
        }
        buf.push_str(&s[start..i]);
        if ch == ' ' {
            buf.push('+');
        } else {
            for &x in ch.encode_utf8(&mut [0; 4]).as_bytes() {
                buf.push_str(encode_byte_lower(x));
            }
        }
        start = i + ch.len_utf8();
    }
    buf.push_str(&s[start..]);
}

#[cfg(test)]
mod tests {
    use super::{table::*, *};

    fn enc(s: &str, table: Table) -> String {
        let mut buf = String::new();
        encode_to(s, table, &mut buf);
        buf
    }

    fn form(s: &str) -> String {
        let mut buf = String::new();
        encode_form_to(s, &mut buf);
        buf
    }

    #[test]
    fn octet_tables() {
        assert_eq!(encode_byte(0x3a), "%3A");
        assert_eq!(encode_byte_lower(0x3a), "%3a");
        assert_eq!(encode_byte(0), "%00");
        assert_eq!(encode_byte_lower(0xff), "%ff");
    }

    #[test]
    fn component_encoding() {
        assert_eq!(enc("just/a/path.extension", PATH), "just/a/path.extension");
        assert_eq!(enc("a b", FRAGMENT), "a%20b");
        assert_eq!(enc("100%", FRAGMENT), "100%25");
        assert_eq!(enc("some%2bvalue", QUERY), "some%2bvalue");
        assert_eq!(enc("测试", PATH), "%E6%B5%8B%E8%AF%95");
        assert_eq!(enc("a测b", PATH), "a%E6%B5%8Bb");
        assert_eq!(enc("us:er", USER), "us%3Aer");
        assert_eq!(enc("pass:word", USERINFO), "pass:word");
        assert_eq!(enc("#frag", FRAGMENT), "%23frag");
    }

    #[test]
    fn form_encoding() {
        assert_eq!(form(":?&=#/@"), "%3a%3f%26%3d%23%2f%40");
        assert_eq!(form("testvalue"), "testvalue");
        assert_eq!(form("some+value"), "some%2bvalue");
        assert_eq!(form("a b"), "a+b");
        assert_eq!(form("2.5"), "2.5");
        assert_eq!(form("-_.!*()"), "-_.!*()");
        assert_eq!(form("~"), "%7e");
        assert_eq!(form("%41"), "%2541");
        assert_eq!(form("é"), "%c3%a9");
        assert_eq!(form(""), "");
    }
}
