//! Query parameter values and the query codec.

use crate::{
    error::{ArgumentError, ArgumentErrorKind},
    pct_enc::encode_form_to,
};
use std::borrow::Cow;

/// A value that can be used as a query parameter value.
///
/// Conversion is locale independent: numbers always use `'.'` as the decimal
/// separator and never contain grouping characters or an exponent.
///
/// | type | conversion |
/// |---|---|
/// | `str`, `String`, `Cow<str>`, `char` | as is |
/// | `bool` | `"true"` or `"false"` |
/// | integers | decimal digits, with a leading `'-'` when negative |
/// | `f32`, `f64` | shortest decimal that round-trips, `1.0` as `"1"`, non-finite values as `"NaN"`, `"Infinity"` and `"-Infinity"` |
///
/// # Examples
///
/// ```
/// use fluent_uri_builder::QueryValue;
///
/// assert_eq!(2.5f64.to_query_value(), "2.5");
/// assert_eq!(1.0f32.to_query_value(), "1");
/// assert_eq!((-3i8).to_query_value(), "-3");
/// assert_eq!(1e21f64.to_query_value(), "1000000000000000000000");
/// assert_eq!(f64::NEG_INFINITY.to_query_value(), "-Infinity");
/// ```
pub trait QueryValue {
    /// Converts the value to its canonical string form.
    fn to_query_value(&self) -> Cow<'_, str>;
}

impl QueryValue for str {
    #[inline]
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl QueryValue for String {
    #[inline]
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl QueryValue for Cow<'_, str> {
    #[inline]
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl QueryValue for char {
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    #[inline]
    fn to_query_value(&self) -> Cow<'_, str> {
        (**self).to_query_value()
    }
}

macro_rules! impl_query_value_int {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_query_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_query_value_float {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> Cow<'_, str> {
                    // `Display` for floats prints the shortest representation that
                    // round-trips, with `'.'` and without an exponent.
                    if self.is_nan() {
                        Cow::Borrowed("NaN")
                    } else if self.is_infinite() {
                        Cow::Borrowed(if *self > 0.0 { "Infinity" } else { "-Infinity" })
                    } else {
                        Cow::Owned(self.to_string())
                    }
                }
            }
        )*
    };
}

impl_query_value_float!(f32, f64);

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Converts and checks one key/value pair.
pub(crate) fn pair<V: QueryValue + ?Sized>(
    key: &str,
    value: &V,
) -> Result<(String, String), ArgumentError> {
    if is_blank(key) {
        return Err(ArgumentError::new(ArgumentErrorKind::InvalidArgument, "key"));
    }
    let value = value.to_query_value();
    if is_blank(&value) {
        return Err(ArgumentError::new(ArgumentErrorKind::InvalidArgument, "value"));
    }
    Ok((key.to_owned(), value.into_owned()))
}

/// Encodes query parameters as `k1=v1&k2=v2`, in order.
pub(crate) fn encode(pairs: &[(String, String)]) -> String {
    let mut buf = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            buf.push('&');
        }
        encode_form_to(key, &mut buf);
        buf.push('=');
        encode_form_to(value, &mut buf);
    }
    buf
}

/// Flattens a serializable value into query parameters.
///
/// The value must serialize to a map or struct whose values are all
/// strings, numbers or booleans. Field order is kept.
#[cfg(feature = "serde")]
pub(crate) fn pairs_from<T: serde::Serialize + ?Sized>(
    bag: &T,
) -> Result<Vec<(String, String)>, ArgumentError> {
    use serde_json::Value;

    let invalid = || ArgumentError::new(ArgumentErrorKind::InvalidArgument, "params");

    let Ok(Value::Object(map)) = serde_json::to_value(bag) else {
        return Err(invalid());
    };

    map.iter()
        .map(|(key, value)| match value {
            Value::String(s) => pair(key, s.as_str()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    pair(key, &i)
                } else if let Some(u) = n.as_u64() {
                    pair(key, &u)
                } else {
                    n.as_f64()
                        .map_or_else(|| pair(key, &n.to_string()), |f| pair(key, &f))
                }
            }
            Value::Bool(b) => pair(key, b),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_numbers() {
        assert_eq!(1i32.to_query_value(), "1");
        assert_eq!(2.5f64.to_query_value(), "2.5");
        assert_eq!(2.5f32.to_query_value(), "2.5");
        assert_eq!(0.1f64.to_query_value(), "0.1");
        assert_eq!((-0.5f64).to_query_value(), "-0.5");
        assert_eq!(1234567.0f64.to_query_value(), "1234567");
        assert_eq!(f64::NAN.to_query_value(), "NaN");
        assert_eq!(f32::INFINITY.to_query_value(), "Infinity");
        assert_eq!(u64::MAX.to_query_value(), "18446744073709551615");
        assert_eq!(i128::MIN.to_query_value(), "-170141183460469231731687303715884105728");
    }

    #[test]
    fn other_values() {
        assert_eq!(true.to_query_value(), "true");
        assert_eq!('x'.to_query_value(), "x");
        assert_eq!("s".to_query_value(), "s");
        assert_eq!(String::from("s").to_query_value(), "s");
        assert_eq!((&&"s").to_query_value(), "s");
    }

    #[test]
    fn pair_validation() {
        assert_eq!(pair("k", "v"), Ok(("k".to_owned(), "v".to_owned())));
        assert_eq!(pair("", "v").unwrap_err().param(), "key");
        assert_eq!(pair(" \t", "v").unwrap_err().param(), "key");
        assert_eq!(pair("k", "").unwrap_err().param(), "value");
        assert_eq!(pair("k", "\u{3000}").unwrap_err().param(), "value");
        assert_eq!(pair("k", &2.5f64).unwrap().1, "2.5");
    }

    #[test]
    fn codec() {
        assert_eq!(encode(&[]), "");
        let pairs = [
            ("testkey".to_owned(), "testvalue".to_owned()),
            ("another key".to_owned(), ":?&=#/@".to_owned()),
        ];
        assert_eq!(
            encode(&pairs),
            "testkey=testvalue&another+key=%3a%3f%26%3d%23%2f%40"
        );
    }
}
