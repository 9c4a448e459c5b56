// value.rs - Host-neutral dynamic values passed to and from functions.

use std::borrow::Cow;
use std::fmt;

/// A dynamically typed SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce to text the way a SQL host reads a text operand.
    ///
    /// Returns `None` for NULL and for blobs that are not valid UTF-8.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(Cow::Owned(i.to_string())),
            Value::Real(r) => Some(Cow::Owned(real_text(*r))),
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Blob(b) => std::str::from_utf8(b).ok().map(Cow::Borrowed),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => f.write_str(&real_text(*r)),
            Value::Text(s) => write!(f, "{}", s),
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

/// SQL hosts keep a trailing `.0` on whole reals so they read back as REAL.
fn real_text(r: f64) -> String {
    if r.is_finite() && r.fract() == 0.0 {
        format!("{:.1}", r)
    } else {
        r.to_string()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Integer(i64::from(b))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coercion() {
        assert_eq!(Value::Null.as_text(), None);
        assert_eq!(Value::from("abc").as_text().as_deref(), Some("abc"));
        assert_eq!(Value::Integer(-7).as_text().as_deref(), Some("-7"));
        assert_eq!(Value::Real(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Value::Blob(b"xy".to_vec()).as_text().as_deref(), Some("xy"));
    }

    #[test]
    fn whole_reals_keep_a_decimal_point() {
        assert_eq!(Value::Real(2.0).as_text().as_deref(), Some("2.0"));
        assert_eq!(Value::Real(-3.0).as_text().as_deref(), Some("-3.0"));
        assert_eq!(Value::Real(0.25).as_text().as_deref(), Some("0.25"));
        assert_eq!(Value::Real(2.0).to_string(), "2.0");
    }

    #[test]
    fn invalid_utf8_blob_is_unreadable() {
        assert_eq!(Value::Blob(vec![0xff, 0xfe]).as_text(), None);
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(true), Value::Integer(1));
        assert_eq!(Value::from(false), Value::Integer(0));
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Integer(3));
        assert!(Value::Null.is_null());
    }
}
