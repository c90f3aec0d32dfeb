//! Attribute value formatting
//!
//! Every composite-valued field in the element tree implements [`AttrValue`],
//! which the markup encoder invokes by type when it writes an element's
//! attributes. Returning `Ok(None)` omits the attribute entirely.
//!
//! Numbers use the shortest decimal text that parses back to the same `f64`,
//! without exponent notation, so integral values print without a decimal
//! point (`10.0` becomes `"10"`).

mod length;
mod list;

pub use length::{Length, Unit};
pub use list::{Floats, Ints, Points};

use crate::error::EncodeError;

/// A value that can be written as the text of a markup attribute
pub trait AttrValue {
    /// Format the value for the attribute `name`.
    ///
    /// `Ok(None)` means the attribute should be left out of the output.
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError>;
}

/// Format a float as its shortest round-trippable decimal text
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Format an integer as decimal text
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Join pre-formatted values with single spaces
///
/// An empty input yields an empty string; callers omit the attribute in
/// that case.
pub fn join_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for value in values {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(value.as_ref());
    }
    out
}

/// Reject NaN and infinities before they reach the output
pub(crate) fn check_finite(name: &str, value: f64) -> Result<f64, EncodeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EncodeError::non_finite(name, value))
    }
}

impl AttrValue for f64 {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        check_finite(name, *self).map(|v| Some(format_number(v)))
    }
}

impl AttrValue for i64 {
    fn to_attr(&self, _name: &str) -> Result<Option<String>, EncodeError> {
        Ok(Some(format_int(*self)))
    }
}

impl AttrValue for str {
    fn to_attr(&self, _name: &str) -> Result<Option<String>, EncodeError> {
        if self.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.to_string()))
        }
    }
}

impl AttrValue for String {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        self.as_str().to_attr(name)
    }
}

impl<T: AttrValue> AttrValue for Option<T> {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        match self {
            Some(value) => value.to_attr(name),
            None => Ok(None),
        }
    }
}

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        (**self).to_attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(12.25), "12.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_round_trips() {
        let samples = [
            0.0,
            -0.0,
            1.0,
            -1.5,
            0.1,
            1.0 / 3.0,
            std::f64::consts::PI,
            1e-7,
            123_456_789.123_456_78,
            1e21,
            f64::MAX,
            f64::MIN_POSITIVE,
            -2.5e-300,
        ];
        for value in samples {
            let text = format_number(value);
            let parsed: f64 = text.parse().expect("formatted number should parse");
            assert_eq!(parsed, value, "round trip failed for {text}");
            assert!(!text.contains('e'), "unexpected exponent in {text}");
        }
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(["a", "b", "c"]), "a b c");
        assert_eq!(join_list(["solo"]), "solo");
        assert_eq!(join_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_scalar_attr_values() {
        assert_eq!(2.5f64.to_attr("x").unwrap(), Some("2.5".to_string()));
        assert_eq!(42i64.to_attr("n").unwrap(), Some("42".to_string()));
        assert_eq!("".to_attr("id").unwrap(), None);
        assert_eq!(Some(1.0f64).to_attr("x").unwrap(), Some("1".to_string()));
        assert_eq!(None::<f64>.to_attr("x").unwrap(), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(f64::NAN.to_attr("x").is_err());
        assert!(f64::INFINITY.to_attr("x").is_err());
        assert!(matches!(
            f64::NEG_INFINITY.to_attr("y"),
            Err(EncodeError::NonFiniteNumber { ref attr, .. }) if attr == "y"
        ));
    }
}
