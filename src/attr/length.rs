//! Lengths with an optional unit suffix

use std::fmt;

use super::{check_finite, format_number, AttrValue};
use crate::error::EncodeError;

/// Unit suffix appended verbatim after a length's number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// No suffix (user units)
    None,
    Px,
    Em,
    Ex,
    Mm,
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Mm => "mm",
            Unit::Percent => "%",
        }
    }
}

/// A number, a value with a unit, or a percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A length written without a unit
    pub fn number(value: f64) -> Self {
        Self::new(value, Unit::None)
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    pub fn ex(value: f64) -> Self {
        Self::new(value, Unit::Ex)
    }

    pub fn mm(value: f64) -> Self {
        Self::new(value, Unit::Mm)
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

impl AttrValue for Length {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        check_finite(name, self.value)?;
        Ok(Some(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_suffixes() {
        assert_eq!(Length::number(12.0).to_string(), "12");
        assert_eq!(Length::px(3.5).to_string(), "3.5px");
        assert_eq!(Length::em(1.2).to_string(), "1.2em");
        assert_eq!(Length::ex(-0.5).to_string(), "-0.5ex");
        assert_eq!(Length::mm(200.0).to_string(), "200mm");
        assert_eq!(Length::percent(50.0).to_string(), "50%");
    }

    #[test]
    fn test_length_from_f64() {
        let len: Length = 7.0.into();
        assert_eq!(len, Length::number(7.0));
    }

    #[test]
    fn test_length_attr_rejects_nan() {
        assert!(Length::percent(f64::NAN).to_attr("width").is_err());
        assert_eq!(
            Length::percent(100.0).to_attr("width").unwrap(),
            Some("100%".to_string())
        );
    }
}
