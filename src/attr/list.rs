//! Space-separated list attributes

use super::{check_finite, format_int, format_number, join_list, AttrValue};
use crate::error::EncodeError;

/// Integers written as a space-separated list, e.g. a `viewBox`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ints(pub Vec<i64>);

impl AttrValue for Ints {
    fn to_attr(&self, _name: &str) -> Result<Option<String>, EncodeError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        Ok(Some(join_list(self.0.iter().map(|v| format_int(*v)))))
    }
}

/// Floats written as a space-separated list, e.g. per-glyph `rotate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Floats(pub Vec<f64>);

impl Floats {
    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AttrValue for Floats {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        let values = self
            .0
            .iter()
            .map(|v| check_finite(name, *v).map(format_number))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(join_list(values)))
    }
}

/// 2D coordinates written as space-separated `x,y` pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points(pub Vec<[f64; 2]>);

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Append a point
    pub fn add(&mut self, x: f64, y: f64) -> &mut Self {
        self.0.push([x, y]);
        self
    }

    /// Append a point given by integer coordinates
    pub fn add_int(&mut self, x: i32, y: i32) -> &mut Self {
        self.add(f64::from(x), f64::from(y))
    }

    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(f64, f64)> for Points {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(x, y)| [x, y]).collect())
    }
}

impl AttrValue for Points {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        let pairs = self
            .0
            .iter()
            .map(|[x, y]| {
                let x = check_finite(name, *x)?;
                let y = check_finite(name, *y)?;
                Ok(format!("{},{}", format_number(x), format_number(y)))
            })
            .collect::<Result<Vec<_>, EncodeError>>()?;
        Ok(Some(join_list(pairs)))
    }
}
