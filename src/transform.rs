//! Transform chains for the `transform` attribute.
//!
//! A [`TransformList`] is an ordered, append-only sequence of named
//! operations. Order matters: SVG composes the functions left to right, so
//! the list is written exactly as it was built and never reordered.
//!
//! ## Serialization
//!
//! Each operation is written in functional notation with its arguments joined
//! by a comma, and the operations are joined by single spaces:
//!
//! ```text
//! translate(10,20) rotate(45) skewX(5)
//! ```
//!
//! An empty list writes nothing and the attribute is omitted.
//!
//! ## Extending
//!
//! Operations are plain data ([`Transform`] = name + typed arguments), so new
//! kinds can be appended through [`TransformList::push`] without touching the
//! existing builders.

use std::borrow::Cow;
use std::fmt;

use crate::attr::{check_finite, format_int, format_number, join_list, AttrValue};
use crate::error::EncodeError;

/// A single argument of a transform function, formatting itself on output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformArg {
    Int(i64),
    Float(f64),
}

impl fmt::Display for TransformArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformArg::Int(i) => f.write_str(&format_int(*i)),
            TransformArg::Float(v) => f.write_str(&format_number(*v)),
        }
    }
}

impl From<i64> for TransformArg {
    fn from(value: i64) -> Self {
        TransformArg::Int(value)
    }
}

impl From<f64> for TransformArg {
    fn from(value: f64) -> Self {
        TransformArg::Float(value)
    }
}

/// A named transform function with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub name: Cow<'static, str>,
    pub args: Vec<TransformArg>,
}

impl Transform {
    pub fn new(name: impl Into<Cow<'static, str>>, args: Vec<TransformArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    fn floats(name: &'static str, args: &[f64]) -> Self {
        Self::new(name, args.iter().copied().map(TransformArg::Float).collect())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Ordered list of transform functions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformList(Vec<Transform>);

impl TransformList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary transform function
    pub fn push(&mut self, transform: Transform) -> &mut Self {
        self.0.push(transform);
        self
    }

    /// Translate by `(x, y)`
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Transform::floats("translate", &[x, y]))
    }

    /// Translate by integer offsets
    pub fn translate_int(&mut self, x: i64, y: i64) -> &mut Self {
        self.push(Transform::new(
            "translate",
            vec![TransformArg::Int(x), TransformArg::Int(y)],
        ))
    }

    /// Rotate by `degrees` around the origin of the current coordinate system
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.push(Transform::floats("rotate", &[degrees]))
    }

    /// Rotate by `degrees` around the point `(cx, cy)`
    pub fn rotate_about(&mut self, degrees: f64, cx: f64, cy: f64) -> &mut Self {
        self.push(Transform::floats("rotate", &[degrees, cx, cy]))
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.push(Transform::floats("scale", &[sx, sy]))
    }

    /// Skew along the x axis by `degrees`
    pub fn skew_x(&mut self, degrees: f64) -> &mut Self {
        self.push(Transform::floats("skewX", &[degrees]))
    }

    /// Skew along the y axis by `degrees`
    pub fn skew_y(&mut self, degrees: f64) -> &mut Self {
        self.push(Transform::floats("skewY", &[degrees]))
    }

    /// Apply an explicit `matrix(a,b,c,d,e,f)`
    pub fn matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.push(Transform::floats("matrix", &[a, b, c, d, e, f]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transform> {
        self.0.iter()
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_list(self.0.iter().map(|t| t.to_string())))
    }
}

impl AttrValue for TransformList {
    fn to_attr(&self, name: &str) -> Result<Option<String>, EncodeError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        for arg in self.0.iter().flat_map(|t| t.args.iter()) {
            if let TransformArg::Float(value) = arg {
                check_finite(name, *value)?;
            }
        }
        Ok(Some(self.to_string()))
    }
}
