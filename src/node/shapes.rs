//! Basic shapes

use std::fmt::Write;

use super::{impl_attributes, Object};
use crate::attr::Points;
use crate::error::EncodeError;
use crate::markup::{Attrs, Encode, MarkupWriter};

/// Build the attribute list: id, the shape's own attributes, then presentation
pub(super) fn shape_attrs(
    object: &Object,
    own: impl FnOnce(&mut Attrs) -> Result<(), EncodeError>,
) -> Result<Attrs, EncodeError> {
    let mut attrs = Attrs::new();
    object.push_id(&mut attrs)?;
    own(&mut attrs)?;
    object.push_presentation(&mut attrs)?;
    Ok(attrs)
}

/// Zero coordinates are left out, matching the SVG default
pub(super) fn non_zero(value: f64) -> Option<f64> {
    Some(value).filter(|v| *v != 0.0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    object: Object,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            object: Object::default(),
        }
    }
}

impl Encode for Line {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("x1", &self.x1)?
                .push("y1", &self.y1)?
                .push("x2", &self.x2)?
                .push("y2", &self.y2)?;
            Ok(())
        })?;
        w.empty("line", &attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radii, omitted when unset
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    object: Object,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: None,
            ry: None,
            object: Object::default(),
        }
    }

    /// Round the corners with radii `rx` and `ry`
    pub fn rounded(&mut self, rx: f64, ry: f64) -> &mut Self {
        self.rx = Some(rx);
        self.ry = Some(ry);
        self
    }
}

impl Encode for Rect {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("x", &self.x)?
                .push("y", &self.y)?
                .push("width", &self.width)?
                .push("height", &self.height)?
                .push("rx", &self.rx)?
                .push("ry", &self.ry)?;
            Ok(())
        })?;
        w.empty("rect", &attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    object: Object,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            object: Object::default(),
        }
    }
}

impl Encode for Circle {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("cx", &self.cx)?
                .push("cy", &self.cy)?
                .push("r", &self.r)?;
            Ok(())
        })?;
        w.empty("circle", &attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    object: Object,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            object: Object::default(),
        }
    }
}

impl Encode for Ellipse {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("cx", &self.cx)?
                .push("cy", &self.cy)?
                .push("rx", &self.rx)?
                .push("ry", &self.ry)?;
            Ok(())
        })?;
        w.empty("ellipse", &attrs)
    }
}

/// Open or closed sequence of points
///
/// The same shape backs `<polyline>` and `<polygon>`; the tag is chosen by
/// the node variant holding it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Points,
    object: Object,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `n` more points
    pub fn pre_alloc(&mut self, n: usize) -> &mut Self {
        self.points.reserve(n);
        self
    }

    pub fn add(&mut self, x: f64, y: f64) -> &mut Self {
        self.points.add(x, y);
        self
    }

    pub fn add_int(&mut self, x: i32, y: i32) -> &mut Self {
        self.points.add_int(x, y);
        self
    }

    pub(crate) fn encode_as<W: Write>(
        &self,
        tag: &str,
        w: &mut MarkupWriter<'_, W>,
    ) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("points", &self.points)?;
            Ok(())
        })?;
        w.empty(tag, &attrs)
    }
}

/// Reference to another element by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Use {
    pub x: f64,
    pub y: f64,
    /// Target id, without the leading `#`
    pub target: String,
    object: Object,
}

impl Use {
    pub fn new(x: f64, y: f64, target: impl Into<String>) -> Self {
        Self {
            x,
            y,
            target: target.into(),
            object: Object::default(),
        }
    }
}

impl Encode for Use {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let href = format!("#{}", self.target);
        let attrs = shape_attrs(&self.object, |a| {
            a.push("x", &non_zero(self.x))?
                .push("y", &non_zero(self.y))?
                .push("href", &href)?;
            Ok(())
        })?;
        w.empty("use", &attrs)
    }
}

impl_attributes!(Line, Rect, Circle, Ellipse, Polyline, Use);
