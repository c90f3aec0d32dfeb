//! Text elements and nested spans
//!
//! A [`Text`] holds mixed content: runs of character data interleaved with
//! nested spans. The same type is written as `<text>` at the top level and as
//! `<tspan>` when nested. Content is written without added whitespace even
//! when the document is pretty printed, since whitespace inside text is
//! rendered.

use std::fmt::Write;

use super::shapes::{non_zero, shape_attrs};
use super::{impl_attributes, Object};
use crate::attr::{AttrValue, Floats, Length};
use crate::error::EncodeError;
use crate::markup::MarkupWriter;

/// Horizontal alignment of text relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl AttrValue for TextAnchor {
    fn to_attr(&self, _name: &str) -> Result<Option<String>, EncodeError> {
        let value = match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        Ok(Some(value.to_string()))
    }
}

/// How text is stretched to match `textLength`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAdjust {
    Spacing,
    SpacingAndGlyphs,
}

impl AttrValue for LengthAdjust {
    fn to_attr(&self, _name: &str) -> Result<Option<String>, EncodeError> {
        let value = match self {
            LengthAdjust::Spacing => "spacing",
            LengthAdjust::SpacingAndGlyphs => "spacingAndGlyphs",
        };
        Ok(Some(value.to_string()))
    }
}

/// One piece of a text element's content
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Chars(String),
    Span(Text),
}

/// A `<text>` element, or a `<tspan>` when nested in another text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub dx: Option<Length>,
    pub dy: Option<Length>,
    pub anchor: Option<TextAnchor>,
    pub text_length: Option<Length>,
    pub length_adjust: Option<LengthAdjust>,
    /// Per-glyph rotation in degrees
    pub rotate: Floats,
    object: Object,
    content: Vec<TextContent>,
}

impl_attributes!(Text);

impl Text {
    pub fn new(x: f64, y: f64, content: &str) -> Self {
        let mut text = Self {
            x,
            y,
            ..Self::default()
        };
        if !content.is_empty() {
            text.content.push(TextContent::Chars(content.to_string()));
        }
        text
    }

    pub fn content(&self) -> &[TextContent] {
        &self.content
    }

    pub fn anchor(&mut self, anchor: TextAnchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    /// Shift relative to the current text position
    pub fn shift(&mut self, dx: Option<Length>, dy: Option<Length>) -> &mut Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Stretch or squeeze the text to `length`
    pub fn fit(&mut self, length: Length, adjust: LengthAdjust) -> &mut Self {
        self.text_length = Some(length);
        self.length_adjust = Some(adjust);
        self
    }

    /// Rotate individual glyphs; the last angle applies to any remaining glyphs
    pub fn rotate_glyphs(&mut self, degrees: impl IntoIterator<Item = f64>) -> &mut Self {
        self.rotate = Floats(degrees.into_iter().collect());
        self
    }

    /// Append character data after the existing content
    pub fn add_text(&mut self, content: &str) -> &mut Self {
        self.content.push(TextContent::Chars(content.to_string()));
        self
    }

    /// Append a nested span and return it
    pub fn add_span(&mut self, content: &str) -> &mut Text {
        self.content
            .push(TextContent::Span(Text::new(0.0, 0.0, content)));
        match self.content.last_mut() {
            Some(TextContent::Span(span)) => span,
            _ => unreachable!("just pushed a span"),
        }
    }

    pub(crate) fn encode_as<W: Write>(
        &self,
        tag: &str,
        w: &mut MarkupWriter<'_, W>,
    ) -> Result<(), EncodeError> {
        let attrs = shape_attrs(&self.object, |a| {
            a.push("x", &non_zero(self.x))?
                .push("y", &non_zero(self.y))?
                .push("dx", &self.dx)?
                .push("dy", &self.dy)?
                .push("text-anchor", &self.anchor)?
                .push("textLength", &self.text_length)?
                .push("lengthAdjust", &self.length_adjust)?
                .push("rotate", &self.rotate)?;
            Ok(())
        })?;

        if self.content.is_empty() {
            return w.empty(tag, &attrs);
        }
        w.start_inline(tag, &attrs)?;
        for item in &self.content {
            match item {
                TextContent::Chars(chars) => w.chars(chars)?,
                TextContent::Span(span) => span.encode_as("tspan", w)?,
            }
        }
        w.end_inline(tag)
    }
}
