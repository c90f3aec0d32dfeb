//! The SVG document root

use std::fmt::Write;

use tracing::debug;

use crate::attr::{Ints, Length};
use crate::config::DocumentConfig;
use crate::error::EncodeError;
use crate::markup::{Attrs, MarkupWriter};
use crate::node::{Attributes, Container, Object};
use crate::style::{StyleError, StyleTable, Styling};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An SVG document: canvas size, embedded stylesheet and the element tree
///
/// The document's own id, transform and class live on the root container
/// and are written on the `<svg>` element.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// `min-x min-y width height`; omitted when empty
    pub view_box: Ints,
    pub width: Option<Length>,
    pub height: Option<Length>,
    root: Container,
    styles: StyleTable,
    config: DocumentConfig,
}

impl Attributes for Document {
    fn object(&self) -> &Object {
        self.root.object()
    }

    fn object_mut(&mut self) -> &mut Object {
        self.root.object_mut()
    }
}

impl Document {
    /// Create an empty document
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn set_view_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut Self {
        self.view_box = Ints(vec![x, y, width, height]);
        self
    }

    pub fn set_size(&mut self, width: Length, height: Length) -> &mut Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Top-level elements
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Top-level elements, for appending
    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    /// Turn a style declaration into a [`Styling`] for use with
    /// [`Attributes::with_style`].
    ///
    /// With `embed_stylesheet` enabled the declaration becomes a class rule
    /// in this document's `<style>` element; `name` is the preferred class
    /// name and is made unique if it is already taken. Otherwise the style is
    /// applied inline.
    ///
    /// Fails when rules are scoped to the document but no id has been set.
    pub fn make_style(&mut self, name: &str, style: &str) -> Result<Styling, StyleError> {
        let id = self.root.id();
        self.styles.make_style(&self.config.style, id, name, style)
    }

    /// The embedded stylesheet text generated so far
    pub fn stylesheet(&self) -> &str {
        self.styles.stylesheet()
    }

    /// Replace the `<style>` text with caller-supplied CSS
    ///
    /// The text is written whether or not `embed_stylesheet` is enabled;
    /// rules from [`Document::make_style`] are appended after it.
    pub fn set_stylesheet(&mut self, css: impl Into<String>) -> &mut Self {
        self.styles.set_stylesheet(css);
        self
    }

    /// Add caller-supplied CSS after the current `<style>` text
    pub fn append_stylesheet(&mut self, css: &str) -> &mut Self {
        self.styles.append_stylesheet(css);
        self
    }

    pub fn style_table(&self) -> &StyleTable {
        &self.styles
    }

    /// Serialize the document to a string
    pub fn render(&self) -> Result<String, EncodeError> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        debug!(bytes = out.len(), elements = self.root.len(), "rendered document");
        Ok(out)
    }

    /// Serialize the document into `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EncodeError> {
        let output = &self.config.output;
        let mut w = MarkupWriter::new(out, output);

        if output.xml_declaration {
            w.declaration()?;
        }

        let mut attrs = Attrs::new();
        if !output.embedded {
            attrs.push("xmlns", SVG_NAMESPACE)?;
        }
        let mut canvas = Attrs::new();
        canvas
            .push("viewBox", &self.view_box)?
            .push("width", &self.width)?
            .push("height", &self.height)?;
        attrs.extend(&self.root.attrs(&canvas)?);

        let stylesheet = self.styles.stylesheet();
        if stylesheet.is_empty() && self.root.is_empty() {
            return w.empty("svg", &attrs);
        }

        w.start("svg", &attrs)?;
        if !stylesheet.is_empty() {
            w.text_element("style", &Attrs::new(), stylesheet)?;
        }
        self.root.encode_children(&mut w)?;
        w.end("svg")
    }
}
