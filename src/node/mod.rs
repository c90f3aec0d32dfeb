//! Element tree: the attribute bundle shared by all elements, the node
//! variants, and containers that own ordered children.
//!
//! Containers are append-only. Every builder method appends a node and hands
//! back a mutable reference to it, so the new element can be configured in
//! place:
//!
//! ```rust
//! use svgdoc::{Attributes, Container};
//!
//! let mut group = Container::new();
//! group.rect(0.0, 0.0, 10.0, 10.0).set_id("box").set_style("fill:red;");
//! group.circle(5.0, 5.0, 2.0).transform().rotate(45.0);
//! assert_eq!(group.len(), 2);
//! ```

mod shapes;
mod text;

pub use shapes::{Circle, Ellipse, Line, Polyline, Rect, Use};
pub use text::{LengthAdjust, Text, TextAnchor, TextContent};

use std::fmt::Write;

use crate::error::EncodeError;
use crate::markup::{Attrs, Encode, MarkupWriter};
use crate::style::Styling;
use crate::transform::TransformList;

/// Identity, transform and styling carried by every element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub id: String,
    pub transform: TransformList,
    pub styling: Styling,
}

impl Object {
    /// Add the `id` attribute; written before an element's own attributes
    pub(crate) fn push_id(&self, attrs: &mut Attrs) -> Result<(), EncodeError> {
        attrs.push("id", &self.id)?;
        Ok(())
    }

    /// Add `transform`, `class` and `style`; written after an element's own attributes
    pub(crate) fn push_presentation(&self, attrs: &mut Attrs) -> Result<(), EncodeError> {
        attrs
            .push("transform", &self.transform)?
            .push("class", &self.styling.class())?
            .push("style", &self.styling.style())?;
        Ok(())
    }
}

/// Identifier, styling and transform mutation shared by all elements
pub trait Attributes {
    fn object(&self) -> &Object;

    fn object_mut(&mut self) -> &mut Object;

    fn id(&self) -> Option<&str> {
        Some(self.object().id.as_str()).filter(|id| !id.is_empty())
    }

    fn set_id(&mut self, id: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.object_mut().id = id.into();
        self
    }

    fn set_class(&mut self, class: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.object_mut().styling.set_class(class);
        self
    }

    /// Set an inline style; one trailing `;` is dropped
    fn set_style(&mut self, style: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.object_mut().styling.set_style(style);
        self
    }

    /// Apply a styling obtained from `Document::make_style`
    fn with_style(&mut self, styling: Styling) -> &mut Self
    where
        Self: Sized,
    {
        self.object_mut().styling.with_style(styling);
        self
    }

    fn styling(&self) -> &Styling {
        &self.object().styling
    }

    /// The element's transform chain, for appending operations
    fn transform(&mut self) -> &mut TransformList {
        &mut self.object_mut().transform
    }

    /// Append to the transform chain and keep chaining on the element
    fn transformed(&mut self, f: impl FnOnce(&mut TransformList)) -> &mut Self
    where
        Self: Sized,
    {
        f(&mut self.object_mut().transform);
        self
    }
}

macro_rules! impl_attributes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::node::Attributes for $ty {
                fn object(&self) -> &$crate::node::Object {
                    &self.object
                }

                fn object_mut(&mut self) -> &mut $crate::node::Object {
                    &mut self.object
                }
            }
        )*
    };
}

pub(crate) use impl_attributes;

/// One element of the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    /// A closed polyline, written as `<polygon>`
    Polygon(Polyline),
    Use(Use),
    Group(Container),
    /// Container whose children are not rendered directly
    Defs(Container),
    Title(String),
    Text(Text),
}

impl Node {
    /// Tag name this node is written with
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Line(_) => "line",
            Node::Rect(_) => "rect",
            Node::Circle(_) => "circle",
            Node::Ellipse(_) => "ellipse",
            Node::Polyline(_) => "polyline",
            Node::Polygon(_) => "polygon",
            Node::Use(_) => "use",
            Node::Group(_) => "g",
            Node::Defs(_) => "defs",
            Node::Title(_) => "title",
            Node::Text(_) => "text",
        }
    }

    /// The node's attribute bundle; titles have none
    pub fn object(&self) -> Option<&Object> {
        match self {
            Node::Line(n) => Some(n.object()),
            Node::Rect(n) => Some(n.object()),
            Node::Circle(n) => Some(n.object()),
            Node::Ellipse(n) => Some(n.object()),
            Node::Polyline(n) | Node::Polygon(n) => Some(n.object()),
            Node::Use(n) => Some(n.object()),
            Node::Group(n) | Node::Defs(n) => Some(n.object()),
            Node::Text(n) => Some(n.object()),
            Node::Title(_) => None,
        }
    }
}

impl Encode for Node {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError> {
        let tag = self.tag();
        match self {
            Node::Line(n) => n.encode(w),
            Node::Rect(n) => n.encode(w),
            Node::Circle(n) => n.encode(w),
            Node::Ellipse(n) => n.encode(w),
            Node::Polyline(n) | Node::Polygon(n) => n.encode_as(tag, w),
            Node::Use(n) => n.encode(w),
            Node::Group(n) | Node::Defs(n) => n.encode_as(tag, w, &Attrs::new()),
            Node::Title(content) => w.text_element(tag, &Attrs::new(), content),
            Node::Text(n) => n.encode_as(tag, w),
        }
    }
}

/// Push a node and return a reference to the variant just added
macro_rules! push_node {
    ($children:expr, $variant:ident, $value:expr) => {{
        $children.push(Node::$variant($value));
        match $children.last_mut() {
            Some(Node::$variant(inner)) => inner,
            _ => unreachable!(concat!("just pushed a ", stringify!($variant), " node")),
        }
    }};
}

/// An element holding an ordered list of children
///
/// Children are written in insertion order, which is also their paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    object: Object,
    children: Vec<Node>,
}

impl_attributes!(Container);

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `n` more children
    pub fn pre_alloc(&mut self, n: usize) -> &mut Self {
        self.children.reserve(n);
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append an already built node
    pub fn push(&mut self, node: Node) -> &mut Node {
        self.children.push(node);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Line {
        push_node!(self.children, Line, Line::new(x1, y1, x2, y2))
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Rect {
        push_node!(self.children, Rect, Rect::new(x, y, width, height))
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) -> &mut Circle {
        push_node!(self.children, Circle, Circle::new(cx, cy, r))
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Ellipse {
        push_node!(self.children, Ellipse, Ellipse::new(cx, cy, rx, ry))
    }

    /// Append an empty polyline; add points through the returned reference
    pub fn polyline(&mut self) -> &mut Polyline {
        push_node!(self.children, Polyline, Polyline::new())
    }

    /// Append an empty polygon; add points through the returned reference
    pub fn polygon(&mut self) -> &mut Polyline {
        push_node!(self.children, Polygon, Polyline::new())
    }

    /// Reference the element with id `target`, placed at `(x, y)`
    pub fn use_object(&mut self, x: f64, y: f64, target: &str) -> &mut Use {
        push_node!(self.children, Use, Use::new(x, y, target))
    }

    pub fn group(&mut self) -> &mut Container {
        push_node!(self.children, Group, Container::new())
    }

    pub fn defs(&mut self) -> &mut Container {
        push_node!(self.children, Defs, Container::new())
    }

    pub fn title(&mut self, content: impl Into<String>) {
        self.children.push(Node::Title(content.into()));
    }

    /// Append a text element at `(x, y)`; empty content adds no character data
    pub fn text(&mut self, x: f64, y: f64, content: &str) -> &mut Text {
        push_node!(self.children, Text, Text::new(x, y, content))
    }

    /// Write this container as `tag`, with `extra` attributes after the id
    pub(crate) fn encode_as<W: Write>(
        &self,
        tag: &str,
        w: &mut MarkupWriter<'_, W>,
        extra: &Attrs,
    ) -> Result<(), EncodeError> {
        let attrs = self.attrs(extra)?;
        if self.children.is_empty() {
            return w.empty(tag, &attrs);
        }
        w.start(tag, &attrs)?;
        self.encode_children(w)?;
        w.end(tag)
    }

    pub(crate) fn attrs(&self, extra: &Attrs) -> Result<Attrs, EncodeError> {
        let mut attrs = Attrs::new();
        self.object.push_id(&mut attrs)?;
        attrs.extend(extra);
        self.object.push_presentation(&mut attrs)?;
        Ok(attrs)
    }

    pub(crate) fn encode_children<W: Write>(
        &self,
        w: &mut MarkupWriter<'_, W>,
    ) -> Result<(), EncodeError> {
        for child in &self.children {
            child.encode(w)?;
        }
        Ok(())
    }
}
