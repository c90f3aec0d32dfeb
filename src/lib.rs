//! svgdoc - Build SVG documents in memory and serialize them
//!
//! This library provides a typed element tree (shapes, groups, text,
//! transforms, styling) and writes it out as SVG markup. Styles can be
//! applied inline or collected into an embedded, deduplicated stylesheet.
//!
//! # Example
//!
//! ```rust
//! use svgdoc::{Attributes, Document, DocumentConfig, Length, StyleConfig};
//!
//! let config = DocumentConfig::new()
//!     .with_style(StyleConfig::new().with_embed_stylesheet(true).with_unify_styles(true));
//! let mut doc = Document::new(config);
//! doc.set_view_box(0, 0, 100, 50)
//!     .set_size(Length::px(200.0), Length::px(100.0));
//!
//! let accent = doc.make_style("accent", "fill:#2196f3;").unwrap();
//! let layer = doc.root_mut().group();
//! layer.transform().translate(10.0, 5.0);
//! layer.rect(0.0, 0.0, 30.0, 20.0).with_style(accent.clone());
//! layer.circle(60.0, 10.0, 8.0).with_style(accent);
//!
//! let svg = doc.render().unwrap();
//! assert!(svg.contains("<style>.accent {fill:#2196f3}</style>"));
//! assert!(svg.contains(r#"<g transform="translate(10,5)">"#));
//! ```

pub mod attr;
pub mod config;
pub mod document;
pub mod error;
pub mod markup;
pub mod node;
pub mod style;
pub mod transform;

pub use attr::{Floats, Ints, Length, Points, Unit};
pub use config::{ConfigError, DocumentConfig, OutputConfig, StyleConfig};
pub use document::Document;
pub use error::EncodeError;
pub use node::{
    Attributes, Circle, Container, Ellipse, Line, LengthAdjust, Node, Object, Polyline, Rect,
    Text, TextAnchor, TextContent, Use,
};
pub use style::{StyleError, StyleTable, Styling};
pub use transform::{Transform, TransformArg, TransformList};

use std::path::Path;

use thiserror::Error;

/// Any error produced while configuring, styling or rendering a document
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("style error: {0}")]
    Style(#[from] StyleError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Create a document configured from a TOML file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let doc = svgdoc::document_from_config_file(Path::new("svgdoc.toml")).unwrap();
/// println!("{}", doc.render().unwrap());
/// ```
pub fn document_from_config_file(path: &Path) -> Result<Document, Error> {
    let config = DocumentConfig::from_file(path)?;
    Ok(Document::new(config))
}
