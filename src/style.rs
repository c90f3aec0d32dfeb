//! Styling and embedded stylesheet generation
//!
//! A [`Styling`] is attached to every element and carries an optional class
//! reference and an optional inline style. [`StyleTable`] belongs to a single
//! document and decides, per request, whether a style is applied inline or
//! promoted to a class rule in the document's `<style>` element. Identical
//! style text can be collapsed onto one class, and clashing class names are
//! made unique with a per-document counter.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::StyleConfig;

/// Errors that can occur when registering a style
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    /// Scoped rules were requested but the document has no id to scope them to
    #[error("cannot scope style class '{class}': the document has no id")]
    MissingDocumentId { class: String },
}

/// Class and inline style of an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styling {
    class: String,
    style: String,
}

impl Styling {
    /// Styling that references a class only
    pub fn class_only(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            style: String::new(),
        }
    }

    /// Styling that applies a style inline, without its trailing `;`
    pub fn inline(style: &str) -> Self {
        Self {
            class: String::new(),
            style: trim_declaration(style).to_string(),
        }
    }

    pub fn class(&self) -> Option<&str> {
        Some(self.class.as_str()).filter(|c| !c.is_empty())
    }

    pub fn style(&self) -> Option<&str> {
        Some(self.style.as_str()).filter(|s| !s.is_empty())
    }

    /// Set the inline style, trimming one trailing `;`
    pub fn set_style(&mut self, style: &str) -> &mut Self {
        self.style = trim_declaration(style).to_string();
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = class.into();
        self
    }

    /// Replace this styling entirely
    pub fn with_style(&mut self, styling: Styling) -> &mut Self {
        *self = styling;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.class.is_empty() && self.style.is_empty()
    }
}

/// Strip a single trailing declaration separator
fn trim_declaration(style: &str) -> &str {
    style.strip_suffix(';').unwrap_or(style)
}

/// Per-document style deduplication state and accumulated stylesheet text
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    /// style text -> class, only filled when styles are unified
    classes_by_style: HashMap<String, String>,
    /// class -> style text, for every registered class
    styles_by_class: HashMap<String, String>,
    conflicts: u32,
    stylesheet: String,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stylesheet text accumulated so far
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Replace the stylesheet text, for example with externally written CSS
    ///
    /// Classes registered earlier stay reserved, so later rules never reuse
    /// their names.
    pub fn set_stylesheet(&mut self, css: impl Into<String>) {
        self.stylesheet = css.into();
    }

    /// Append CSS text, separated from existing rules by a single space
    pub fn append_stylesheet(&mut self, css: &str) {
        if css.is_empty() {
            return;
        }
        if !self.stylesheet.is_empty() {
            self.stylesheet.push(' ');
        }
        self.stylesheet.push_str(css);
    }

    /// Number of class name conflicts resolved so far
    pub fn conflicts(&self) -> u32 {
        self.conflicts
    }

    /// Style text registered under `class`, if any
    pub fn style_for(&self, class: &str) -> Option<&str> {
        self.styles_by_class.get(class).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles_by_class.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles_by_class.is_empty()
    }

    /// Turn a style declaration into a [`Styling`].
    ///
    /// Without an embedded stylesheet the style is returned inline (or, for
    /// empty style text, as a reference to the class `name`). Otherwise a class
    /// rule is appended to the stylesheet and a class-only styling returned.
    /// `document_id` is needed when rules are scoped to the document.
    pub fn make_style(
        &mut self,
        config: &StyleConfig,
        document_id: Option<&str>,
        name: &str,
        style: &str,
    ) -> Result<Styling, StyleError> {
        if !config.embed_stylesheet {
            if style.is_empty() {
                return Ok(Styling::class_only(name));
            }
            return Ok(Styling::inline(style));
        }

        if config.unify_styles {
            if let Some(class) = self.classes_by_style.get(style) {
                trace!(class = %class, "reusing class for identical style");
                return Ok(Styling::class_only(class.clone()));
            }
        }

        let scope = if config.scope_to_document {
            match document_id.filter(|id| !id.is_empty()) {
                Some(id) => Some(id),
                None => {
                    return Err(StyleError::MissingDocumentId {
                        class: name.to_string(),
                    })
                }
            }
        } else {
            None
        };

        let class = self.free_class_name(name);

        if config.unify_styles {
            self.classes_by_style.insert(style.to_string(), class.clone());
        }
        self.styles_by_class.insert(class.clone(), style.to_string());

        if !self.stylesheet.is_empty() {
            self.stylesheet.push(' ');
        }
        if let Some(id) = scope {
            self.stylesheet.push('#');
            self.stylesheet.push_str(id);
            self.stylesheet.push(' ');
        }
        self.stylesheet.push('.');
        self.stylesheet.push_str(&class);
        self.stylesheet.push_str(" {");
        self.stylesheet.push_str(trim_declaration(style));
        self.stylesheet.push('}');

        debug!(class = %class, scoped = scope.is_some(), "registered style class");
        Ok(Styling::class_only(class))
    }

    /// Pick `name`, or `name` suffixed with the next conflict count until unused
    fn free_class_name(&mut self, name: &str) -> String {
        let mut class = name.to_string();
        while self.styles_by_class.contains_key(&class) {
            self.conflicts += 1;
            class = format!("{name}{}", self.conflicts);
        }
        if class != name {
            debug!(requested = name, assigned = %class, "renamed conflicting style class");
        }
        class
    }
}
