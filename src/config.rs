//! Configuration for style handling and SVG output
//!
//! Both halves deserialize from TOML, with every key optional:
//!
//! ```toml
//! [style]
//! embed_stylesheet = true
//! unify_styles = true
//! scope_to_document = false
//!
//! [output]
//! embedded = false
//! xml_declaration = true
//! pretty_print = true
//! indent = "  "
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Controls how `Document::make_style` turns style text into styling
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Copy styles into a `<style>` element and reference them by class.
    /// When unset, styles are applied inline through the `style` attribute.
    pub embed_stylesheet: bool,

    /// Reuse the existing class when identical style text is requested again
    pub unify_styles: bool,

    /// Prefix every generated rule with `#<document id> ` so the classes only
    /// apply inside this document. Requires the document to have an id.
    pub scope_to_document: bool,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embed_stylesheet(mut self, embed: bool) -> Self {
        self.embed_stylesheet = embed;
        self
    }

    pub fn with_unify_styles(mut self, unify: bool) -> Self {
        self.unify_styles = unify;
        self
    }

    pub fn with_scope_to_document(mut self, scope: bool) -> Self {
        self.scope_to_document = scope;
        self
    }
}

/// Configuration options for the serialized markup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Leave out the `xmlns` attribute, for SVG inlined into HTML
    pub embedded: bool,

    /// Whether to emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Indentation unit used when pretty printing
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            embedded: false,
            xml_declaration: true,
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Complete per-document configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub style: StyleConfig,
    pub output: OutputConfig,
}

impl DocumentConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocumentConfig::default();
        assert!(!config.style.embed_stylesheet);
        assert!(!config.style.unify_styles);
        assert!(!config.style.scope_to_document);
        assert!(!config.output.embedded);
        assert!(config.output.xml_declaration);
        assert!(config.output.pretty_print);
        assert_eq!(config.output.indent, "  ");
    }

    #[test]
    fn test_builder_pattern() {
        let config = DocumentConfig::new()
            .with_style(
                StyleConfig::new()
                    .with_embed_stylesheet(true)
                    .with_unify_styles(true),
            )
            .with_output(
                OutputConfig::new()
                    .with_pretty_print(false)
                    .with_embedded(true)
                    .with_indent("\t"),
            );

        assert!(config.style.embed_stylesheet);
        assert!(config.style.unify_styles);
        assert!(config.output.embedded);
        assert!(!config.output.pretty_print);
        assert_eq!(config.output.indent, "\t");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[style]
embed_stylesheet = true
scope_to_document = true

[output]
xml_declaration = false
"#;
        let config = DocumentConfig::from_toml_str(toml_str).expect("Should parse");
        assert!(config.style.embed_stylesheet);
        assert!(!config.style.unify_styles);
        assert!(config.style.scope_to_document);
        assert!(!config.output.xml_declaration);
        assert!(config.output.pretty_print);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = DocumentConfig::from_toml_str("").expect("Should parse");
        assert_eq!(config, DocumentConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = DocumentConfig::from_toml_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = DocumentConfig::from_file(Path::new("/nonexistent/svgdoc.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
