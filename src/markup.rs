//! Markup writer for the element tree
//!
//! Elements describe themselves through [`Encode`]: they collect their
//! attributes into [`Attrs`], where each value is formatted by its
//! [`AttrValue`] implementation, and then open, close or self-close a tag on
//! the [`MarkupWriter`]. The writer owns escaping and indentation.

use std::fmt::Write;

use crate::attr::AttrValue;
use crate::config::OutputConfig;
use crate::error::EncodeError;

/// Something that writes itself as markup
pub trait Encode {
    fn encode<W: Write>(&self, w: &mut MarkupWriter<'_, W>) -> Result<(), EncodeError>;
}

/// Attributes of one element, in output order
#[derive(Debug, Default)]
pub struct Attrs {
    items: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `value` and add it, unless the value asks to be omitted
    pub fn push<V: AttrValue + ?Sized>(
        &mut self,
        name: &'static str,
        value: &V,
    ) -> Result<&mut Self, EncodeError> {
        if let Some(text) = value.to_attr(name)? {
            self.items.push((name, text));
        }
        Ok(self)
    }

    /// Append every attribute of `other`, keeping its order
    pub fn extend(&mut self, other: &Attrs) {
        self.items.extend(other.items.iter().cloned());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Writes tags with escaping and optional pretty printing
pub struct MarkupWriter<'a, W: Write> {
    out: &'a mut W,
    config: &'a OutputConfig,
    depth: usize,
    /// Nesting depth of mixed-content elements; no whitespace is added inside
    inline: usize,
}

impl<'a, W: Write> MarkupWriter<'a, W> {
    pub fn new(out: &'a mut W, config: &'a OutputConfig) -> Self {
        Self {
            out,
            config,
            depth: 0,
            inline: 0,
        }
    }

    pub fn config(&self) -> &OutputConfig {
        self.config
    }

    pub fn declaration(&mut self) -> Result<(), EncodeError> {
        self.out.write_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        self.close_line()
    }

    /// Write a self-closing element
    pub fn empty(&mut self, tag: &str, attrs: &Attrs) -> Result<(), EncodeError> {
        self.open_line()?;
        self.tag_open(tag, attrs)?;
        self.out.write_str("/>")?;
        self.close_line()
    }

    /// Open an element whose children go on their own lines
    pub fn start(&mut self, tag: &str, attrs: &Attrs) -> Result<(), EncodeError> {
        self.open_line()?;
        self.tag_open(tag, attrs)?;
        self.out.write_char('>')?;
        self.close_line()?;
        self.depth += 1;
        Ok(())
    }

    /// Close an element opened with [`MarkupWriter::start`]
    pub fn end(&mut self, tag: &str) -> Result<(), EncodeError> {
        self.depth = self.depth.saturating_sub(1);
        self.open_line()?;
        write!(self.out, "</{tag}>")?;
        self.close_line()
    }

    /// Open an element with mixed content, written without added whitespace
    pub fn start_inline(&mut self, tag: &str, attrs: &Attrs) -> Result<(), EncodeError> {
        self.open_line()?;
        self.tag_open(tag, attrs)?;
        self.out.write_char('>')?;
        self.inline += 1;
        Ok(())
    }

    /// Close an element opened with [`MarkupWriter::start_inline`]
    pub fn end_inline(&mut self, tag: &str) -> Result<(), EncodeError> {
        write!(self.out, "</{tag}>")?;
        self.inline = self.inline.saturating_sub(1);
        self.close_line()
    }

    /// Write escaped character data
    pub fn chars(&mut self, text: &str) -> Result<(), EncodeError> {
        self.out.write_str(&escape_text(text))?;
        Ok(())
    }

    /// Write an element holding only character data, on one line
    pub fn text_element(
        &mut self,
        tag: &str,
        attrs: &Attrs,
        text: &str,
    ) -> Result<(), EncodeError> {
        self.start_inline(tag, attrs)?;
        self.chars(text)?;
        self.end_inline(tag)
    }

    fn tag_open(&mut self, tag: &str, attrs: &Attrs) -> Result<(), EncodeError> {
        write!(self.out, "<{tag}")?;
        for (name, value) in &attrs.items {
            write!(self.out, r#" {}="{}""#, name, escape_attr(value))?;
        }
        Ok(())
    }

    fn open_line(&mut self) -> Result<(), EncodeError> {
        if self.config.pretty_print && self.inline == 0 {
            for _ in 0..self.depth {
                self.out.write_str(&self.config.indent)?;
            }
        }
        Ok(())
    }

    fn close_line(&mut self) -> Result<(), EncodeError> {
        if self.config.pretty_print && self.inline == 0 {
            self.out.write_char('\n')?;
        }
        Ok(())
    }
}

/// Escape an attribute value
///
/// Tabs and line breaks are written as character references so they survive
/// attribute value normalization.
pub fn escape_attr(s: &str) -> String {
    escape(s, true)
}

/// Escape character data
pub fn escape_text(s: &str) -> String {
    escape(s, false)
}

fn escape(s: &str, attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            '\'' if attr => out.push_str("&apos;"),
            '\t' if attr => out.push_str("&#x9;"),
            '\n' if attr => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

/// Characters allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> OutputConfig {
        OutputConfig::new().with_pretty_print(false)
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a < b"), "a &lt; b");
        assert_eq!(escape_attr("a & b"), "a &amp; b");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape_text(r#"<"x" & 'y'>"#), r#"&lt;"x" &amp; 'y'&gt;"#);
    }

    #[test]
    fn test_escape_attr_line_breaks_and_tabs() {
        assert_eq!(escape_attr("a\tb\nc\r"), "a&#x9;b&#xA;c&#xD;");
    }

    #[test]
    fn test_escape_text_carriage_return_only() {
        assert_eq!(escape_text("a\tb\r\nc"), "a\tb&#xD;\nc");
    }

    #[test]
    fn test_invalid_characters_are_replaced() {
        assert_eq!(escape_text("bell\u{7}here"), "bell\u{FFFD}here");
        assert_eq!(escape_attr("\u{0}x\u{FFFE}"), "\u{FFFD}x\u{FFFD}");
        assert_eq!(escape_text("\u{1F600} \u{E000}"), "\u{1F600} \u{E000}");
    }

    #[test]
    fn test_control_characters_in_written_markup() {
        let config = compact();
        let mut out = String::new();
        let mut w = MarkupWriter::new(&mut out, &config);
        let mut attrs = Attrs::new();
        attrs.push("id", "a\tb\nc").unwrap();
        w.text_element("title", &attrs, "bell\u{7}here\r\nx").unwrap();
        assert_eq!(
            out,
            "<title id=\"a&#x9;b&#xA;c\">bell\u{FFFD}here&#xD;\nx</title>"
        );
        assert!(!out.contains('\u{7}'));
        assert!(!out.contains('\t'));
    }

    #[test]
    fn test_writer_exposes_config() {
        let config = compact().with_indent("\t");
        let mut out = String::new();
        let w = MarkupWriter::new(&mut out, &config);
        assert!(!w.config().pretty_print);
        assert_eq!(w.config().indent, "\t");
    }

    #[test]
    fn test_attrs_skip_omitted_values() {
        let mut attrs = Attrs::new();
        attrs
            .push("id", "")
            .unwrap()
            .push("x", &1.5)
            .unwrap()
            .push("y", &None::<f64>)
            .unwrap();
        assert_eq!(attrs.get("x"), Some("1.5"));
        assert_eq!(attrs.get("id"), None);
        assert_eq!(attrs.get("y"), None);
    }

    #[test]
    fn test_compact_nesting() {
        let config = compact();
        let mut out = String::new();
        let mut w = MarkupWriter::new(&mut out, &config);
        let mut attrs = Attrs::new();
        attrs.push("id", "outer").unwrap();
        w.start("g", &attrs).unwrap();
        w.empty("rect", &Attrs::new()).unwrap();
        w.end("g").unwrap();
        assert_eq!(out, r#"<g id="outer"><rect/></g>"#);
    }

    #[test]
    fn test_pretty_nesting() {
        let config = OutputConfig::new();
        let mut out = String::new();
        let mut w = MarkupWriter::new(&mut out, &config);
        w.start("g", &Attrs::new()).unwrap();
        w.start("g", &Attrs::new()).unwrap();
        w.empty("circle", &Attrs::new()).unwrap();
        w.end("g").unwrap();
        w.end("g").unwrap();
        assert_eq!(out, "<g>\n  <g>\n    <circle/>\n  </g>\n</g>\n");
    }

    #[test]
    fn test_inline_content_is_not_indented() {
        let config = OutputConfig::new();
        let mut out = String::new();
        let mut w = MarkupWriter::new(&mut out, &config);
        w.start("g", &Attrs::new()).unwrap();
        w.start_inline("text", &Attrs::new()).unwrap();
        w.chars("a ").unwrap();
        w.text_element("tspan", &Attrs::new(), "b & c").unwrap();
        w.end_inline("text").unwrap();
        w.end("g").unwrap();
        assert_eq!(
            out,
            "<g>\n  <text>a <tspan>b &amp; c</tspan></text>\n</g>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let config = compact();
        let mut out = String::new();
        let mut w = MarkupWriter::new(&mut out, &config);
        let mut attrs = Attrs::new();
        attrs.push("class", "a\"b").unwrap();
        w.empty("rect", &attrs).unwrap();
        assert_eq!(out, r#"<rect class="a&quot;b"/>"#);
    }
}
