//! Integration tests for building and rendering complete documents

use pretty_assertions::assert_eq;

use svgdoc::{
    Attributes, Document, DocumentConfig, Error, Length, OutputConfig, StyleConfig, TextAnchor,
};

fn compact(style: StyleConfig) -> DocumentConfig {
    DocumentConfig::new().with_style(style).with_output(
        OutputConfig::new()
            .with_pretty_print(false)
            .with_xml_declaration(false),
    )
}

fn build_scene(config: DocumentConfig) -> Result<String, Error> {
    let mut doc = Document::new(config);
    doc.set_view_box(0, 0, 100, 100)
        .set_size(Length::percent(100.0), Length::percent(100.0));
    doc.root_mut().title("Demo");

    let thin = doc.make_style("thin", "stroke:black;stroke-width:1;")?;

    doc.root_mut().defs().circle(0.0, 0.0, 2.0).set_id("dot");

    let grid = doc.root_mut().group();
    grid.set_id("grid").transform().translate(10.0, 10.0).rotate(45.0);
    grid.line(0.0, 0.0, 80.0, 0.0).with_style(thin.clone());
    grid.polyline().add(0.0, 0.0).add(10.0, 20.0).with_style(thin);
    grid.use_object(5.0, 5.0, "dot");

    let caption = doc.root_mut().text(50.0, 95.0, "Caption");
    caption.anchor(TextAnchor::Middle);
    caption.add_span("!").set_class("em");

    Ok(doc.render()?)
}

#[test]
fn test_pretty_document() {
    let config = DocumentConfig::new().with_style(
        StyleConfig::new()
            .with_embed_stylesheet(true)
            .with_unify_styles(true),
    );
    let svg = build_scene(config).expect("Should render");

    let expected = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="100%" height="100%">
  <style>.thin {stroke:black;stroke-width:1}</style>
  <title>Demo</title>
  <defs>
    <circle id="dot" cx="0" cy="0" r="2"/>
  </defs>
  <g id="grid" transform="translate(10,10) rotate(45)">
    <line x1="0" y1="0" x2="80" y2="0" class="thin"/>
    <polyline points="0,0 10,20" class="thin"/>
    <use x="5" y="5" href="#dot"/>
  </g>
  <text x="50" y="95" text-anchor="middle">Caption<tspan class="em">!</tspan></text>
</svg>
"##;
    assert_eq!(svg, expected);
}

#[test]
fn test_same_scene_with_inline_styles() {
    let svg = build_scene(compact(StyleConfig::default())).expect("Should render");
    assert!(!svg.contains("<style>"));
    assert!(svg.contains(r#"<line x1="0" y1="0" x2="80" y2="0" style="stroke:black;stroke-width:1"/>"#));
    assert!(!svg.contains("class=\"thin\""));
}

#[test]
fn test_compact_snapshot() {
    let mut doc = Document::new(compact(StyleConfig::new().with_embed_stylesheet(true)));
    doc.set_view_box(0, 0, 10, 10);
    let boxed = doc.make_style("box", "fill:none").expect("Should register");
    doc.root_mut().rect(1.0, 1.0, 8.0, 8.0).with_style(boxed);

    insta::assert_snapshot!(
        doc.render().expect("Should render"),
        @r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><style>.box {fill:none}</style><rect x="1" y="1" width="8" height="8" class="box"/></svg>"#
    );
}

#[test]
fn test_paint_order_follows_insertion() {
    let mut doc = Document::new(compact(StyleConfig::default()));
    let root = doc.root_mut();
    root.rect(0.0, 0.0, 1.0, 1.0).set_id("A");
    root.circle(0.0, 0.0, 1.0).set_id("B");
    root.ellipse(0.0, 0.0, 1.0, 2.0).set_id("C");

    let svg = doc.render().expect("Should render");
    let positions: Vec<usize> = ["A", "B", "C"]
        .iter()
        .map(|id| svg.find(&format!(r#"id="{id}""#)).expect("id present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unified_styles_produce_one_rule() {
    let mut doc = Document::new(compact(
        StyleConfig::new()
            .with_embed_stylesheet(true)
            .with_unify_styles(true),
    ));
    let first = doc.make_style("a", "fill:red;").expect("Should register");
    let second = doc.make_style("a", "fill:red;").expect("Should register");
    assert_eq!(first, second);
    assert_eq!(doc.stylesheet(), ".a {fill:red}");
    assert_eq!(doc.style_table().len(), 1);
}

#[test]
fn test_conflicting_class_names() {
    let mut doc = Document::new(compact(StyleConfig::new().with_embed_stylesheet(true)));
    let red = doc.make_style("a", "fill:red;").expect("Should register");
    let blue = doc.make_style("a", "fill:blue;").expect("Should register");
    assert_eq!(red.class(), Some("a"));
    assert_eq!(blue.class(), Some("a1"));
    assert_eq!(doc.stylesheet(), ".a {fill:red} .a1 {fill:blue}");
}

#[test]
fn test_documents_do_not_share_style_tables() {
    let config = compact(StyleConfig::new().with_embed_stylesheet(true));
    let mut first = Document::new(config.clone());
    let mut second = Document::new(config);
    first.make_style("a", "fill:red").expect("Should register");
    let other = second.make_style("a", "fill:blue").expect("Should register");
    assert_eq!(other.class(), Some("a"));
    assert_eq!(second.stylesheet(), ".a {fill:blue}");
}

#[test]
fn test_document_level_transform_and_class() {
    let mut doc = Document::new(compact(StyleConfig::default()));
    doc.set_class("chart").transform().scale(2.0, 2.0);
    assert_eq!(
        doc.render().expect("Should render"),
        r#"<svg xmlns="http://www.w3.org/2000/svg" transform="scale(2,2)" class="chart"/>"#
    );
}

#[test]
fn test_config_from_toml() {
    let config = DocumentConfig::from_toml_str(
        r#"
[style]
embed_stylesheet = true

[output]
pretty_print = false
xml_declaration = false
embedded = true
"#,
    )
    .expect("Should parse");
    let mut doc = Document::new(config);
    let dim = doc.make_style("dim", "opacity:0.5").expect("Should register");
    doc.root_mut().circle(1.0, 2.0, 3.0).with_style(dim);
    assert_eq!(
        doc.render().expect("Should render"),
        r#"<svg><style>.dim {opacity:0.5}</style><circle cx="1" cy="2" r="3" class="dim"/></svg>"#
    );
}
