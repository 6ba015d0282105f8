//! End-to-end stylesheet parsing tests.

use gossamer_css::prelude::*;

fn parse(css: &str) -> StyleSheet {
    StyleSheet::parse(css, &ParserContext::default())
}

fn style_rule(sheet: &StyleSheet, index: usize) -> &StyleRule {
    sheet.rules[index]
        .as_style()
        .unwrap_or_else(|| panic!("rule {index} is not a style rule"))
}

#[test]
fn id_class_selector_with_border_shorthand() {
    let sheet = parse("#id.class { color: #ff0000; border: 1px solid red; }");
    assert_eq!(sheet.len(), 1);

    let rule = style_rule(&sheet, 0);
    assert_eq!(rule.selectors.len(), 1);
    assert_eq!(rule.selectors[0].specificity(), 110);

    // 1 color + 12 border longhands.
    assert_eq!(rule.declarations.len(), 13);
    assert_eq!(rule.declarations[0].id, PropertyId::Color);
    assert_eq!(
        rule.declarations[0].value,
        Value::Color(Color::rgb(0xff, 0, 0))
    );

    let find = |id: PropertyId| {
        rule.declarations
            .iter()
            .find(|d| d.id == id)
            .unwrap_or_else(|| panic!("missing {id}"))
    };
    for id in [
        PropertyId::BorderTopWidth,
        PropertyId::BorderRightWidth,
        PropertyId::BorderBottomWidth,
        PropertyId::BorderLeftWidth,
    ] {
        assert_eq!(find(id).value, Value::numeric(1.0, Unit::Px));
    }
    for id in [
        PropertyId::BorderTopStyle,
        PropertyId::BorderRightStyle,
        PropertyId::BorderBottomStyle,
        PropertyId::BorderLeftStyle,
    ] {
        assert_eq!(find(id).value, Value::Keyword(Keyword::Solid));
    }
    for id in [
        PropertyId::BorderTopColor,
        PropertyId::BorderRightColor,
        PropertyId::BorderBottomColor,
        PropertyId::BorderLeftColor,
    ] {
        assert_eq!(find(id).value, Value::Color(Color::rgb(0xff, 0, 0)));
    }
}

#[test]
fn media_rule_with_nested_margin_shorthand() {
    let sheet = parse("@media screen, print { p { margin: 1em 2em; } }");
    assert_eq!(sheet.len(), 1);

    let media = sheet.rules[0].as_media().expect("expected a media rule");
    assert_eq!(media.media.to_string(), "screen, print");
    assert_eq!(media.rules.len(), 1);

    let rule = media.rules[0].as_style().expect("expected a style rule");
    let values: Vec<_> = rule
        .declarations
        .iter()
        .map(|d| (d.id, d.value.clone()))
        .collect();
    assert_eq!(
        values,
        vec![
            (PropertyId::MarginTop, Value::numeric(1.0, Unit::Em)),
            (PropertyId::MarginRight, Value::numeric(2.0, Unit::Em)),
            (PropertyId::MarginBottom, Value::numeric(1.0, Unit::Em)),
            (PropertyId::MarginLeft, Value::numeric(2.0, Unit::Em)),
        ]
    );
}

#[test]
fn unknown_property_is_dropped_silently() {
    let sheet = parse("div { bogus-prop: 5; color: green }");
    let rule = style_rule(&sheet, 0);
    assert_eq!(rule.declarations.len(), 1);
    assert_eq!(rule.declarations[0].id, PropertyId::Color);
    assert_eq!(
        rule.declarations[0].value,
        Value::Color(Color::rgb(0, 0x80, 0))
    );
}

#[test]
fn attribute_begin_selector() {
    let sheet = parse("a[href^=\"http\"] { text-decoration: underline }");
    let rule = style_rule(&sheet, 0);
    let selector = &rule.selectors[0];
    assert_eq!(selector.match_op, Match::AttributeBegin);
    assert_eq!(
        selector.attr.as_ref().map(|a| &*a.local),
        Some("href")
    );
    assert_eq!(selector.value, "http");
    // 10 for the attribute test, 1 for the `a` tag.
    assert_eq!(selector.specificity(), 11);
}

#[test]
fn rule_with_no_surviving_declaration_is_discarded() {
    let sheet = parse(".a { color: ; }");
    assert!(sheet.is_empty());
}

#[test]
fn specificity_survives_a_serialization_round_trip() {
    let sheet = parse("div#nav ul > li.item a:hover { color: red }");
    let selector = &style_rule(&sheet, 0).selectors[0];

    let reparsed_css = format!("{} {{ color: red }}", selector);
    let reparsed = parse(&reparsed_css);
    let reparsed_selector = &style_rule(&reparsed, 0).selectors[0];

    assert_eq!(selector.specificity(), reparsed_selector.specificity());
    assert_eq!(selector.to_string(), reparsed_selector.to_string());
}

#[test]
fn unitless_zero_margin_is_a_zero_length() {
    let sheet = parse("p { margin: 0 }");
    let rule = style_rule(&sheet, 0);
    assert_eq!(rule.declarations.len(), 4);
    assert!(
        rule.declarations
            .iter()
            .all(|d| d.value == Value::numeric(0.0, Unit::Unknown))
    );
}

#[test]
fn import_then_rules() {
    let sheet = parse("@import url(base.css); h1 { color: red } <!-- -->");
    assert_eq!(sheet.len(), 2);
    let import = sheet.rules[0].as_import().expect("expected an import rule");
    assert_eq!(import.href, "base.css");
    assert!(sheet.rules[1].as_style().is_some());
}

#[test]
fn inline_style_entry_point() {
    let ctx = ParserContext::default();

    let decls = parse_style_declarations("color: red; bogus: 1", &ctx)
        .expect("one declaration should survive");
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].id, PropertyId::Color);

    // Nothing parseable: the null convention signals failure.
    assert!(parse_style_declarations("bogus: 1", &ctx).is_none());
    assert!(parse_style_declarations("", &ctx).is_none());
}

#[test]
fn selector_list_keeps_surviving_segments() {
    let sheet = parse("h1, not-an-element, h2 { color: red }");
    let rule = style_rule(&sheet, 0);
    assert_eq!(rule.selectors.len(), 2);
    assert_eq!(rule.selectors[0].to_string(), "h1");
    assert_eq!(rule.selectors[1].to_string(), "h2");
}

#[test]
fn every_selector_segment_failing_discards_the_rule() {
    let sheet = parse("not-an-element, also-bogus { color: red } p { color: blue }");
    assert_eq!(sheet.len(), 1);
    assert_eq!(style_rule(&sheet, 0).selectors[0].to_string(), "p");
}

#[test]
fn mixed_sheet_end_to_end() {
    let css = r#"
        <!-- @import "base.css" screen; -->
        body { font-family: "Gossamer Sans", sans-serif; line-height: 1.4 }
        @media print {
            body { background: white none; font-size: 10pt }
        }
        @page { margin: 2cm }
        em { font-style: italic !important }
    "#;
    let sheet = parse(css);
    assert_eq!(sheet.len(), 4);

    assert!(sheet.rules[0].as_import().is_some());

    let body = style_rule(&sheet, 1);
    assert_eq!(body.declarations.len(), 2);

    let media = sheet.rules[2].as_media().expect("expected a media rule");
    assert!(media.media.contains("print"));
    let print_body = media.rules[0].as_style().expect("expected a style rule");
    assert_eq!(print_body.declarations.len(), 3);
    assert_eq!(print_body.declarations[0].id, PropertyId::BackgroundColor);
    assert_eq!(print_body.declarations[1].id, PropertyId::BackgroundImage);

    let em = style_rule(&sheet, 3);
    assert!(em.declarations[0].important);
}
