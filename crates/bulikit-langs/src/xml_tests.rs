use std::fmt::Write;

use crate::LangImpl;

fn dump(source: &str) -> String {
    let tokens = crate::xml().tokenize(source).unwrap();
    let mut out = String::new();
    for token in tokens.as_slice() {
        if token.token_type().is_whitespace() {
            continue;
        }
        writeln!(
            out,
            "{}:{} {} {:?}",
            token.row(),
            token.column(),
            token.token_type(),
            token.text()
        )
        .unwrap();
    }
    out
}

#[test]
fn element_with_attribute() {
    insta::assert_snapshot!(dump(r#"<a href="x">hi</a>"#), @r#"
    1:1 Markup "<a"
    1:3 Attribute "href"
    1:8 = "="
    1:9 String "\"x\""
    1:12 Markup ">"
    1:13 Value "hi"
    1:15 Markup "</a>"
    "#);
}

#[test]
fn declaration_and_self_closing_tag() {
    insta::assert_snapshot!(dump(r#"<?xml version='1.0'?><br/>"#), @r#"
    1:1 Markup "<?xml"
    1:6 Attribute "version"
    1:14 = "="
    1:15 String "'1.0'"
    1:20 Markup "?>"
    1:22 Markup "<br"
    1:25 Markup "/>"
    "#);
}

#[test]
fn comments_and_cdata_span_markup() {
    insta::assert_snapshot!(dump("<!-- a <b> -->\n<![CDATA[x<y]]>"), @r#"
    1:1 Comment "<!-- a <b> -->"
    2:1 Data "<![CDATA[x<y]]>"
    "#);
}

#[test]
fn element_names_ignore_case() {
    insta::assert_snapshot!(dump("<Svg></SVG>"), @r#"
    1:1 Markup "<Svg"
    1:5 Markup ">"
    1:6 Markup "</SVG>"
    "#);
}
