use fcss::parser::{Selector, parse_stylesheet};

#[test]
fn test_block_comments() {
    let css = r#"
        rect {
            /* this is a comment */
            fill: red;
        }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rulesets.len(), 1);
    assert_eq!(sheet.rulesets[0].declarations.len(), 1);
}

#[test]
fn test_inline_comments() {
    let css = r#"
        rect {
            fill: red; /* inline comment */
            stroke: blue;
        }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rulesets[0].declarations.len(), 2);
    assert_eq!(sheet.rulesets[0].declarations[0].terms, "red");
}

#[test]
fn test_comment_between_rules() {
    let css = r#"
        rect {
            fill: red;
        }
        /* Comment between rules */
        text {
            fill: blue;
        }
    "#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rulesets.len(), 2);
}

#[test]
fn test_multiline_comment_advances_line_numbers() {
    let css = "/*\n\n*/ rect { fill: red }";
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rulesets[0].declarations[0].line, 3);
}

#[test]
fn test_comment_inside_selector_acts_as_whitespace_only_when_spaced() {
    let sheet = parse_stylesheet("group /* x */ rect, rect/* y */.a { fill: red }").unwrap();
    assert_eq!(
        sheet.rulesets[0].selectors.selectors,
        vec![
            Selector::descendant(Selector::type_name("group"), Selector::type_name("rect")),
            Selector::and(Selector::type_name("rect"), Selector::class("a")),
        ]
    );
}

#[test]
fn test_comment_markers_inside_strings_are_text() {
    let sheet = parse_stylesheet("text { content: \"/* not a comment */\" }").unwrap();
    assert_eq!(
        sheet.rulesets[0].declarations[0].terms,
        "\"/* not a comment */\""
    );
}
