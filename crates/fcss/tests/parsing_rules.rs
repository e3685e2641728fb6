//! Integration tests for full ruleset and stylesheet parsing.
//!
//! Tests:
//! - Ruleset structure (selector group + declaration block)
//! - Declaration term normalization
//! - Inline declaration lists
//! - Reader and file entry points
//! - Error reporting (kind, expected token, line)

use fcss::FcssError;
use fcss::parser::{
    Declaration, Selector, parse_declarations, parse_stylesheet, parse_stylesheet_file,
    parse_stylesheet_reader,
};

fn terms(source: &str) -> String {
    let declarations = parse_declarations(source).unwrap();
    assert_eq!(declarations.len(), 1);
    declarations[0].terms.clone()
}

// ============================================================================
// SIMPLE RULES
// ============================================================================

#[test]
fn test_compound_rule_single_declaration() {
    let sheet = parse_stylesheet("div.foo { color: red; }").unwrap();
    assert_eq!(sheet.rulesets.len(), 1);

    let ruleset = &sheet.rulesets[0];
    assert_eq!(
        ruleset.selectors.selectors,
        vec![Selector::and(
            Selector::type_name("div"),
            Selector::class("foo")
        )]
    );
    assert_eq!(ruleset.declarations, vec![Declaration::new("color", "red", 1)]);
}

#[test]
fn test_no_whitespace_anywhere() {
    let sheet = parse_stylesheet("rect{fill:red;stroke:blue}").unwrap();
    let declarations = &sheet.rulesets[0].declarations;
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[1].property, "stroke");
    assert_eq!(declarations[1].terms, "blue");
}

#[test]
fn test_multiple_rules_keep_order() {
    let css = r#"
rect { fill: red; }
text, .label { font-size: 12pt; }
#main > group { stroke: none; }
"#;
    let sheet = parse_stylesheet(css).unwrap();
    assert_eq!(sheet.rulesets.len(), 3);
    assert_eq!(sheet.rulesets[1].selectors.selectors.len(), 2);
    assert_eq!(sheet.rulesets[2].declarations[0].line, 4);
}

#[test]
fn test_declaration_order_is_preserved() {
    let sheet = parse_stylesheet("rect { fill: red; stroke: blue; fill: green }").unwrap();
    let properties: Vec<_> = sheet.rulesets[0]
        .declarations
        .iter()
        .map(|d| (d.property.as_str(), d.terms.as_str()))
        .collect();
    assert_eq!(
        properties,
        vec![("fill", "red"), ("stroke", "blue"), ("fill", "green")]
    );
}

#[test]
fn test_empty_stylesheet_and_empty_block() {
    assert!(parse_stylesheet("").unwrap().is_empty());
    assert!(parse_stylesheet("  \n /* only a comment */ ").unwrap().is_empty());

    let sheet = parse_stylesheet("rect { }").unwrap();
    assert!(sheet.rulesets[0].declarations.is_empty());

    let sheet = parse_stylesheet("rect { ;; fill: red;; }").unwrap();
    assert_eq!(sheet.rulesets[0].declarations.len(), 1);
}

// ============================================================================
// DECLARATION TERMS
// ============================================================================

#[test]
fn test_terms_collapse_whitespace() {
    assert_eq!(terms("border:  1px\n\t solid   black "), "1px solid black");
}

#[test]
fn test_terms_keep_quoted_text_verbatim() {
    assert_eq!(
        terms("font-family: 'Lucida  Grande',  \"Helvetica\"   , sans-serif"),
        "'Lucida  Grande', \"Helvetica\" , sans-serif"
    );
}

#[test]
fn test_terms_keep_punctuation() {
    assert_eq!(terms("fill: #ff0000"), "#ff0000");
    assert_eq!(terms("fill: rgb(255, 0, 0)"), "rgb(255, 0, 0)");
    assert_eq!(terms("fill: url(images/a.png)"), "url(images/a.png)");
    assert_eq!(terms("font: 12px/1.5 serif"), "12px/1.5 serif");
    assert_eq!(terms("stroke: red !important"), "red !important");
}

#[test]
fn test_terms_drop_comments() {
    assert_eq!(terms("fill: red /* primary */ blue"), "red blue");
}

// ============================================================================
// INLINE DECLARATIONS
// ============================================================================

#[test]
fn test_inline_style() {
    let declarations = parse_declarations("fill: red; stroke-width: 2").unwrap();
    assert_eq!(
        declarations,
        vec![
            Declaration::new("fill", "red", 1),
            Declaration::new("stroke-width", "2", 1),
        ]
    );
}

#[test]
fn test_inline_style_rejects_braces() {
    assert!(matches!(
        parse_declarations("fill: red }"),
        Err(FcssError::Syntax { .. })
    ));
}

// ============================================================================
// READERS
// ============================================================================

#[test]
fn test_reader() {
    let source = "rect { fill: red; }".as_bytes();
    let sheet = parse_stylesheet_reader(source).unwrap();
    assert_eq!(sheet.rulesets.len(), 1);
}

#[test]
fn test_file() {
    let path = std::env::temp_dir().join(format!("fcss-test-{}.css", std::process::id()));
    std::fs::write(&path, "text { font-size: 10pt }").unwrap();
    let sheet = parse_stylesheet_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(sheet.rulesets[0].declarations[0].terms, "10pt");
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        parse_stylesheet_file("/nonexistent/fcss/missing.css"),
        Err(FcssError::Io(_))
    ));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_missing_colon() {
    match parse_stylesheet("div { color }").unwrap_err() {
        FcssError::Syntax {
            expected, line, ..
        } => {
            assert_eq!(expected, "':'");
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_open_brace() {
    match parse_stylesheet("rect\n\nfill: red; }").unwrap_err() {
        FcssError::Syntax {
            expected, line, ..
        } => {
            // `rect fill` is a descendant selector, then ':' is not a '{'
            assert_eq!(expected, "'{'");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_close_brace() {
    match parse_stylesheet("rect { fill: red;\n").unwrap_err() {
        FcssError::Syntax {
            expected, found, ..
        } => {
            assert_eq!(expected, "'}'");
            assert_eq!(found, "end of input");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_value() {
    match parse_stylesheet("rect { fill: ; }") {
        Err(FcssError::Syntax { expected, .. }) => assert_eq!(expected, "property value"),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_one_bad_ruleset_fails_the_whole_sheet() {
    let css = "rect { fill: red }\ntext { color }\ngroup { stroke: none }";
    let err = parse_stylesheet(css).unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_unterminated_string_is_lexical_error() {
    assert!(matches!(
        parse_stylesheet("text { font-family: \"Arial; }"),
        Err(FcssError::Lexical { line: 1, .. })
    ));
}

#[test]
fn test_unterminated_comment_is_lexical_error() {
    assert!(matches!(
        parse_stylesheet("rect { fill: red } /* trailing"),
        Err(FcssError::Lexical { .. })
    ));
}

#[test]
fn test_error_message() {
    let err = parse_stylesheet("div { color }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at line 1: expected ':', found '}'"
    );
}
