//! Stylesheet parsing and the stylesheet AST.
//!
//! This module provides a recursive-descent parser over the
//! [`Tokenizer`](crate::tokenizer::Tokenizer):
//!
//! - [`parse_stylesheet`]: main entry point, text to [`StyleSheet`]
//! - [`parse_declarations`]: inline style bodies such as `fill: red; stroke: none`
//! - [`parse_selector_group`]: a standalone selector group for host queries
//!
//! ## Grammar
//!
//! ```text
//! stylesheet      = { ruleset } ;
//! ruleset         = selector_group "{" declarations "}" ;
//! selector_group  = selector { "," selector } ;
//! selector        = compound [ combinator selector ] ;
//! compound        = ( "*" | IDENT | qualifier ) { qualifier } ;
//! combinator      = ">" | "+" | "~" | whitespace ;
//! qualifier       = "#" IDENT | "." IDENT | ":" IDENT | attribute ;
//! attribute       = "[" IDENT [ ("=" | "~=" | "|=" | "*=" | "$=") (IDENT | NUMBER | STRING) ] "]" ;
//! declarations    = [ declaration ] { ";" [ declaration ] } ;
//! declaration     = IDENT ":" terms ;
//! ```
//!
//! `terms` must not be empty: `fill: ;` is a syntax error.
//!
//! Parsing is fail-fast: the first mismatch aborts with a
//! [`FcssError::Syntax`] naming the expected and actual token and the line.
//!
//! ## Example
//!
//! ```rust
//! use fcss::parser::{parse_stylesheet, Selector};
//!
//! let sheet = parse_stylesheet("div.foo { color: red; }").unwrap();
//! let ruleset = &sheet.rulesets[0];
//!
//! assert_eq!(
//!     ruleset.selectors.selectors[0],
//!     Selector::and(Selector::type_name("div"), Selector::class("foo"))
//! );
//! assert_eq!(ruleset.declarations[0].terms, "red");
//! ```

pub mod selectors;
pub mod stylesheet;

pub use crate::parser::selectors::{
    AttributeOperator, AttributeSelector, Combinator, MatchResult, Selector, SelectorGroup,
    SimpleSelector, Specificity,
};
pub use crate::parser::stylesheet::{Declaration, Ruleset, StyleSheet};

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{FcssError, Result};
use crate::tokenizer::{LexMode, Token, TokenKind, Tokenizer};

/// Parses a complete stylesheet.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet> {
    let sheet = Parser::new(source).stylesheet()?;
    log::debug!("parsed stylesheet with {} rulesets", sheet.rulesets.len());
    Ok(sheet)
}

/// Reads `reader` to the end and parses the text as a stylesheet.
pub fn parse_stylesheet_reader<R: Read>(mut reader: R) -> Result<StyleSheet> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_stylesheet(&source)
}

/// Reads and parses a stylesheet file.
pub fn parse_stylesheet_file(path: impl AsRef<Path>) -> Result<StyleSheet> {
    let source = fs::read_to_string(path)?;
    parse_stylesheet(&source)
}

/// Parses a declaration list without braces, as found in inline `style`
/// attributes.
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>> {
    let mut parser = Parser::new(source);
    let declarations = parser.declarations()?;
    parser.expect_eof()?;
    Ok(declarations)
}

/// Reads `reader` to the end and parses the text as a declaration list.
pub fn parse_declarations_reader<R: Read>(mut reader: R) -> Result<Vec<Declaration>> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_declarations(&source)
}

/// Parses a comma separated selector group with nothing after it.
pub fn parse_selector_group(source: &str) -> Result<SelectorGroup> {
    let mut parser = Parser::new(source);
    let group = parser.selector_group()?;
    parser.expect_eof()?;
    Ok(group)
}

fn starts_simple_selector(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Word(_) | TokenKind::Char('*' | '#' | '.' | ':' | '[')
    )
}

fn unexpected(expected: &str, token: &Token) -> FcssError {
    FcssError::Syntax {
        expected: expected.to_string(),
        found: token.kind.to_string(),
        line: token.line,
    }
}

/// Recursive-descent parser. Create one per source text.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
        }
    }

    /// `stylesheet = { ruleset }`
    pub fn stylesheet(&mut self) -> Result<StyleSheet> {
        let mut rulesets = Vec::new();
        loop {
            self.tokens.set_mode(LexMode::Block);
            let token = self.tokens.next_token()?;
            if token.kind == TokenKind::Eof {
                break;
            }
            self.tokens.push_back();
            rulesets.push(self.ruleset()?);
        }
        Ok(StyleSheet::new(rulesets))
    }

    /// `ruleset = selector_group "{" declarations "}"`
    pub fn ruleset(&mut self) -> Result<Ruleset> {
        let selectors = self.selector_group()?;
        self.expect_char('{')?;
        let declarations = self.declarations()?;
        self.expect_char('}')?;
        Ok(Ruleset::new(selectors, declarations))
    }

    /// `selector_group = selector { "," selector }`
    ///
    /// Leaves the tokenizer in [`LexMode::Block`].
    pub fn selector_group(&mut self) -> Result<SelectorGroup> {
        self.tokens.set_mode(LexMode::Selector);
        self.skip_whitespace()?;
        let mut selectors = vec![self.selector()?];
        loop {
            self.skip_whitespace()?;
            let token = self.tokens.next_token()?;
            if !token.is_char(',') {
                self.tokens.push_back();
                break;
            }
            self.skip_whitespace()?;
            selectors.push(self.selector()?);
        }
        self.tokens.set_mode(LexMode::Block);
        Ok(SelectorGroup::new(selectors))
    }

    /// `selector = compound [ combinator selector ]`, right-recursive.
    fn selector(&mut self) -> Result<Selector> {
        let left = self.compound()?;

        let mut token = self.tokens.next_token()?;
        let spaced = token.kind == TokenKind::Whitespace;
        if spaced {
            token = self.tokens.next_token()?;
        }

        let combinator = match token.kind {
            TokenKind::Char('>') => Some(Combinator::Child),
            TokenKind::Char('+') => Some(Combinator::AdjacentSibling),
            TokenKind::Char('~') => Some(Combinator::GeneralSibling),
            _ => None,
        };
        if let Some(combinator) = combinator {
            self.skip_whitespace()?;
            let right = self.selector()?;
            return Ok(Selector::combined(combinator, left, right));
        }

        self.tokens.push_back();
        if spaced && starts_simple_selector(&token) {
            let right = self.selector()?;
            return Ok(Selector::descendant(left, right));
        }
        Ok(left)
    }

    /// Juxtaposed simple selectors, folded right into [`Combinator::And`].
    ///
    /// A type name or `*` may only open a compound, so `a/**/b` is an error
    /// rather than a selector that can never match.
    fn compound(&mut self) -> Result<Selector> {
        let first = self.simple_selector()?;
        let token = self.tokens.next_token()?;
        self.tokens.push_back();
        if !starts_simple_selector(&token) {
            return Ok(first);
        }
        if matches!(token.kind, TokenKind::Word(_) | TokenKind::Char('*')) {
            return Err(unexpected("'#', '.', ':' or '['", &token));
        }
        let rest = self.compound()?;
        Ok(Selector::and(first, rest))
    }

    fn simple_selector(&mut self) -> Result<Selector> {
        let token = self.tokens.next_token()?;
        let simple = match token.kind {
            TokenKind::Char('*') => SimpleSelector::Universal,
            TokenKind::Word(name) => SimpleSelector::Type(name),
            TokenKind::Char('#') => SimpleSelector::Id(self.identifier("identifier after '#'")?),
            TokenKind::Char('.') => SimpleSelector::Class(self.identifier("identifier after '.'")?),
            TokenKind::Char(':') => {
                SimpleSelector::PseudoClass(self.identifier("identifier after ':'")?)
            }
            TokenKind::Char('[') => SimpleSelector::Attribute(self.attribute()?),
            _ => return Err(unexpected("selector", &token)),
        };
        Ok(Selector::Simple(simple))
    }

    /// The rest of an attribute selector after `[`.
    fn attribute(&mut self) -> Result<AttributeSelector> {
        self.skip_whitespace()?;
        let name = self.identifier("attribute name")?;
        self.skip_whitespace()?;

        let token = self.tokens.next_token()?;
        let op = match token.kind {
            TokenKind::Char(']') => {
                return Ok(AttributeSelector::new(name, AttributeOperator::Exists));
            }
            TokenKind::Char(c @ ('=' | '~' | '|' | '*' | '$')) => c,
            _ => return Err(unexpected("attribute operator or ']'", &token)),
        };
        if op != '=' {
            // Two-character operators must be written without a gap.
            self.expect_char('=')?;
        }

        self.skip_whitespace()?;
        let value = self.attribute_value()?;
        self.skip_whitespace()?;
        self.expect_char(']')?;

        let operator = match op {
            '=' => AttributeOperator::Equals(value),
            '~' => AttributeOperator::ContainsWord(value),
            '|' => AttributeOperator::StartsWithThenDash(value),
            '*' => AttributeOperator::ContainsSubstring(value),
            _ => AttributeOperator::EndsWith(value),
        };
        Ok(AttributeSelector::new(name, operator))
    }

    fn attribute_value(&mut self) -> Result<String> {
        let token = self.tokens.next_token()?;
        match token.kind {
            TokenKind::Word(word) => Ok(word),
            TokenKind::Number { text, .. } => Ok(text),
            TokenKind::Str { value, .. } => Ok(value),
            _ => Err(unexpected("attribute value", &token)),
        }
    }

    /// `declarations = [ declaration ] { ";" [ declaration ] }`
    ///
    /// Stops before `}` or end of input without consuming it.
    pub fn declarations(&mut self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();
        loop {
            let token = self.tokens.next_token()?;
            match token.kind {
                TokenKind::Char(';') => {}
                TokenKind::Char('}') | TokenKind::Eof => {
                    self.tokens.push_back();
                    return Ok(declarations);
                }
                TokenKind::Word(_) => {
                    self.tokens.push_back();
                    declarations.push(self.declaration()?);
                }
                _ => return Err(unexpected("property name", &token)),
            }
        }
    }

    /// `declaration = IDENT ":" terms`, where `terms` holds at least one
    /// token. An empty value is reported as a missing `property value`.
    fn declaration(&mut self) -> Result<Declaration> {
        let token = self.tokens.next_token()?;
        let line = token.line;
        let property = match token.kind {
            TokenKind::Word(property) => property,
            _ => return Err(unexpected("property name", &token)),
        };
        self.expect_char(':')?;

        self.tokens.set_mode(LexMode::Value);
        let mut terms = String::new();
        loop {
            let token = self.tokens.next_token()?;
            match token.kind {
                TokenKind::Word(word) => terms.push_str(&word),
                TokenKind::Number { text, .. } => terms.push_str(&text),
                TokenKind::Str { raw, .. } => terms.push_str(&raw),
                TokenKind::Whitespace => {
                    if !terms.is_empty() {
                        terms.push(' ');
                    }
                }
                TokenKind::Char(';' | '}') | TokenKind::Eof => {
                    self.tokens.push_back();
                    break;
                }
                TokenKind::Char('{') => return Err(unexpected("';' or '}'", &token)),
                TokenKind::Char(c) => terms.push(c),
            }
        }
        self.tokens.set_mode(LexMode::Block);

        let terms = terms.trim_end();
        if terms.is_empty() {
            let token = self.tokens.next_token()?;
            return Err(unexpected("property value", &token));
        }
        Ok(Declaration::new(property, terms, line))
    }

    fn identifier(&mut self, expected: &str) -> Result<String> {
        let token = self.tokens.next_token()?;
        match token.kind {
            TokenKind::Word(word) => Ok(word),
            _ => Err(unexpected(expected, &token)),
        }
    }

    fn expect_char(&mut self, c: char) -> Result<()> {
        let token = self.tokens.next_token()?;
        if token.is_char(c) {
            Ok(())
        } else {
            Err(unexpected(&format!("'{c}'"), &token))
        }
    }

    fn expect_eof(&mut self) -> Result<()> {
        self.tokens.set_mode(LexMode::Block);
        let token = self.tokens.next_token()?;
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(unexpected("end of input", &token))
        }
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let token = self.tokens.next_token()?;
            if token.kind != TokenKind::Whitespace {
                self.tokens.push_back();
                return Ok(());
            }
        }
    }
}
