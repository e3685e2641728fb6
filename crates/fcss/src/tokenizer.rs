//! Lexical analysis for stylesheets.
//!
//! The [`Tokenizer`] turns source text into a stream of [`Token`]s with one
//! token of pushback. How characters are grouped depends on an explicit
//! [`LexMode`]:
//!
//! - [`LexMode::Block`]: whitespace is insignificant and skipped.
//! - [`LexMode::Selector`]: whitespace runs are reported, so the parser can
//!   see the descendant combinator.
//! - [`LexMode::Value`]: raw declaration terms; everything up to whitespace,
//!   a quote, `;`, `{`, `}` or `/` is a single word.
//!
//! `/* ... */` comments are skipped in every mode.
//!
//! ## Example
//!
//! ```rust
//! use fcss::tokenizer::{LexMode, TokenKind, Tokenizer};
//!
//! let mut tokens = Tokenizer::with_mode("div > p", LexMode::Selector);
//! assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Word("div".into()));
//! assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Whitespace);
//! assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Char('>'));
//! ```

use std::fmt;

use nom::{
    IResult,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::{delimited, pair},
};

use crate::error::{FcssError, Result};

/// Selects how the tokenizer groups characters into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LexMode {
    /// Whitespace and comments are skipped entirely.
    #[default]
    Block,
    /// Like [`LexMode::Block`], but every whitespace run is one
    /// [`TokenKind::Whitespace`] token.
    Selector,
    /// Raw declaration terms with whitespace runs reported.
    Value,
}

/// The kind and payload of a lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A run of word characters (see [`is_word_char`]), or a raw term in
    /// [`LexMode::Value`].
    Word(String),
    /// A decimal literal not immediately followed by a word character.
    Number { value: f64, text: String },
    /// A quoted string. `value` has escapes removed; `raw` is the exact
    /// source text including the quotes.
    Str { value: String, raw: String },
    /// A run of whitespace. Never produced in [`LexMode::Block`].
    Whitespace,
    /// Any other single character.
    Char(char),
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(word) => write!(f, "identifier \"{word}\""),
            TokenKind::Number { text, .. } => write!(f, "number {text}"),
            TokenKind::Str { raw, .. } => write!(f, "string {raw}"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Char(c) => write!(f, "'{c}'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with the 1-based line it started on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn is_char(&self, c: char) -> bool {
        self.kind == TokenKind::Char(c)
    }
}

/// Returns true for characters that may appear inside a word.
///
/// ASCII letters and digits, `-`, `_` and the Latin-1 range U+00A0..=U+00FF,
/// so vendor prefixes like `-moz-box` and accented identifiers lex as one
/// word. Other non-ASCII characters are single [`TokenKind::Char`] tokens.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '\u{a0}'..='\u{ff}')
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

fn value_run(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| {
        !c.is_whitespace() && !matches!(c, '"' | '\'' | ';' | '{' | '}' | '/')
    })(input)
}

/// The part of `input` consumed to leave `remaining`.
fn consumed<'a>(input: &'a str, remaining: &str) -> &'a str {
    &input[..input.len() - remaining.len()]
}

/// A one-token-lookahead tokenizer over a borrowed source string.
///
/// A tokenizer is created per parse and is not meant to be shared.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    mode: LexMode,
    last: Option<Token>,
    pushed_back: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer in [`LexMode::Block`].
    pub fn new(source: &'a str) -> Self {
        Self::with_mode(source, LexMode::Block)
    }

    pub fn with_mode(source: &'a str, mode: LexMode) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            mode,
            last: None,
            pushed_back: false,
        }
    }

    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Switches the lexing mode.
    ///
    /// The new mode applies from the next [`Tokenizer::next_token`] call that
    /// actually reads input; a pushed-back token is replayed as it was lexed.
    pub fn set_mode(&mut self, mode: LexMode) {
        self.mode = mode;
    }

    /// The current 1-based line of the read position.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Un-consumes the most recently returned token.
    ///
    /// Only one token can be pending; pushing back twice replays it once.
    pub fn push_back(&mut self) {
        if self.last.is_some() {
            self.pushed_back = true;
        }
    }

    /// Returns the next token, or a [`FcssError::Lexical`] for an
    /// unterminated string or comment.
    pub fn next_token(&mut self) -> Result<Token> {
        if self.pushed_back {
            self.pushed_back = false;
            if let Some(token) = &self.last {
                return Ok(token.clone());
            }
        }
        let token = self.lex()?;
        self.last = Some(token.clone());
        Ok(token)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn advance(&mut self, text: &str) {
        self.line += text.matches('\n').count();
        self.pos += text.len();
    }

    fn lex(&mut self) -> Result<Token> {
        let start_line = self.line;
        if self.skip_trivia()? && self.mode != LexMode::Block {
            return Ok(Token::new(TokenKind::Whitespace, start_line));
        }

        let line = self.line;
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return Ok(Token::new(TokenKind::Eof, line));
        };

        if c == '"' || c == '\'' {
            return self.lex_string(c, line);
        }

        let kind = match self.mode {
            LexMode::Value => self.lex_value(rest, c),
            LexMode::Block | LexMode::Selector => self.lex_word(rest, c),
        };
        Ok(Token::new(kind, line))
    }

    /// Skips comments and whitespace. Returns true if any whitespace was
    /// skipped.
    fn skip_trivia(&mut self) -> Result<bool> {
        let mut saw_whitespace = false;
        loop {
            let rest = self.rest();
            if rest.starts_with("/*") {
                match comment(rest) {
                    Ok((remaining, _)) => self.advance(consumed(rest, remaining)),
                    Err(_) => {
                        return Err(FcssError::Lexical {
                            message: "unterminated comment".to_string(),
                            line: self.line,
                        });
                    }
                }
            } else if let Ok((_, ws)) = whitespace(rest) {
                self.advance(ws);
                saw_whitespace = true;
            } else {
                return Ok(saw_whitespace);
            }
        }
    }

    fn lex_word(&mut self, rest: &'a str, c: char) -> TokenKind {
        if let Ok((after, digits)) = number(rest) {
            if !after.starts_with(is_word_char) {
                if let Ok(value) = digits.parse::<f64>() {
                    self.advance(digits);
                    return TokenKind::Number {
                        value,
                        text: digits.to_string(),
                    };
                }
            }
        }
        if let Ok((_, w)) = word(rest) {
            self.advance(w);
            return TokenKind::Word(w.to_string());
        }
        self.advance(&rest[..c.len_utf8()]);
        TokenKind::Char(c)
    }

    fn lex_value(&mut self, rest: &'a str, c: char) -> TokenKind {
        if let Ok((_, run)) = value_run(rest) {
            self.advance(run);
            return TokenKind::Word(run.to_string());
        }
        self.advance(&rest[..c.len_utf8()]);
        match c {
            // Comments were already skipped, so this slash is a plain term.
            '/' => TokenKind::Word("/".to_string()),
            _ => TokenKind::Char(c),
        }
    }

    fn lex_string(&mut self, quote: char, line: usize) -> Result<Token> {
        let rest = self.rest();
        let mut value = String::new();
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                c if c == quote => {
                    let raw = &rest[..i + c.len_utf8()];
                    self.advance(raw);
                    let kind = TokenKind::Str {
                        value,
                        raw: raw.to_string(),
                    };
                    return Ok(Token::new(kind, line));
                }
                '\\' => match chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                '\n' => break,
                _ => value.push(c),
            }
        }
        Err(FcssError::Lexical {
            message: format!("unterminated string starting with {quote}"),
            line,
        })
    }
}
