//! # FCSS - Figure CSS
//!
//! The styling core of the drawing editor: a small CSS dialect whose
//! selectors are evaluated against any tree-shaped document.
//!
//! This crate provides:
//!
//! - **Parsing**: Convert stylesheet text into an immutable [`StyleSheet`](parser::StyleSheet)
//! - **Matching**: Evaluate selectors against any type implementing [`SelectorModel`]
//! - **Cascade**: Order matching rulesets by specificity and source order
//!
//! ## Quick Start
//!
//! ```rust
//! use fcss::cascade::compute_style;
//! use fcss::document::{Document, NodeData};
//! use fcss::parser::parse_stylesheet;
//!
//! let source = r#"
//!     rect {
//!         fill: red;
//!         stroke-width: 1px;
//!     }
//!
//!     group > rect.highlight {
//!         fill: yellow;
//!     }
//! "#;
//!
//! let stylesheet = parse_stylesheet(source).expect("valid stylesheet");
//! assert_eq!(stylesheet.rulesets.len(), 2);
//!
//! let mut doc = Document::new();
//! let group = doc.add_root(NodeData::new("group"));
//! let rect = doc.append_child(group, NodeData::new("rect").with_class("highlight"));
//!
//! let style = compute_style(&stylesheet, &doc, &rect);
//! assert_eq!(style.get("fill"), Some("yellow"));
//! assert_eq!(style.get("stroke-width"), Some("1px"));
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Type selectors: `rect`, `text`
//! - Class selectors: `.primary`, `.shadow`
//! - ID selectors: `#main`
//! - Universal selector: `*`
//! - Pseudo-classes: `:hover`, `:selected`
//! - Attribute selectors: `[x]`, `[x=v]`, `[x~=v]`, `[x|=v]`, `[x*=v]`, `[x$=v]`
//! - Compound selectors: `rect.primary#main`
//! - Combinators: descendant (space), child (`>`), adjacent (`+`), general sibling (`~`)
//!
//! ### Declarations
//! Values are kept as raw, whitespace-normalized text. Comments (`/* */`)
//! are allowed anywhere whitespace is.
//!
//! ## Not Supported
//!
//! - At-rules and media queries
//! - Custom properties and `nth-child` formulas
//!
//! ## Modules
//!
//! - [`tokenizer`]: Lexer with explicit [`LexMode`](tokenizer::LexMode)s
//! - [`parser`]: Recursive-descent parser and the stylesheet AST
//! - [`model`]: The [`SelectorModel`] capability trait
//! - [`matching`]: Selector evaluation
//! - [`cascade`]: Specificity ordering and computed styles
//! - [`document`]: A ready-made arena tree implementing [`SelectorModel`]
//! - [`loader`]: Non-fatal stylesheet loading for hosts
//! - [`error`]: Error types for parsing failures

pub mod cascade;
pub mod document;
pub mod error;
pub mod loader;
pub mod matching;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use error::{FcssError, Result};
pub use model::SelectorModel;
pub use parser::{
    Declaration, Ruleset, Selector, SelectorGroup, Specificity, StyleSheet, parse_declarations,
    parse_stylesheet,
};
