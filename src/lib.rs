//! Stylesheet support for the drawing editor.
//!
//! The selector engine itself lives in the [`fcss`] crate and is re-exported
//! here. This crate adds the host side: a [`StyleManager`] that keeps the
//! user agent and author stylesheets of a drawing and resolves figure styles
//! from them.
//!
//! ```rust
//! use figstyle::{StyleManager, StyleOrigin};
//! use figstyle::fcss::document::{Document, NodeData};
//! use figstyle::fcss::parse_stylesheet;
//!
//! let mut styles = StyleManager::new();
//! styles.set_stylesheet(StyleOrigin::UserAgent, parse_stylesheet("* { stroke: black }").unwrap());
//! styles.set_stylesheet(StyleOrigin::Author, parse_stylesheet("rect { fill: red }").unwrap());
//!
//! let mut doc = Document::new();
//! let rect = doc.add_root(NodeData::new("rect").with_attribute("style", "fill: blue"));
//!
//! let resolved = styles.resolve_document(&doc);
//! assert_eq!(resolved[&rect].get("fill"), Some("blue"));
//! assert_eq!(resolved[&rect].get("stroke"), Some("black"));
//! ```

pub mod style_manager;

pub use fcss;
pub use style_manager::{STYLE_ATTRIBUTE, StyleManager, StyleOrigin};
