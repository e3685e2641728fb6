use std::collections::HashMap;
use std::path::Path;

use fcss::SelectorModel;
use fcss::cascade::{ComputedStyle, compute_style, compute_style_with_inline};
use fcss::document::{Document, NodeId};
use fcss::loader::load_stylesheet_or_default;
use fcss::parser::{Declaration, StyleSheet, parse_declarations};

/// Attribute holding a node's inline style.
pub const STYLE_ATTRIBUTE: &str = "style";

/// Where a stylesheet comes from. Author rules override user agent rules
/// regardless of specificity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleOrigin {
    /// Built-in defaults shipped with the editor.
    UserAgent,
    /// Stylesheets supplied with the drawing.
    Author,
}

/// Holds the stylesheets of a drawing and resolves figure styles from them.
#[derive(Clone, Debug, Default)]
pub struct StyleManager {
    user_agent: StyleSheet,
    author: StyleSheet,
}

impl StyleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stylesheet(&self, origin: StyleOrigin) -> &StyleSheet {
        match origin {
            StyleOrigin::UserAgent => &self.user_agent,
            StyleOrigin::Author => &self.author,
        }
    }

    pub fn set_stylesheet(&mut self, origin: StyleOrigin, sheet: StyleSheet) {
        match origin {
            StyleOrigin::UserAgent => self.user_agent = sheet,
            StyleOrigin::Author => self.author = sheet,
        }
    }

    /// Loads the author stylesheet from `path`.
    ///
    /// A file that cannot be read or parsed is logged and leaves the drawing
    /// without author styles.
    pub fn load_author_stylesheet(&mut self, path: impl AsRef<Path>) {
        self.author = load_stylesheet_or_default(path);
    }

    /// Resolves the style of one element: user agent rules, then author
    /// rules, then `inline`.
    pub fn resolve<E, M>(&self, model: &M, element: &E, inline: &[Declaration]) -> ComputedStyle
    where
        E: Clone,
        M: SelectorModel<E> + ?Sized,
    {
        let mut style = compute_style(&self.user_agent, model, element);
        style.merge(&compute_style_with_inline(&self.author, model, element, inline));
        style
    }

    /// Resolves every node of `doc`, reading inline styles from the
    /// [`STYLE_ATTRIBUTE`] attribute.
    ///
    /// A malformed inline style is logged and ignored for that node only.
    pub fn resolve_document(&self, doc: &Document) -> HashMap<NodeId, ComputedStyle> {
        doc.ids()
            .map(|id| {
                let inline = doc
                    .get(id)
                    .and_then(|node| node.attribute(STYLE_ATTRIBUTE))
                    .map(|source| {
                        parse_declarations(source).unwrap_or_else(|err| {
                            log::warn!("ignoring inline style of node {}: {err}", id.0);
                            Vec::new()
                        })
                    })
                    .unwrap_or_default();

                let style = self.resolve(doc, &id, &inline);
                log::trace!("STYLE: node={} -> {} properties", id.0, style.len());
                (id, style)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcss::document::NodeData;
    use fcss::parse_stylesheet;

    fn manager() -> StyleManager {
        let mut styles = StyleManager::new();
        styles.set_stylesheet(
            StyleOrigin::UserAgent,
            parse_stylesheet("#figure { fill: white; stroke: black }").unwrap(),
        );
        styles.set_stylesheet(
            StyleOrigin::Author,
            parse_stylesheet("rect { fill: red }").unwrap(),
        );
        styles
    }

    #[test]
    fn test_author_overrides_user_agent_regardless_of_specificity() {
        let styles = manager();
        let mut doc = Document::new();
        let rect = doc.add_root(NodeData::new("rect").with_id("figure"));

        let style = styles.resolve(&doc, &rect, &[]);
        assert_eq!(style.get("fill"), Some("red"));
        assert_eq!(style.get("stroke"), Some("black"));
    }

    #[test]
    fn test_inline_style_wins() {
        let styles = manager();
        let mut doc = Document::new();
        let rect =
            doc.add_root(NodeData::new("rect").with_attribute(STYLE_ATTRIBUTE, "fill: green"));

        let resolved = styles.resolve_document(&doc);
        assert_eq!(resolved[&rect].get("fill"), Some("green"));
    }

    #[test]
    fn test_malformed_inline_style_is_ignored() {
        let styles = manager();
        let mut doc = Document::new();
        let root = doc.add_root(NodeData::new("group"));
        let rect = doc.append_child(
            root,
            NodeData::new("rect").with_attribute(STYLE_ATTRIBUTE, "fill green"),
        );

        let resolved = styles.resolve_document(&doc);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[&rect].get("fill"), Some("red"));
        assert!(resolved[&root].is_empty());
    }

    #[test]
    fn test_unreadable_author_stylesheet_leaves_no_author_styles() {
        let mut styles = manager();
        styles.load_author_stylesheet("/nonexistent/figstyle/author.css");
        assert!(styles.stylesheet(StyleOrigin::Author).is_empty());
        assert!(!styles.stylesheet(StyleOrigin::UserAgent).is_empty());
    }
}
