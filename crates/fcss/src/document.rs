//! A ready-made labeled tree that implements [`SelectorModel`].
//!
//! [`Document`] is an arena of [`NodeData`] addressed by [`NodeId`]. Hosts
//! with their own figure model implement [`SelectorModel`] directly; this
//! type serves everything else, including the tests.
//!
//! ```rust
//! use fcss::document::{Document, NodeData};
//! use fcss::parser::parse_selector_group;
//!
//! let mut doc = Document::new();
//! let root = doc.add_root(NodeData::new("drawing").with_id("main"));
//! let rect = doc.append_child(root, NodeData::new("rect").with_class("shadow"));
//!
//! let group = parse_selector_group("#main > rect.shadow").unwrap();
//! assert!(group.matches(&doc, &rect));
//! ```

use bitflags::bitflags;

use crate::model::{self, SelectorModel};

bitflags! {
    /// Interaction states matched by pseudo-classes.
    ///
    /// ```
    /// use fcss::document::NodeStates;
    ///
    /// let states = NodeStates::FOCUS | NodeStates::SELECTED;
    /// assert!(states.contains(NodeStates::SELECTED));
    /// assert!(!states.contains(NodeStates::HOVER));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeStates: u16 {
        /// `:focus`
        const FOCUS    = 0b0000_0001;
        /// `:hover`
        const HOVER    = 0b0000_0010;
        /// `:active`
        const ACTIVE   = 0b0000_0100;
        /// `:disabled`
        const DISABLED = 0b0000_1000;
        /// `:selected`
        const SELECTED = 0b0001_0000;
    }
}

impl NodeStates {
    /// The state a pseudo-class name refers to, if any.
    pub fn from_pseudo_class(name: &str) -> Option<NodeStates> {
        match name {
            "focus" => Some(NodeStates::FOCUS),
            "hover" => Some(NodeStates::HOVER),
            "active" => Some(NodeStates::ACTIVE),
            "disabled" => Some(NodeStates::DISABLED),
            "selected" => Some(NodeStates::SELECTED),
            _ => None,
        }
    }
}

/// Index of a node inside its [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Everything selectors can ask about one node.
#[derive(Clone, Debug, Default)]
pub struct NodeData {
    pub type_name: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    pub states: NodeStates,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds every whitespace separated class in `classes`.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_states(mut self, states: NodeStates) -> Self {
        self.states |= states;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An arena tree of nodes.
#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node without a parent.
    pub fn add_root(&mut self, data: NodeData) -> NodeId {
        self.push(data, None)
    }

    /// Adds `data` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.push(data, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, mut data: NodeData, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        data.parent = parent;
        data.children.clear();
        self.nodes.push(data);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<&str> {
        self.get(*element).and_then(|node| node.attribute(name))
    }

    fn siblings(&self, element: &NodeId) -> Option<&[NodeId]> {
        let parent = self.get(*element)?.parent?;
        self.get(parent).map(|p| p.children.as_slice())
    }
}

impl SelectorModel<NodeId> for Document {
    fn has_id(&self, element: &NodeId, id: &str) -> bool {
        self.get(*element)
            .is_some_and(|node| node.id.as_deref() == Some(id))
    }

    fn has_type(&self, element: &NodeId, type_name: &str) -> bool {
        self.get(*element)
            .is_some_and(|node| node.type_name == type_name)
    }

    fn has_style_class(&self, element: &NodeId, class: &str) -> bool {
        self.get(*element)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn has_attribute(&self, element: &NodeId, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    fn attribute_equals(&self, element: &NodeId, name: &str, value: &str) -> bool {
        self.attribute(element, name) == Some(value)
    }

    fn attribute_starts_with_then_dash(&self, element: &NodeId, name: &str, value: &str) -> bool {
        self.attribute(element, name)
            .is_some_and(|v| model::starts_with_then_dash(v, value))
    }

    fn attribute_contains_word(&self, element: &NodeId, name: &str, value: &str) -> bool {
        self.attribute(element, name)
            .is_some_and(|v| model::contains_word(v, value))
    }

    fn attribute_contains_substring(&self, element: &NodeId, name: &str, value: &str) -> bool {
        self.attribute(element, name)
            .is_some_and(|v| !value.is_empty() && v.contains(value))
    }

    fn attribute_ends_with(&self, element: &NodeId, name: &str, value: &str) -> bool {
        self.attribute(element, name)
            .is_some_and(|v| !value.is_empty() && v.ends_with(value))
    }

    fn has_pseudo_class(&self, element: &NodeId, pseudo_class: &str) -> bool {
        if pseudo_class == "first-child" {
            return self
                .siblings(element)
                .is_some_and(|siblings| siblings.first() == Some(element));
        }
        let Some(node) = self.get(*element) else {
            return false;
        };
        NodeStates::from_pseudo_class(pseudo_class)
            .is_some_and(|state| node.states.contains(state))
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.get(*element)?.parent
    }

    fn previous_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let siblings = self.siblings(element)?;
        let index = siblings.iter().position(|id| id == element)?;
        index.checked_sub(1).map(|i| siblings[i])
    }
}
