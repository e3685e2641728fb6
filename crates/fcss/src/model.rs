//! The capability interface a document implements to be styled.
//!
//! The matching engine never sees a concrete document. It asks a
//! [`SelectorModel`] about opaque element handles `E` (node ids, `Rc`
//! handles, plain references) and walks structure through
//! [`SelectorModel::parent`] and [`SelectorModel::previous_sibling`].
//!
//! The parent and sibling chains must be finite and acyclic; the engine does
//! not detect cycles.

/// Queries the matching engine needs from a document.
///
/// Every comparison is exact and case-sensitive. The free functions in this
/// module implement the word and dash rules for implementors that store
/// attributes and classes as strings.
pub trait SelectorModel<E> {
    fn has_id(&self, element: &E, id: &str) -> bool;

    fn has_type(&self, element: &E, type_name: &str) -> bool;

    /// True if `class` is one of the element's whitespace separated style
    /// classes.
    fn has_style_class(&self, element: &E, class: &str) -> bool;

    fn has_attribute(&self, element: &E, name: &str) -> bool;

    fn attribute_equals(&self, element: &E, name: &str, value: &str) -> bool;

    /// `[name|=value]`: the attribute is `value` or starts with `value-`.
    fn attribute_starts_with_then_dash(&self, element: &E, name: &str, value: &str) -> bool;

    /// `[name~=value]`: `value` is one of the attribute's whitespace
    /// separated words.
    fn attribute_contains_word(&self, element: &E, name: &str, value: &str) -> bool;

    fn attribute_contains_substring(&self, element: &E, name: &str, value: &str) -> bool;

    fn attribute_ends_with(&self, element: &E, name: &str, value: &str) -> bool;

    fn has_pseudo_class(&self, element: &E, pseudo_class: &str) -> bool;

    /// The parent element, or `None` at the root.
    fn parent(&self, element: &E) -> Option<E>;

    /// The sibling immediately before `element`, or `None` for the first
    /// child.
    fn previous_sibling(&self, element: &E) -> Option<E>;
}

/// True if `word` is one of the whitespace separated words of `list`.
pub fn contains_word(list: &str, word: &str) -> bool {
    !word.is_empty() && list.split_whitespace().any(|w| w == word)
}

/// True if `value` equals `prefix` or starts with `prefix` followed by `-`.
pub fn starts_with_then_dash(value: &str, prefix: &str) -> bool {
    match value.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}

/// Class lists are whitespace separated words.
pub fn has_class(class_list: &str, class: &str) -> bool {
    contains_word(class_list, class)
}
