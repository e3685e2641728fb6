//! Selector matching against any [`SelectorModel`].
//!
//! Matching is structural recursion over the selector tree. Combinators
//! evaluate their right operand first and then look for the left operand
//! relative to the element where the right operand matched (its *anchor*):
//!
//! - `And`: both operands match the same element.
//! - `Descendant`: left matches some strict ancestor of the anchor.
//! - `Child`: left matches the anchor's parent.
//! - `AdjacentSibling`: left matches the anchor's previous sibling.
//! - `GeneralSibling`: left matches any earlier sibling of the anchor.
//!
//! When a candidate ancestor or sibling matches the left operand but the rest
//! of the chain fails from there, the search moves on to the next candidate,
//! so `a > b c` finds a `b` ancestor with an `a` parent even if a nearer `b`
//! has none.
//!
//! Matching never fails and never mutates the selector; a missing parent or
//! sibling is simply no match.

use crate::model::SelectorModel;
use crate::parser::{
    AttributeOperator, AttributeSelector, Combinator, MatchResult, Selector, SelectorGroup,
    SimpleSelector,
};

impl SimpleSelector {
    pub fn matches<E, M>(&self, model: &M, element: &E) -> bool
    where
        M: SelectorModel<E> + ?Sized,
    {
        match self {
            SimpleSelector::Universal => true,
            SimpleSelector::Type(name) => model.has_type(element, name),
            SimpleSelector::Id(id) => model.has_id(element, id),
            SimpleSelector::Class(class) => model.has_style_class(element, class),
            SimpleSelector::PseudoClass(name) => model.has_pseudo_class(element, name),
            SimpleSelector::Attribute(attr) => attr.matches(model, element),
        }
    }
}

impl AttributeSelector {
    pub fn matches<E, M>(&self, model: &M, element: &E) -> bool
    where
        M: SelectorModel<E> + ?Sized,
    {
        let name = self.name.as_str();
        match &self.operator {
            AttributeOperator::Exists => model.has_attribute(element, name),
            AttributeOperator::Equals(value) => model.attribute_equals(element, name, value),
            AttributeOperator::ContainsWord(value) => {
                model.attribute_contains_word(element, name, value)
            }
            AttributeOperator::StartsWithThenDash(value) => {
                model.attribute_starts_with_then_dash(element, name, value)
            }
            AttributeOperator::ContainsSubstring(value) => {
                model.attribute_contains_substring(element, name, value)
            }
            AttributeOperator::EndsWith(value) => model.attribute_ends_with(element, name, value),
        }
    }
}

impl Selector {
    /// Returns the anchor element if the selector matches `element`.
    ///
    /// The anchor is where the leftmost part of the selector matched; for a
    /// selector without structural combinators it is `element` itself.
    pub fn select<E, M>(&self, model: &M, element: &E) -> Option<E>
    where
        E: Clone,
        M: SelectorModel<E> + ?Sized,
    {
        let mut anchor = None;
        self.match_with(model, element, &mut |found: &E| {
            anchor = Some(found.clone());
            true
        });
        anchor
    }

    pub fn matches<E, M>(&self, model: &M, element: &E) -> bool
    where
        M: SelectorModel<E> + ?Sized,
    {
        self.match_with(model, element, &mut |_: &E| true)
    }

    /// Calls `found` with every anchor at which the selector matches
    /// `element` until it returns true.
    fn match_with<E, M>(&self, model: &M, element: &E, found: &mut dyn FnMut(&E) -> bool) -> bool
    where
        M: SelectorModel<E> + ?Sized,
    {
        let (combinator, left, right) = match self {
            Selector::Simple(simple) => return simple.matches(model, element) && found(element),
            Selector::Combined {
                combinator,
                left,
                right,
            } => (*combinator, left, right),
        };

        match combinator {
            Combinator::And => {
                left.matches(model, element) && right.matches(model, element) && found(element)
            }
            Combinator::Descendant => right.match_with(model, element, &mut |anchor: &E| {
                let mut ancestor = model.parent(anchor);
                while let Some(candidate) = ancestor {
                    if left.match_with(model, &candidate, &mut *found) {
                        return true;
                    }
                    ancestor = model.parent(&candidate);
                }
                false
            }),
            Combinator::Child => right.match_with(model, element, &mut |anchor: &E| {
                model
                    .parent(anchor)
                    .is_some_and(|parent| left.match_with(model, &parent, &mut *found))
            }),
            Combinator::AdjacentSibling => right.match_with(model, element, &mut |anchor: &E| {
                model
                    .previous_sibling(anchor)
                    .is_some_and(|sibling| left.match_with(model, &sibling, &mut *found))
            }),
            Combinator::GeneralSibling => right.match_with(model, element, &mut |anchor: &E| {
                let mut sibling = model.previous_sibling(anchor);
                while let Some(candidate) = sibling {
                    if left.match_with(model, &candidate, &mut *found) {
                        return true;
                    }
                    sibling = model.previous_sibling(&candidate);
                }
                false
            }),
        }
    }
}

impl SelectorGroup {
    /// True if any member matches; stops at the first one that does.
    pub fn matches<E, M>(&self, model: &M, element: &E) -> bool
    where
        M: SelectorModel<E> + ?Sized,
    {
        self.selectors.iter().any(|s| s.matches(model, element))
    }

    /// The anchor of the first matching member.
    pub fn select<E, M>(&self, model: &M, element: &E) -> Option<E>
    where
        E: Clone,
        M: SelectorModel<E> + ?Sized,
    {
        self.selectors.iter().find_map(|s| s.select(model, element))
    }

    /// Like [`SelectorGroup::select`], but also reports which member matched.
    pub fn match_result<'a, E, M>(&'a self, model: &M, element: &E) -> Option<MatchResult<'a, E>>
    where
        E: Clone,
        M: SelectorModel<E> + ?Sized,
    {
        self.selectors.iter().find_map(|selector| {
            selector
                .select(model, element)
                .map(|element| MatchResult { element, selector })
        })
    }

    /// The matching member with the highest specificity. Earlier members win
    /// ties.
    pub fn best_match<'a, E, M>(&'a self, model: &M, element: &E) -> Option<MatchResult<'a, E>>
    where
        E: Clone,
        M: SelectorModel<E> + ?Sized,
    {
        let mut best: Option<MatchResult<'a, E>> = None;
        for selector in &self.selectors {
            if best
                .as_ref()
                .is_some_and(|b| b.selector.specificity() >= selector.specificity())
            {
                continue;
            }
            if let Some(anchor) = selector.select(model, element) {
                best = Some(MatchResult {
                    element: anchor,
                    selector,
                });
            }
        }
        best
    }
}
