//! Cascade resolution over a parsed stylesheet.
//!
//! - [`matching_rules`]: rulesets that apply to an element, in cascade order
//! - [`compute_style`]: the winning raw terms for each property
//! - [`compute_style_with_inline`]: the same, with an inline style on top
//!
//! ## Cascade Algorithm
//!
//! 1. Find every ruleset with a selector matching the element, remembering
//!    the specificity of its best matching selector
//! 2. Sort by specificity, then source order
//! 3. Apply declarations in that order (later declarations override earlier)
//!
//! Values stay raw text. Interpreting `fill: #f00` is up to the host.

use std::collections::HashMap;

use crate::model::SelectorModel;
use crate::parser::{Declaration, Ruleset, Selector, Specificity, StyleSheet};

/// A ruleset that matched an element, bundled with its priority
/// information.
#[derive(Clone, Debug)]
pub struct MatchedRule<'a> {
    pub specificity: Specificity,
    /// Index of the ruleset in its stylesheet.
    pub source_order: usize,
    pub ruleset: &'a Ruleset,
    /// The member of the ruleset's selector group that won.
    pub selector: &'a Selector,
}

/// Property name to winning raw terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    properties: HashMap<String, String>,
}

impl ComputedStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, terms)| (property.as_str(), terms.as_str()))
    }

    /// Overwrites properties in `self` with every property of `other`.
    pub fn merge(&mut self, other: &ComputedStyle) {
        for (property, terms) in &other.properties {
            self.properties.insert(property.clone(), terms.clone());
        }
    }

    fn apply(&mut self, declaration: &Declaration) {
        self.properties
            .insert(declaration.property.clone(), declaration.terms.clone());
    }
}

/// Rulesets matching `element`, lowest priority first.
pub fn matching_rules<'a, E, M>(
    stylesheet: &'a StyleSheet,
    model: &M,
    element: &E,
) -> Vec<MatchedRule<'a>>
where
    E: Clone,
    M: SelectorModel<E> + ?Sized,
{
    let mut matched: Vec<MatchedRule<'a>> = stylesheet
        .rulesets
        .iter()
        .enumerate()
        .filter_map(|(source_order, ruleset)| {
            let result = ruleset.selectors.best_match(model, element)?;
            Some(MatchedRule {
                specificity: result.selector.specificity(),
                source_order,
                ruleset,
                selector: result.selector,
            })
        })
        .collect();

    matched.sort_by(|a, b| {
        a.specificity
            .cmp(&b.specificity)
            .then(a.source_order.cmp(&b.source_order))
    });
    matched
}

/// The core cascade function.
pub fn compute_style<E, M>(stylesheet: &StyleSheet, model: &M, element: &E) -> ComputedStyle
where
    E: Clone,
    M: SelectorModel<E> + ?Sized,
{
    compute_style_with_inline(stylesheet, model, element, &[])
}

/// Cascade with an inline style (see
/// [`parse_declarations`](crate::parser::parse_declarations)) applied after
/// every stylesheet rule.
pub fn compute_style_with_inline<E, M>(
    stylesheet: &StyleSheet,
    model: &M,
    element: &E,
    inline: &[Declaration],
) -> ComputedStyle
where
    E: Clone,
    M: SelectorModel<E> + ?Sized,
{
    let matched = matching_rules(stylesheet, model, element);
    log::trace!(
        "CASCADE: {} of {} rulesets matched, {} inline declarations",
        matched.len(),
        stylesheet.rulesets.len(),
        inline.len()
    );

    let mut computed = ComputedStyle::default();
    for rule in &matched {
        for declaration in &rule.ruleset.declarations {
            computed.apply(declaration);
        }
    }
    for declaration in inline {
        computed.apply(declaration);
    }
    computed
}
