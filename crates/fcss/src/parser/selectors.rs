//! Selector AST and specificity.
//!
//! Selectors form a closed tree: a [`Selector`] is either a
//! [`SimpleSelector`] or a [`Combinator`] joining two selectors. Parsed
//! selectors nest to the right, so `a b c` is
//! `Descendant(a, Descendant(b, c))` and `div.foo` is
//! `And(Type("div"), Class("foo"))`.
//!
//! Nothing here holds document state; matching lives in
//! [`crate::matching`].

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Cascade priority of a selector.
///
/// Ids outweigh classes, attributes and pseudo-classes, which outweigh types
/// and the universal selector. Compound and complex selectors sum their
/// parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32);

impl Specificity {
    pub const ID_WEIGHT: u32 = 100;
    pub const CLASS_WEIGHT: u32 = 10;
    pub const TYPE_WEIGHT: u32 = 0;

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Specificity) -> Specificity {
        Specificity(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Specificity>>(iter: I) -> Specificity {
        iter.fold(Specificity::default(), Add::add)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an attribute selector compares the attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `[name]`
    Exists,
    /// `[name=value]`
    Equals(String),
    /// `[name~=value]`: value is one of the whitespace separated words.
    ContainsWord(String),
    /// `[name|=value]`: value exactly, or value followed by `-`.
    StartsWithThenDash(String),
    /// `[name*=value]`
    ContainsSubstring(String),
    /// `[name$=value]`
    EndsWith(String),
}

impl AttributeOperator {
    fn symbol_and_value(&self) -> Option<(&'static str, &str)> {
        match self {
            AttributeOperator::Exists => None,
            AttributeOperator::Equals(v) => Some(("=", v)),
            AttributeOperator::ContainsWord(v) => Some(("~=", v)),
            AttributeOperator::StartsWithThenDash(v) => Some(("|=", v)),
            AttributeOperator::ContainsSubstring(v) => Some(("*=", v)),
            AttributeOperator::EndsWith(v) => Some(("$=", v)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    pub name: String,
    pub operator: AttributeOperator,
}

impl AttributeSelector {
    pub fn new(name: impl Into<String>, operator: AttributeOperator) -> Self {
        Self {
            name: name.into(),
            operator,
        }
    }
}

/// A selector that tests a single element without looking at its
/// neighbours.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    Universal,
    Type(String),
    Id(String),
    Class(String),
    PseudoClass(String),
    Attribute(AttributeSelector),
}

impl SimpleSelector {
    pub fn specificity(&self) -> Specificity {
        match self {
            SimpleSelector::Universal | SimpleSelector::Type(_) => {
                Specificity(Specificity::TYPE_WEIGHT)
            }
            SimpleSelector::Id(_) => Specificity(Specificity::ID_WEIGHT),
            // Attributes weigh the same as classes and pseudo-classes
            SimpleSelector::Class(_)
            | SimpleSelector::PseudoClass(_)
            | SimpleSelector::Attribute(_) => Specificity(Specificity::CLASS_WEIGHT),
        }
    }
}

/// The relationship a combined selector imposes between its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Juxtaposition: both operands match the same element.
    And,
    /// Whitespace: left matches some ancestor.
    Descendant,
    /// `>`: left matches the parent.
    Child,
    /// `+`: left matches the immediately preceding sibling.
    AdjacentSibling,
    /// `~`: left matches any preceding sibling.
    GeneralSibling,
}

impl Combinator {
    fn separator(self) -> &'static str {
        match self {
            Combinator::And => "",
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::AdjacentSibling => " + ",
            Combinator::GeneralSibling => " ~ ",
        }
    }
}

/// A predicate over document elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Simple(SimpleSelector),
    Combined {
        combinator: Combinator,
        left: Box<Selector>,
        right: Box<Selector>,
    },
}

impl Selector {
    pub fn universal() -> Self {
        Selector::Simple(SimpleSelector::Universal)
    }

    pub fn type_name(name: impl Into<String>) -> Self {
        Selector::Simple(SimpleSelector::Type(name.into()))
    }

    pub fn id(name: impl Into<String>) -> Self {
        Selector::Simple(SimpleSelector::Id(name.into()))
    }

    pub fn class(name: impl Into<String>) -> Self {
        Selector::Simple(SimpleSelector::Class(name.into()))
    }

    pub fn pseudo_class(name: impl Into<String>) -> Self {
        Selector::Simple(SimpleSelector::PseudoClass(name.into()))
    }

    pub fn attribute(name: impl Into<String>, operator: AttributeOperator) -> Self {
        Selector::Simple(SimpleSelector::Attribute(AttributeSelector::new(
            name, operator,
        )))
    }

    pub fn combined(combinator: Combinator, left: Selector, right: Selector) -> Self {
        Selector::Combined {
            combinator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Selector, right: Selector) -> Self {
        Self::combined(Combinator::And, left, right)
    }

    pub fn descendant(left: Selector, right: Selector) -> Self {
        Self::combined(Combinator::Descendant, left, right)
    }

    pub fn child(left: Selector, right: Selector) -> Self {
        Self::combined(Combinator::Child, left, right)
    }

    pub fn adjacent_sibling(left: Selector, right: Selector) -> Self {
        Self::combined(Combinator::AdjacentSibling, left, right)
    }

    pub fn general_sibling(left: Selector, right: Selector) -> Self {
        Self::combined(Combinator::GeneralSibling, left, right)
    }

    /// Sum of the weights of every simple selector in the tree.
    pub fn specificity(&self) -> Specificity {
        match self {
            Selector::Simple(simple) => simple.specificity(),
            Selector::Combined { left, right, .. } => left.specificity() + right.specificity(),
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleSelector::Universal => write!(f, "*"),
            SimpleSelector::Type(name) => write!(f, "{name}"),
            SimpleSelector::Id(name) => write!(f, "#{name}"),
            SimpleSelector::Class(name) => write!(f, ".{name}"),
            SimpleSelector::PseudoClass(name) => write!(f, ":{name}"),
            SimpleSelector::Attribute(attr) => match attr.operator.symbol_and_value() {
                None => write!(f, "[{}]", attr.name),
                Some((op, value)) => {
                    // A raw newline would end the string; keep it escaped.
                    let escaped = value
                        .replace('\\', "\\\\")
                        .replace('"', "\\\"")
                        .replace('\n', "\\\n");
                    write!(f, "[{}{op}\"{escaped}\"]", attr.name)
                }
            },
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Simple(simple) => write!(f, "{simple}"),
            Selector::Combined {
                combinator,
                left,
                right,
            } => write!(f, "{left}{}{right}", combinator.separator()),
        }
    }
}

/// Comma separated alternatives; matches if any member matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorGroup {
    pub selectors: Vec<Selector>,
}

impl SelectorGroup {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// The highest specificity among the members.
    pub fn specificity(&self) -> Specificity {
        self.selectors
            .iter()
            .map(Selector::specificity)
            .max()
            .unwrap_or_default()
    }
}

impl fmt::Display for SelectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

/// The element a selector matched, plus the member of a group that matched
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult<'a, E> {
    /// The element where the leftmost part of `selector` matched.
    pub element: E,
    pub selector: &'a Selector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specificity_tiers() {
        assert_eq!(Selector::universal().specificity(), Specificity(0));
        assert_eq!(Selector::type_name("div").specificity(), Specificity(0));
        assert_eq!(Selector::class("a").specificity(), Specificity(10));
        assert_eq!(Selector::pseudo_class("hover").specificity(), Specificity(10));
        assert_eq!(
            Selector::attribute("x", AttributeOperator::Exists).specificity(),
            Specificity(10)
        );
        assert_eq!(Selector::id("main").specificity(), Specificity(100));
    }

    #[test]
    fn test_combinators_sum_operands() {
        let selector = Selector::child(
            Selector::and(Selector::id("main"), Selector::class("wide")),
            Selector::descendant(Selector::type_name("p"), Selector::class("note")),
        );
        assert_eq!(selector.specificity(), Specificity(120));
    }

    #[test]
    fn test_group_specificity_is_max() {
        let group = SelectorGroup::new(vec![Selector::class("a"), Selector::id("b")]);
        assert_eq!(group.specificity(), Specificity(100));
        assert_eq!(SelectorGroup::new(vec![]).specificity(), Specificity(0));
    }

    #[test]
    fn test_display() {
        let selector = Selector::child(
            Selector::and(Selector::type_name("div"), Selector::class("foo")),
            Selector::general_sibling(
                Selector::attribute("lang", AttributeOperator::StartsWithThenDash("en".into())),
                Selector::universal(),
            ),
        );
        assert_eq!(selector.to_string(), "div.foo > [lang|=\"en\"] ~ *");
    }

    #[test]
    fn test_display_escapes_attribute_values() {
        let selector = Selector::attribute("title", AttributeOperator::Equals("say \"hi\"".into()));
        assert_eq!(selector.to_string(), r#"[title="say \"hi\""]"#);
    }
}
