use std::fmt;

use crate::parser::selectors::SelectorGroup;

/// A property name and its raw, whitespace-normalized terms.
///
/// Terms are kept as text; turning `1px solid red` into typed values is the
/// job of whoever consumes the declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub terms: String,
    /// Line the property name started on.
    pub line: usize,
}

impl Declaration {
    pub fn new(property: impl Into<String>, terms: impl Into<String>, line: usize) -> Self {
        Self {
            property: property.into(),
            terms: terms.into(),
            line,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.terms)
    }
}

/// A selector group and its declarations, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    pub selectors: SelectorGroup,
    pub declarations: Vec<Declaration>,
}

impl Ruleset {
    pub fn new(selectors: SelectorGroup, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selectors)?;
        for declaration in &self.declarations {
            writeln!(f, "    {declaration}")?;
        }
        write!(f, "}}")
    }
}

/// A parsed stylesheet. Immutable once built and safe to share between
/// threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub rulesets: Vec<Ruleset>,
}

impl StyleSheet {
    pub fn new(rulesets: Vec<Ruleset>) -> Self {
        Self { rulesets }
    }

    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ruleset) in self.rulesets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{ruleset}")?;
        }
        Ok(())
    }
}
