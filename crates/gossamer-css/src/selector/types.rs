//! Selector chain types and specificity.

use std::fmt;

use crate::names::{AttributeId, ElementId, NamespaceId};

/// The element-name constraint of one selector node.
///
/// `id == None` is the wildcard: no element restriction. The resolved
/// numeric id and the source-local name are kept together; the name is what
/// serialization prints, the id is what the document model matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName {
    pub ns: NamespaceId,
    pub id: Option<ElementId>,
    pub local: Option<Box<str>>,
}

impl TagName {
    /// The wildcard tag in a namespace.
    pub fn any(ns: NamespaceId) -> Self {
        Self {
            ns,
            id: None,
            local: None,
        }
    }

    /// A resolved element name.
    pub fn named(ns: NamespaceId, id: ElementId, local: impl Into<Box<str>>) -> Self {
        Self {
            ns,
            id: Some(id),
            local: Some(local.into()),
        }
    }

    /// Whether this tag matches any element.
    pub fn is_wildcard(&self) -> bool {
        self.id.is_none()
    }
}

/// The kind of test one selector node applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Match {
    /// Tag-only node (or bare `*`).
    #[default]
    None,
    /// `#value`
    Id,
    /// `.value`
    Class,
    /// `[attr=value]`
    AttributeExact,
    /// `[attr]`
    AttributeSet,
    /// `[attr~=value]`
    AttributeList,
    /// `[attr|=value]`
    AttributeHyphen,
    /// `[attr^=value]`
    AttributeBegin,
    /// `[attr$=value]`
    AttributeEnd,
    /// `[attr*=value]`
    AttributeContain,
    /// `:value` or `::value`
    Pseudo,
}

/// How a selector node relates to its `next` (the node to its left in
/// source order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relation {
    /// Whitespace combinator.
    #[default]
    Descendant,
    /// `>` combinator.
    Child,
    /// `+` combinator.
    Sibling,
    /// No combinator: both tests apply to the same element.
    SubSelector,
}

/// An attribute reference carried by id/class/attribute tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrName {
    pub ns: NamespaceId,
    pub id: AttributeId,
    pub local: Box<str>,
}

/// One simple-selector node in a compound/combinator chain.
///
/// The chain is built head-first from the subject (rightmost) selector
/// backward: when selector B follows selector A via relation R in source
/// order, `B.relation == R` and `B.next` owns A. Dropping a selector drops
/// its whole chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub tag: TagName,
    pub match_op: Match,
    pub attr: Option<AttrName>,
    /// Attribute value, id/class name, or pseudo-class name.
    pub value: String,
    /// Nested simple-selector argument of a functional pseudo-class.
    pub argument: Option<Box<Selector>>,
    pub relation: Relation,
    pub next: Option<Box<Selector>>,
}

impl Selector {
    /// A tag-only node.
    pub fn new(tag: TagName) -> Self {
        Self {
            tag,
            match_op: Match::None,
            attr: None,
            value: String::new(),
            argument: None,
            relation: Relation::Descendant,
            next: None,
        }
    }

    /// Specificity of the whole chain: 100 per id test, 10 per
    /// class/attribute/pseudo test, 1 per named tag. An exact attribute
    /// match on the `id` attribute counts as an id test.
    pub fn specificity(&self) -> u32 {
        let mut s = 0;
        let mut node = Some(self);
        while let Some(sel) = node {
            if !sel.tag.is_wildcard() {
                s += 1;
            }
            s += match sel.match_op {
                Match::Id => 100,
                Match::AttributeExact
                    if sel.attr.as_ref().is_some_and(|a| &*a.local == "id") =>
                {
                    100
                }
                Match::None => 0,
                _ => 10,
            };
            node = sel.next.as_deref();
        }
        s
    }

    fn fmt_simple(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag.local {
            Some(local) => f.write_str(local)?,
            // A lone wildcard prints as `*`; a wildcard carrying a test is
            // implied by the test itself.
            None if self.match_op == Match::None => f.write_str("*")?,
            None => {}
        }
        match self.match_op {
            Match::None => Ok(()),
            Match::Id => write!(f, "#{}", self.value),
            Match::Class => write!(f, ".{}", self.value),
            Match::Pseudo => {
                write!(f, ":{}", self.value)?;
                if let Some(arg) = &self.argument {
                    write!(f, "({})", arg)?;
                }
                Ok(())
            }
            Match::AttributeSet => write!(f, "[{}]", self.attr_local()),
            Match::AttributeExact => write!(f, "[{}=\"{}\"]", self.attr_local(), self.value),
            Match::AttributeList => write!(f, "[{}~=\"{}\"]", self.attr_local(), self.value),
            Match::AttributeHyphen => write!(f, "[{}|=\"{}\"]", self.attr_local(), self.value),
            Match::AttributeBegin => write!(f, "[{}^=\"{}\"]", self.attr_local(), self.value),
            Match::AttributeEnd => write!(f, "[{}$=\"{}\"]", self.attr_local(), self.value),
            Match::AttributeContain => write!(f, "[{}*=\"{}\"]", self.attr_local(), self.value),
        }
    }

    fn attr_local(&self) -> &str {
        self.attr.as_ref().map(|a| &*a.local).unwrap_or("")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(next) = &self.next {
            write!(f, "{}", next)?;
            match self.relation {
                Relation::Descendant => f.write_str(" ")?,
                Relation::Child => f.write_str(" > ")?,
                Relation::Sibling => f.write_str(" + ")?,
                Relation::SubSelector => {}
            }
        }
        self.fmt_simple(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{AttributeId, ElementId};

    fn named(name: &str) -> Selector {
        Selector::new(TagName::named(NamespaceId::ANY, ElementId(1), name))
    }

    #[test]
    fn specificity_sums_along_the_chain() {
        // `h1` -> 1
        assert_eq!(named("h1").specificity(), 1);

        // `h1.title` -> 11
        let mut class = Selector::new(TagName::any(NamespaceId::ANY));
        class.match_op = Match::Class;
        class.value = "title".into();
        class.relation = Relation::SubSelector;
        class.next = Some(Box::new(named("h1")));
        assert_eq!(class.specificity(), 11);

        // `div #main` -> 101
        let mut id = Selector::new(TagName::any(NamespaceId::ANY));
        id.match_op = Match::Id;
        id.value = "main".into();
        id.relation = Relation::Descendant;
        id.next = Some(Box::new(named("div")));
        assert_eq!(id.specificity(), 101);
    }

    #[test]
    fn display_round_trips_combinators() {
        let mut child = named("li");
        child.relation = Relation::Child;
        child.next = Some(Box::new(named("ul")));
        assert_eq!(child.to_string(), "ul > li");

        let mut sibling = named("p");
        sibling.relation = Relation::Sibling;
        sibling.next = Some(Box::new(named("h1")));
        assert_eq!(sibling.to_string(), "h1 + p");
    }

    #[test]
    fn display_attribute_forms() {
        let mut sel = Selector::new(TagName::any(NamespaceId::ANY));
        sel.match_op = Match::AttributeBegin;
        sel.attr = Some(AttrName {
            ns: NamespaceId::NONE,
            id: AttributeId(1),
            local: "href".into(),
        });
        sel.value = "http".into();
        assert_eq!(sel.to_string(), "[href^=\"http\"]");
    }

    #[test]
    fn lone_wildcard_prints_as_star() {
        let sel = Selector::new(TagName::any(NamespaceId::ANY));
        assert_eq!(sel.to_string(), "*");
    }
}
