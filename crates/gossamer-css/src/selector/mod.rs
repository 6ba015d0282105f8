//! Selector model: compound/combinator chains with resolved names and
//! specificity.

mod types;

pub use types::{AttrName, Match, Relation, Selector, TagName};
