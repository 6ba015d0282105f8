//! CSS2 parsing core for the Gossamer document engine.
//!
//! This crate turns stylesheet text into structured rules, featuring:
//!
//! - **Selectors**: type, id, class, attribute, and pseudo-class selectors
//!   with descendant/child/sibling combinators and specificity
//! - **Values**: keywords, lengths with unit validation, colors, URIs,
//!   strings, functions, and lists
//! - **Shorthands**: table-driven expansion of `margin`, `border`,
//!   `background`, and friends into longhand declarations
//! - **At-rules**: `@import` and `@media` (with nested rule lists)
//! - **Error recovery**: invalid constructs degrade per the CSS
//!   error-handling rules instead of failing the parse
//!
//! The document model stays outside: element and attribute names resolve
//! through the [`names::NameResolver`] trait, with a static HTML table as
//! the fallback. Fetching stylesheet bytes, resolving URLs, and the cascade
//! are the caller's concern.
//!
//! # Example
//!
//! ```
//! use gossamer_css::{ParserContext, StyleSheet};
//!
//! let ctx = ParserContext::default();
//! let sheet = StyleSheet::parse("h1.title { margin: 1em 2em; }", &ctx);
//! assert_eq!(sheet.len(), 1);
//! ```

pub mod names;
pub mod parser;
pub mod property;
pub mod rules;
pub mod selector;
pub mod value;

mod error;

pub use error::Error;
pub use parser::ParserContext;
pub use rules::{StyleSheet, parse_style_declarations};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::names::{AttributeId, ElementId, HtmlNames, NameResolver, NamespaceId};
    pub use crate::parser::ParserContext;
    pub use crate::property::PropertyId;
    pub use crate::rules::{
        CssRule, Declaration, ImportRule, MediaList, MediaRule, StyleRule, StyleSheet,
        parse_style_declarations,
    };
    pub use crate::selector::{AttrName, Match, Relation, Selector, TagName};
    pub use crate::value::{Color, Keyword, ListSeparator, Unit, UnitFlags, Value, ValueList};
}
