//! Rule types produced by the stylesheet parser.

use crate::property::PropertyId;
use crate::rules::MediaList;
use crate::selector::Selector;
use crate::value::Value;

/// One parsed property/value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub id: PropertyId,
    pub value: Value,
    pub important: bool,
}

impl Declaration {
    /// Create a non-important declaration.
    pub fn new(id: PropertyId, value: Value) -> Self {
        Self {
            id,
            value,
            important: false,
        }
    }
}

/// A selector list with its declaration block.
///
/// Only emitted when at least one selector segment and at least one
/// declaration parsed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// An `@import` rule. The URL is passed through unresolved; resolving it
/// against the stylesheet's base URL is the loader's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRule {
    pub href: String,
    pub media: MediaList,
}

/// An `@media` rule owning its nested rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRule {
    pub media: MediaList,
    pub rules: Vec<CssRule>,
}

/// A top-level (or `@media`-nested) rule.
#[derive(Debug, Clone, PartialEq)]
pub enum CssRule {
    Style(StyleRule),
    Import(ImportRule),
    Media(MediaRule),
}

impl CssRule {
    /// The style rule payload, if this is a style rule.
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Self::Style(rule) => Some(rule),
            _ => None,
        }
    }

    /// The import rule payload, if this is an `@import`.
    pub fn as_import(&self) -> Option<&ImportRule> {
        match self {
            Self::Import(rule) => Some(rule),
            _ => None,
        }
    }

    /// The media rule payload, if this is an `@media`.
    pub fn as_media(&self) -> Option<&MediaRule> {
        match self {
            Self::Media(rule) => Some(rule),
            _ => None,
        }
    }
}
