//! Error types for the CSS parsing core.
//!
//! Every variant here is recoverable: the parser reports it through
//! `tracing`, skips the offending construct, and keeps going. Nothing in
//! this module ever reaches a caller of the top-level entry points.

/// Errors raised while parsing a stylesheet.
///
/// Used as the custom payload of [`cssparser::ParseError`] inside the
/// parser. Each variant corresponds to one recovery action: drop a
/// declaration, drop a selector segment, or skip an at-rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Property name not present in the property table.
    #[error("unknown property '{name}'")]
    UnknownProperty { name: String },

    /// A known property was given a value it cannot accept.
    #[error("invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// A selector segment could not be parsed.
    #[error("invalid selector: {message}")]
    InvalidSelector { message: String },

    /// An element, attribute, or namespace name the resolver does not know.
    #[error("unresolved name '{name}'")]
    UnresolvedName { name: String },

    /// An at-rule that is skipped rather than parsed.
    #[error("unsupported at-rule '@{name}'")]
    UnsupportedAtRule { name: String },

    /// Nested constructs exceeded the depth limit.
    #[error("nesting exceeds the depth limit")]
    NestingTooDeep,
}

impl Error {
    /// Create an unknown-property error.
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    /// Create an invalid-value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-selector error.
    pub fn invalid_selector(message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            message: message.into(),
        }
    }

    /// Create an unresolved-name error.
    pub fn unresolved_name(name: impl Into<String>) -> Self {
        Self::UnresolvedName { name: name.into() }
    }

    /// Create an unsupported-at-rule error.
    pub fn unsupported_at_rule(name: impl Into<String>) -> Self {
        Self::UnsupportedAtRule { name: name.into() }
    }
}
