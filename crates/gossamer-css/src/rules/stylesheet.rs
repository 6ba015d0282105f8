//! Stylesheet container and parse entry points.

use crate::parser::{self, ParserContext};
use crate::rules::{CssRule, Declaration};

/// A parsed stylesheet owning its top-level rule list.
///
/// Parsing is best-effort: invalid constructs are dropped with a `tracing`
/// warning and never surface as errors. An unterminated block truncates the
/// remainder of its nesting level; everything parsed before it is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub rules: Vec<CssRule>,
}

impl StyleSheet {
    /// Parse a stylesheet from CSS text.
    ///
    /// The text must already be decoded; fetching and decoding the bytes is
    /// the caller's responsibility.
    pub fn parse(css: &str, ctx: &ParserContext<'_>) -> Self {
        Self {
            rules: parser::parse_rule_list_from(css, ctx),
        }
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over top-level rules in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CssRule> {
        self.rules.iter()
    }
}

/// Parse an inline `style="..."` attribute value.
///
/// Enters the grammar at the declaration-block state, skipping selector
/// parsing. Returns `None` when no declaration survives, so callers can
/// distinguish "nothing usable" from an empty-but-valid attribute only by
/// the same null convention the rest of the parser uses.
pub fn parse_style_declarations(css: &str, ctx: &ParserContext<'_>) -> Option<Vec<Declaration>> {
    let decls = parser::parse_declaration_list_from(css, ctx);
    if decls.is_empty() { None } else { Some(decls) }
}
