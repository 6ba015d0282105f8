//! The recursive-descent parser over `cssparser` tokens.
//!
//! All parser state is threaded explicitly: a [`ParserContext`] carries the
//! name-resolver collaborator, and the `cssparser::Parser` carries the
//! token cursor. Nothing global, nothing shared between parses.

mod selectors;
mod sheet;
mod values;

use cssparser::{Parser, ParserInput};

use crate::names::{HTML_NAMES, NameResolver};
use crate::rules::{CssRule, Declaration};

/// Context passed through every parse function.
pub struct ParserContext<'a> {
    /// Resolves element/attribute/namespace names to document ids.
    pub resolver: &'a dyn NameResolver,
    /// Whether element and attribute names resolve case-insensitively
    /// (HTML documents; XML turns this off).
    pub case_insensitive_names: bool,
}

impl<'a> ParserContext<'a> {
    /// Context over a document-provided resolver.
    pub fn new(resolver: &'a dyn NameResolver) -> Self {
        Self {
            resolver,
            case_insensitive_names: true,
        }
    }

    /// Case-sensitive name resolution (XML documents).
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive_names = false;
        self
    }
}

impl Default for ParserContext<'static> {
    /// Context over the static HTML name tables, for parsing default
    /// stylesheets without a live document.
    fn default() -> Self {
        Self::new(&HTML_NAMES)
    }
}

/// Parse a whole stylesheet's rule list from source text.
pub(crate) fn parse_rule_list_from(css: &str, ctx: &ParserContext<'_>) -> Vec<CssRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    sheet::parse_rule_list(&mut parser, ctx, 0)
}

/// Parse a bare declaration list (inline `style="..."` text).
pub(crate) fn parse_declaration_list_from(css: &str, ctx: &ParserContext<'_>) -> Vec<Declaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    sheet::parse_declaration_list(&mut parser, ctx)
}
