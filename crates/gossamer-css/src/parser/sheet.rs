//! Rule and stylesheet assembly.
//!
//! Drives the token stream through the rule states: top level, at-rules,
//! selector preludes, declaration blocks, and invalid-construct skipping.
//! Recovery is per-construct: a bad declaration loses one declaration, a
//! bad selector segment loses one segment, a bad rule loses one rule.

use cssparser::{Delimiter, ParseError, Parser, Token, parse_important};

use crate::error::Error;
use crate::parser::ParserContext;
use crate::parser::selectors::parse_selector_list;
use crate::parser::values::parse_property_value;
use crate::property::PropertyId;
use crate::rules::{CssRule, Declaration, ImportRule, MediaList, MediaRule, StyleRule};

/// Maximum `@media` nesting depth; deeper rules are skipped as invalid.
const MAX_MEDIA_NESTING: usize = 16;

/// Parse rules until the current nesting level is exhausted.
pub(crate) fn parse_rule_list<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    depth: usize,
) -> Vec<CssRule> {
    let mut rules = Vec::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let start = parser.state();
        match parser.next() {
            Err(_) => break,
            // HTML comment delimiters are tolerated between rules.
            Ok(Token::CDO | Token::CDC) => continue,
            Ok(Token::AtKeyword(name)) => {
                let name = name.as_ref().to_owned();
                match parse_at_rule(parser, &name, ctx, depth) {
                    Ok(Some(rule)) => rules.push(rule),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!("dropping @{} rule: {:?}", name, e);
                        skip_to_next_rule(parser);
                    }
                }
            }
            Ok(_) => {
                parser.reset(&start);
                match parse_style_rule(parser, ctx) {
                    Ok(Some(rule)) => rules.push(CssRule::Style(rule)),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!("dropping style rule: {:?}", e);
                        skip_to_next_rule(parser);
                    }
                }
            }
        }
    }

    rules
}

/// Parse one at-rule, the `@` keyword already consumed.
///
/// `Ok(None)` means the construct was consumed without producing a rule
/// (recognized-but-unhandled at-rules, or a dropped `@import`).
fn parse_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    ctx: &ParserContext<'_>,
    depth: usize,
) -> Result<Option<CssRule>, ParseError<'i, Error>> {
    if name.eq_ignore_ascii_case("import") {
        // `@import <url-or-string> [medium [, medium]*]? ;`
        let import = parser.parse_until_after(Delimiter::Semicolon, |p| {
            let href = p.expect_url_or_string()?.as_ref().trim().to_owned();
            let media = parse_media_list(p)?;
            Ok::<_, ParseError<'i, Error>>(ImportRule { href, media })
        });
        return match import {
            Ok(import) => Ok(Some(CssRule::Import(import))),
            Err(e) => {
                tracing::warn!("dropping @import rule: {:?}", e);
                Ok(None)
            }
        };
    }

    if name.eq_ignore_ascii_case("media") {
        if depth >= MAX_MEDIA_NESTING {
            return Err(parser.new_custom_error(Error::NestingTooDeep));
        }
        let media =
            parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| parse_media_list(p))?;
        parser.expect_curly_bracket_block()?;
        let rules = parser.parse_nested_block(|p| {
            Ok::<_, ParseError<'i, Error>>(parse_rule_list(p, ctx, depth + 1))
        })?;
        return Ok(Some(CssRule::Media(MediaRule { media, rules })));
    }

    if name.eq_ignore_ascii_case("charset")
        || name.eq_ignore_ascii_case("font-face")
        || name.eq_ignore_ascii_case("page")
        || name.eq_ignore_ascii_case("namespace")
    {
        // Recognized but not modeled: consume the statement or block.
        tracing::debug!("skipping @{} rule", name);
        skip_at_rule_body(parser);
        return Ok(None);
    }

    tracing::warn!("{}", Error::unsupported_at_rule(name));
    skip_at_rule_body(parser);
    Ok(None)
}

/// Parse `selector-list { declaration-block }`.
///
/// Returns `Ok(None)` when the construct was consumed but produced no rule:
/// no selector segment survived, or the block had no valid declaration.
fn parse_style_rule<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
) -> Result<Option<StyleRule>, ParseError<'i, Error>> {
    let selectors = parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        Ok::<_, ParseError<'i, Error>>(parse_selector_list(p, ctx))
    })?;
    parser.expect_curly_bracket_block()?;
    let declarations = parser
        .parse_nested_block(|p| Ok::<_, ParseError<'i, Error>>(parse_declaration_list(p, ctx)))?;

    if selectors.is_empty() {
        tracing::warn!("dropping rule with no valid selector");
        return Ok(None);
    }
    if declarations.is_empty() {
        tracing::warn!("dropping rule with no valid declaration");
        return Ok(None);
    }
    Ok(Some(StyleRule {
        selectors,
        declarations,
    }))
}

/// Parse the contents of a declaration block.
///
/// Each `;`-separated segment parses independently; a malformed one is
/// dropped without touching its neighbors. Empty segments are skipped
/// silently.
pub(crate) fn parse_declaration_list<'i>(
    parser: &mut Parser<'i, '_>,
    _ctx: &ParserContext<'_>,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        // Dangling `;` between declarations.
        if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }
        let result = parser.parse_until_after(Delimiter::Semicolon, |p| {
            parse_declaration(p, &mut declarations)
        });
        if let Err(e) = result {
            tracing::warn!("dropping declaration: {:?}", e);
        }
    }

    declarations
}

/// Parse one `property : value [!important]?` declaration.
///
/// Successful declarations (one, or several for a shorthand) are appended
/// to `out`; any failure leaves `out` untouched.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
    out: &mut Vec<Declaration>,
) -> Result<(), ParseError<'i, Error>> {
    let name = parser.expect_ident_cloned()?;
    parser.expect_colon()?;

    let Some(property) = PropertyId::from_name(&name) else {
        return Err(parser.new_custom_error(Error::unknown_property(name.as_ref())));
    };

    let mut staged = Vec::new();
    parser.parse_until_before(Delimiter::Bang, |p| {
        parse_property_value(p, property, &mut staged)
    })?;

    // Anything left before the segment's end must be `!important`.
    if !parser.is_exhausted() {
        parser.try_parse(parse_important)?;
        parser.expect_exhausted()?;
        for declaration in &mut staged {
            declaration.important = true;
        }
    }

    out.append(&mut staged);
    Ok(())
}

/// Parse `medium [, medium]*`; empty input is a valid empty list.
fn parse_media_list<'i>(parser: &mut Parser<'i, '_>) -> Result<MediaList, ParseError<'i, Error>> {
    let mut media = MediaList::new();
    parser.skip_whitespace();
    if parser.is_exhausted() {
        return Ok(media);
    }
    loop {
        let medium = parser.expect_ident_cloned()?;
        media.push(medium.as_ref());
        parser.skip_whitespace();
        if parser.is_exhausted() {
            return Ok(media);
        }
        parser.expect_comma()?;
    }
}

/// Skip past the next `{...}` block (its contents are consumed lazily by
/// the tokenizer), or to end of input.
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) | Err(_) => return,
            Ok(_) => {}
        }
    }
}

/// Skip an at-rule body: to the terminating `;`, or past its `{...}` block.
fn skip_at_rule_body(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon | Token::CurlyBracketBlock) | Err(_) => return,
            Ok(_) => {}
        }
    }
}
