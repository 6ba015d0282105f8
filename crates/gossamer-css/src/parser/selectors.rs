//! Selector-list parsing.
//!
//! A selector list splits on top-level commas; each segment is a compound
//! chain built head-first from the subject selector backward. A failed
//! segment is dropped on its own; the enclosing rule dies only when every
//! segment fails.

use cssparser::{BasicParseError, Delimiter, ParseError, Parser, Token};

use crate::error::Error;
use crate::names::NamespaceId;
use crate::parser::ParserContext;
use crate::selector::{AttrName, Match, Relation, Selector, TagName};

/// Functional pseudo-classes nest their argument selectors; bound the
/// recursion on hostile input.
const MAX_PSEUDO_NESTING: usize = 16;

/// Parse a comma-separated selector list. Invalid segments are dropped
/// individually; the result may be empty.
pub(crate) fn parse_selector_list<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
) -> Vec<Selector> {
    let mut selectors = Vec::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        match parser.parse_until_before(Delimiter::Comma, |p| parse_selector(p, ctx, 0)) {
            Ok(selector) => selectors.push(selector),
            Err(e) => tracing::warn!("dropping selector segment: {:?}", e),
        }
        match parser.next() {
            Ok(Token::Comma) => continue,
            _ => break,
        }
    }

    selectors
}

/// Parse one compound chain: compounds separated by descendant space,
/// `>`, or `+`. The returned selector is the subject (rightmost) compound;
/// its `next` chain walks leftward through the source.
fn parse_selector<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    depth: usize,
) -> Result<Selector, ParseError<'i, Error>> {
    let mut chain: Option<Box<Selector>> = None;
    let mut relation = Relation::Descendant;

    loop {
        let mut compound = parse_compound(parser, ctx, depth)?;
        if let Some(prev) = chain.take() {
            link_tail(&mut compound, relation, prev);
        }
        chain = Some(Box::new(compound));

        // What separates this compound from the next one?
        let mut saw_space = false;
        let mut next_relation = None;
        loop {
            let state = parser.state();
            match parser.next_including_whitespace() {
                Ok(Token::WhiteSpace(_)) => saw_space = true,
                Ok(Token::Delim('>')) => {
                    next_relation = Some(Relation::Child);
                    break;
                }
                Ok(Token::Delim('+')) => {
                    next_relation = Some(Relation::Sibling);
                    break;
                }
                Ok(token) => {
                    let token = token.clone();
                    parser.reset(&state);
                    if saw_space {
                        next_relation = Some(Relation::Descendant);
                        break;
                    }
                    return Err(parser.new_custom_error(Error::invalid_selector(format!(
                        "unexpected token {:?}",
                        token
                    ))));
                }
                Err(_) => break,
            }
        }
        match next_relation {
            Some(r) => relation = r,
            None => break,
        }
    }

    chain
        .map(|boxed| *boxed)
        .ok_or_else(|| parser.new_custom_error(Error::invalid_selector("empty selector")))
}

/// Hook `prev` onto the leftmost end of a compound's sub-selector chain.
fn link_tail(node: &mut Selector, relation: Relation, prev: Box<Selector>) {
    match node.next {
        Some(ref mut next) => link_tail(next, relation, prev),
        None => {
            node.relation = relation;
            node.next = Some(prev);
        }
    }
}

/// Parse one compound selector: an optional (namespaced) element name or
/// `*`, followed by `#id`, `.class`, `[attr]`, and `:pseudo` tests. Each
/// additional test chains a node via `Relation::SubSelector`.
fn parse_compound<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    depth: usize,
) -> Result<Selector, ParseError<'i, Error>> {
    if depth > MAX_PSEUDO_NESTING {
        return Err(parser.new_custom_error(Error::NestingTooDeep));
    }
    parser.skip_whitespace();
    let default_ns = ctx.resolver.default_namespace();

    let mut explicit_tag = true;
    let state = parser.state();
    let mut head = match parser.next_including_whitespace().map(Token::clone) {
        Ok(Token::Ident(name)) => {
            if parser.try_parse(expect_ns_bar).is_ok() {
                let ns = resolve_ns_prefix(parser, ctx, name.as_ref())?;
                parse_local_tag(parser, ctx, ns)?
            } else {
                resolve_tag(parser, ctx, default_ns, name.as_ref())?
            }
        }
        Ok(Token::Delim('*')) => {
            if parser.try_parse(expect_ns_bar).is_ok() {
                parse_local_tag(parser, ctx, NamespaceId::ANY)?
            } else {
                Selector::new(TagName::any(default_ns))
            }
        }
        Ok(Token::Delim('|')) => parse_local_tag(parser, ctx, NamespaceId::NONE)?,
        Ok(_) | Err(_) => {
            parser.reset(&state);
            explicit_tag = false;
            Selector::new(TagName::any(default_ns))
        }
    };

    let mut has_test = false;
    loop {
        let state = parser.state();
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };
        match token {
            Token::IDHash(id) => {
                let attr = known_attribute(parser, ctx, "id")?;
                attach(&mut head, Match::Id, Some(attr), id.as_ref().to_owned(), None);
            }
            Token::Delim('.') => {
                let location = parser.current_source_location();
                let name = match parser.next_including_whitespace()?.clone() {
                    Token::Ident(name) => name,
                    t => return Err(location.new_unexpected_token_error(t)),
                };
                let attr = known_attribute(parser, ctx, "class")?;
                attach(
                    &mut head,
                    Match::Class,
                    Some(attr),
                    name.as_ref().to_owned(),
                    None,
                );
            }
            Token::Colon => {
                // A second colon (pseudo-element syntax) is accepted and
                // treated like the single-colon form.
                let _ = parser.try_parse(expect_colon_token);
                let location = parser.current_source_location();
                match parser.next_including_whitespace()?.clone() {
                    Token::Ident(name) => {
                        attach(
                            &mut head,
                            Match::Pseudo,
                            None,
                            name.as_ref().to_ascii_lowercase(),
                            None,
                        );
                    }
                    Token::Function(name) => {
                        let name = name.as_ref().to_ascii_lowercase();
                        let argument = parser.parse_nested_block(|p| {
                            let arg = parse_compound(p, ctx, depth + 1)?;
                            p.skip_whitespace();
                            p.expect_exhausted()?;
                            Ok::<_, ParseError<'i, Error>>(arg)
                        })?;
                        attach(
                            &mut head,
                            Match::Pseudo,
                            None,
                            name,
                            Some(Box::new(argument)),
                        );
                    }
                    t => return Err(location.new_unexpected_token_error(t)),
                }
            }
            Token::SquareBracketBlock => {
                let (attr, op, value) =
                    parser.parse_nested_block(|p| parse_attribute_selector(p, ctx))?;
                attach(&mut head, op, Some(attr), value, None);
            }
            _ => {
                parser.reset(&state);
                break;
            }
        }
        has_test = true;
    }

    if !explicit_tag && !has_test {
        return Err(parser.new_custom_error(Error::invalid_selector("expected a simple selector")));
    }
    Ok(head)
}

/// Record one test on the compound being built. The first test merges into
/// the tag-carrying node; later tests chain new wildcard nodes.
fn attach(
    head: &mut Selector,
    op: Match,
    attr: Option<AttrName>,
    value: String,
    argument: Option<Box<Selector>>,
) {
    if head.match_op == Match::None {
        head.match_op = op;
        head.attr = attr;
        head.value = value;
        head.argument = argument;
    } else {
        let prev = std::mem::replace(head, Selector::new(TagName::any(NamespaceId::ANY)));
        head.match_op = op;
        head.attr = attr;
        head.value = value;
        head.argument = argument;
        head.relation = Relation::SubSelector;
        head.next = Some(Box::new(prev));
    }
}

/// Parse the inside of a `[...]` attribute selector.
fn parse_attribute_selector<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
) -> Result<(AttrName, Match, String), ParseError<'i, Error>> {
    let ci = ctx.case_insensitive_names;
    parser.skip_whitespace();

    // Attribute selectors default to the null namespace, not the
    // document's default namespace.
    let location = parser.current_source_location();
    let (ns, name) = match parser.next()?.clone() {
        Token::Ident(first) => {
            if parser.try_parse(expect_ns_bar).is_ok() {
                let ns = resolve_ns_prefix(parser, ctx, first.as_ref())?;
                (ns, expect_ident_text(parser)?)
            } else {
                (NamespaceId::NONE, first.as_ref().to_owned())
            }
        }
        Token::Delim('*') => {
            expect_ns_bar(parser)?;
            (NamespaceId::ANY, expect_ident_text(parser)?)
        }
        Token::Delim('|') => (NamespaceId::NONE, expect_ident_text(parser)?),
        t => return Err(location.new_unexpected_token_error(t)),
    };

    let id = ctx
        .resolver
        .attribute_id(ns, &name, ci)
        .ok_or_else(|| parser.new_custom_error(Error::unresolved_name(&*name)))?;
    let local = if ci { name.to_ascii_lowercase() } else { name };
    let attr = AttrName {
        ns,
        id,
        local: local.into(),
    };

    parser.skip_whitespace();
    if parser.is_exhausted() {
        return Ok((attr, Match::AttributeSet, String::new()));
    }

    let location = parser.current_source_location();
    let op = match parser.next()?.clone() {
        Token::Delim('=') => Match::AttributeExact,
        Token::IncludeMatch => Match::AttributeList,
        Token::DashMatch => Match::AttributeHyphen,
        Token::PrefixMatch => Match::AttributeBegin,
        Token::SuffixMatch => Match::AttributeEnd,
        Token::SubstringMatch => Match::AttributeContain,
        t => return Err(location.new_unexpected_token_error(t)),
    };

    parser.skip_whitespace();
    let location = parser.current_source_location();
    let value = match parser.next()?.clone() {
        Token::Ident(s) | Token::QuotedString(s) => s.as_ref().to_owned(),
        t => return Err(location.new_unexpected_token_error(t)),
    };
    parser.skip_whitespace();
    parser.expect_exhausted()?;
    Ok((attr, op, value))
}

fn resolve_ns_prefix<'i>(
    parser: &Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    prefix: &str,
) -> Result<NamespaceId, ParseError<'i, Error>> {
    ctx.resolver
        .namespace_prefix(prefix)
        .ok_or_else(|| parser.new_custom_error(Error::unresolved_name(prefix)))
}

/// Parse the element-name part after a namespace bar: an ident or `*`.
fn parse_local_tag<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    ns: NamespaceId,
) -> Result<Selector, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next_including_whitespace()?.clone() {
        Token::Ident(name) => resolve_tag(parser, ctx, ns, name.as_ref()),
        Token::Delim('*') => Ok(Selector::new(TagName::any(ns))),
        t => Err(location.new_unexpected_token_error(t)),
    }
}

fn resolve_tag<'i>(
    parser: &Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    ns: NamespaceId,
    name: &str,
) -> Result<Selector, ParseError<'i, Error>> {
    let ci = ctx.case_insensitive_names;
    let id = ctx
        .resolver
        .element_id(ns, name, ci)
        .ok_or_else(|| parser.new_custom_error(Error::unresolved_name(name)))?;
    let local = if ci { name.to_ascii_lowercase() } else { name.to_owned() };
    Ok(Selector::new(TagName::named(ns, id, local)))
}

/// Resolve a well-known attribute (`id`, `class`) through the context.
fn known_attribute<'i>(
    parser: &Parser<'i, '_>,
    ctx: &ParserContext<'_>,
    name: &str,
) -> Result<AttrName, ParseError<'i, Error>> {
    let id = ctx
        .resolver
        .attribute_id(NamespaceId::NONE, name, ctx.case_insensitive_names)
        .ok_or_else(|| parser.new_custom_error(Error::unresolved_name(name)))?;
    Ok(AttrName {
        ns: NamespaceId::NONE,
        id,
        local: name.into(),
    })
}

/// Expect a `|` namespace separator with nothing (not even space) before it.
fn expect_ns_bar<'i>(parser: &mut Parser<'i, '_>) -> Result<(), BasicParseError<'i>> {
    let location = parser.current_source_location();
    match *parser.next_including_whitespace()? {
        Token::Delim('|') => Ok(()),
        ref t => Err(location.new_basic_unexpected_token_error(t.clone())),
    }
}

fn expect_colon_token<'i>(parser: &mut Parser<'i, '_>) -> Result<(), BasicParseError<'i>> {
    let location = parser.current_source_location();
    match *parser.next_including_whitespace()? {
        Token::Colon => Ok(()),
        ref t => Err(location.new_basic_unexpected_token_error(t.clone())),
    }
}

fn expect_ident_text<'i>(parser: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next_including_whitespace()?.clone() {
        Token::Ident(name) => Ok(name.as_ref().to_owned()),
        t => Err(location.new_unexpected_token_error(t)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse_list(css: &str) -> Vec<Selector> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parse_selector_list(&mut parser, &ParserContext::default())
    }

    fn parse_one(css: &str) -> Selector {
        let mut list = parse_list(css);
        assert_eq!(list.len(), 1, "expected exactly one selector for {css:?}");
        list.remove(0)
    }

    #[test]
    fn tag_selector() {
        let sel = parse_one("h1");
        assert!(!sel.tag.is_wildcard());
        assert_eq!(sel.tag.local.as_deref(), Some("h1"));
        assert_eq!(sel.match_op, Match::None);
        assert!(sel.next.is_none());
    }

    #[test]
    fn tag_names_fold_case_in_html() {
        let sel = parse_one("DIV");
        assert_eq!(sel.tag.local.as_deref(), Some("div"));
    }

    #[test]
    fn unknown_tag_fails_the_segment() {
        assert!(parse_list("blink-o-matic").is_empty());
    }

    #[test]
    fn compound_chains_via_sub_selector() {
        // `div#nav` is one compound: the id test merges onto the tag node.
        let sel = parse_one("div#nav");
        assert_eq!(sel.match_op, Match::Id);
        assert_eq!(sel.value, "nav");
        assert_eq!(sel.tag.local.as_deref(), Some("div"));

        // `#nav.item` needs a second node, linked with SubSelector.
        let sel = parse_one("#nav.item");
        assert_eq!(sel.match_op, Match::Class);
        assert_eq!(sel.relation, Relation::SubSelector);
        let next = sel.next.as_deref().unwrap();
        assert_eq!(next.match_op, Match::Id);
        assert_eq!(next.value, "nav");
    }

    #[test]
    fn combinators_set_relation_on_the_follower() {
        let sel = parse_one("ul > li");
        // Head is the subject `li`; its relation describes the link to `ul`.
        assert_eq!(sel.tag.local.as_deref(), Some("li"));
        assert_eq!(sel.relation, Relation::Child);
        let next = sel.next.as_deref().unwrap();
        assert_eq!(next.tag.local.as_deref(), Some("ul"));

        let sel = parse_one("h1 + p");
        assert_eq!(sel.relation, Relation::Sibling);

        let sel = parse_one("div p");
        assert_eq!(sel.relation, Relation::Descendant);
    }

    #[test]
    fn whitespace_only_matters_between_compounds() {
        // `div .item` is a descendant chain, `div.item` a compound.
        let descendant = parse_one("div .item");
        assert!(descendant.next.is_some());
        assert_eq!(descendant.relation, Relation::Descendant);

        let compound = parse_one("div.item");
        assert!(compound.next.is_none());
        assert_eq!(compound.match_op, Match::Class);
    }

    #[test]
    fn attribute_operators() {
        let cases = [
            ("a[href]", Match::AttributeSet, ""),
            ("a[href=x]", Match::AttributeExact, "x"),
            ("a[rel~=next]", Match::AttributeList, "next"),
            ("a[lang|=en]", Match::AttributeHyphen, "en"),
            ("a[href^=\"http\"]", Match::AttributeBegin, "http"),
            ("a[href$=\".pdf\"]", Match::AttributeEnd, ".pdf"),
            ("a[href*=\"://\"]", Match::AttributeContain, "://"),
        ];
        for (css, op, value) in cases {
            let sel = parse_one(css);
            assert_eq!(sel.match_op, op, "for {css:?}");
            assert_eq!(sel.value, value, "for {css:?}");
            assert!(sel.attr.is_some(), "for {css:?}");
        }
    }

    #[test]
    fn unknown_attribute_fails_the_segment() {
        assert!(parse_list("a[hyperlink]").is_empty());
    }

    #[test]
    fn unterminated_attribute_fails_the_segment() {
        assert!(parse_list("a[href=").is_empty());
        assert!(parse_list("a[").is_empty());
    }

    #[test]
    fn pseudo_classes() {
        let sel = parse_one("a:hover");
        assert_eq!(sel.match_op, Match::Pseudo);
        assert_eq!(sel.value, "hover");

        // Double-colon syntax folds into the same representation.
        let sel = parse_one("p::first-line");
        assert_eq!(sel.match_op, Match::Pseudo);
        assert_eq!(sel.value, "first-line");
    }

    #[test]
    fn functional_pseudo_takes_a_simple_selector_argument() {
        let sel = parse_one("li:not(.done)");
        assert_eq!(sel.match_op, Match::Pseudo);
        assert_eq!(sel.value, "not");
        let arg = sel.argument.as_deref().unwrap();
        assert_eq!(arg.match_op, Match::Class);
        assert_eq!(arg.value, "done");
    }

    #[test]
    fn list_drops_only_invalid_segments() {
        let list = parse_list("h1, bogus-tag, p");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].tag.local.as_deref(), Some("h1"));
        assert_eq!(list[1].tag.local.as_deref(), Some("p"));
    }

    #[test]
    fn commas_inside_groups_do_not_split() {
        // The comma inside the functional argument stays inside its segment;
        // the bad argument kills that segment but not its neighbor.
        let list = parse_list("p:lang(a, b), h1");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].tag.local.as_deref(), Some("h1"));
    }

    #[test]
    fn wildcard_selectors() {
        let sel = parse_one("*");
        assert!(sel.tag.is_wildcard());
        assert_eq!(sel.specificity(), 0);

        let sel = parse_one("*.note");
        assert_eq!(sel.match_op, Match::Class);
        assert_eq!(sel.specificity(), 10);
    }

    #[test]
    fn namespace_wildcard_prefix() {
        let sel = parse_one("*|h1");
        assert_eq!(sel.tag.ns, NamespaceId::ANY);
        assert_eq!(sel.tag.local.as_deref(), Some("h1"));

        // No declared prefixes in the HTML fallback context.
        assert!(parse_list("svg|circle").is_empty());
    }

    #[test]
    fn specificity_scenarios() {
        assert_eq!(parse_one("#id.class").specificity(), 110);
        assert_eq!(parse_one("a[href^=\"http\"]").specificity(), 11);
        assert_eq!(parse_one("div ul li.item a:hover").specificity(), 24);
        // An exact match on the id attribute scores like an id selector.
        assert_eq!(parse_one("p[id=\"x\"]").specificity(), 101);
        assert_eq!(parse_one("p[id~=\"x\"]").specificity(), 11);
    }

    #[test]
    fn serialization_reparses_to_the_same_specificity() {
        for css in ["#id.class", "ul > li + li.item", "a[href^=\"http\"]:visited"] {
            let sel = parse_one(css);
            let reparsed = parse_one(&sel.to_string());
            assert_eq!(sel.specificity(), reparsed.specificity(), "for {css:?}");
        }
    }
}
