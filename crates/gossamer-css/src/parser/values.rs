//! Property-value parsing and shorthand expansion.
//!
//! `parse_property_value` consumes a declaration's whole value text and
//! appends one declaration (or several, for a shorthand) to the caller's
//! list. Everything below it parses exactly one component value, so the
//! shorthand machinery can probe with `try_parse`.

use cssparser::{ParseError, Parser, Token};

use crate::error::Error;
use crate::property::{
    BACKGROUND_POSITION_KEYWORDS, LIST_STYLE_TYPE_KEYWORDS, PropertyId, TEXT_DECORATION_KEYWORDS,
    ValueShape, value_shape,
};
use crate::rules::Declaration;
use crate::value::{
    Color, FunctionValue, Keyword, ListSeparator, Unit, UnitFlags, Value, ValueList,
};

/// Parse the full value of one declaration and stage the results.
pub(crate) fn parse_property_value<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    out: &mut Vec<Declaration>,
) -> Result<(), ParseError<'i, Error>> {
    parser.skip_whitespace();
    if parser.is_exhausted() {
        return Err(parser.new_custom_error(Error::invalid_value(property.name(), "empty value")));
    }

    // `inherit` as the entire value is legal for every property, including
    // shorthands, and produces a single declaration.
    if parser
        .try_parse(|p| {
            p.expect_ident_matching("inherit")?;
            p.expect_exhausted()
        })
        .is_ok()
    {
        out.push(Declaration::new(property, Value::Inherit));
        return Ok(());
    }

    let value = match value_shape(property) {
        ValueShape::BoxEdges(edges) => {
            return parse_box_shorthand(parser, property, edges, out);
        }
        ValueShape::Sequence(members) => {
            return parse_sequence_shorthand(parser, property, members, out);
        }
        ValueShape::FontFamily => parse_font_family(parser)?,
        ValueShape::TextDecoration => parse_text_decoration(parser, property)?,
        ValueShape::Content => parse_content(parser, property)?,
        ValueShape::CounterPairs => parse_counter_pairs(parser)?,
        ValueShape::Quotes => parse_quotes(parser, property)?,
        ValueShape::BackgroundPosition => parse_background_position(parser, property)?,
        _ => parse_single_component(parser, property)?,
    };
    parser.skip_whitespace();
    parser.expect_exhausted()?;

    out.push(Declaration::new(property, value));
    Ok(())
}

/// Parse exactly one component value of a non-list, non-shorthand property.
fn parse_single_component<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    match value_shape(property) {
        ValueShape::Keywords(set) => parse_keyword_from(parser, property, set),
        ValueShape::KeywordsOrUnits(set, units) => {
            match parser.try_parse(|p| parse_keyword_from(p, property, set)) {
                Ok(value) => Ok(value),
                Err(_) => parse_numeric(parser, property, units),
            }
        }
        ValueShape::Units(units) => parse_numeric(parser, property, units),
        ValueShape::Color { extra } => parse_color_value(parser, property, extra),
        ValueShape::Uri => parse_uri_value(parser),
        ValueShape::FontWeight => parse_font_weight(parser, property),
        ValueShape::BackgroundPosition => parse_position_component(parser, property),
        _ => Err(parser.new_custom_error(Error::invalid_value(
            property.name(),
            "expected a single component value",
        ))),
    }
}

/// Box-edge shorthand: 1-4 components distributed over top/right/bottom/left.
fn parse_box_shorthand<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    edges: &[PropertyId; 4],
    out: &mut Vec<Declaration>,
) -> Result<(), ParseError<'i, Error>> {
    let mut components = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        if components.len() == 4 {
            return Err(parser
                .new_custom_error(Error::invalid_value(property.name(), "too many components")));
        }
        // All four edges share one value shape; the top edge stands in.
        components.push(parse_single_component(parser, edges[0])?);
    }

    let spread: [usize; 4] = match components.len() {
        1 => [0, 0, 0, 0],
        2 => [0, 1, 0, 1],
        3 => [0, 1, 2, 1],
        4 => [0, 1, 2, 3],
        _ => {
            return Err(parser
                .new_custom_error(Error::invalid_value(property.name(), "empty value")));
        }
    };
    for (&edge, index) in edges.iter().zip(spread) {
        out.push(Declaration::new(edge, components[index].clone()));
    }
    Ok(())
}

/// Member-sequence shorthand: each whitespace-separated component tries the
/// member properties in table order; the first that accepts it wins. A
/// component no member accepts fails the whole declaration.
fn parse_sequence_shorthand<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    members: &[PropertyId],
    out: &mut Vec<Declaration>,
) -> Result<(), ParseError<'i, Error>> {
    let mut staged = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let matched = members
            .iter()
            .any(|&member| try_member(parser, member, &mut staged));
        if !matched {
            return Err(parser.new_custom_error(Error::invalid_value(
                property.name(),
                "component matches no member property",
            )));
        }
    }
    if staged.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_value(property.name(), "empty value")));
    }
    out.append(&mut staged);
    Ok(())
}

/// Probe one shorthand member against the next component. A member that is
/// itself a box-edge shorthand (`border-width` inside `border`) applies the
/// component to all four edges.
fn try_member<'i>(
    parser: &mut Parser<'i, '_>,
    member: PropertyId,
    staged: &mut Vec<Declaration>,
) -> bool {
    parser
        .try_parse(|p| -> Result<(), ParseError<'i, Error>> {
            match value_shape(member) {
                ValueShape::BoxEdges(edges) => {
                    let value = parse_single_component(p, edges[0])?;
                    for &edge in edges {
                        staged.push(Declaration::new(edge, value.clone()));
                    }
                }
                _ => {
                    let value = parse_single_component(p, member)?;
                    staged.push(Declaration::new(member, value));
                }
            }
            Ok(())
        })
        .is_ok()
}

/// Parse an identifier belonging to the given keyword set.
fn parse_keyword_from<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    set: &[Keyword],
) -> Result<Value, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    let ident = parser.expect_ident_cloned()?;
    match Keyword::from_name(&ident) {
        Some(keyword) if set.contains(&keyword) => Ok(Value::Keyword(keyword)),
        _ => Err(location.new_custom_error(Error::invalid_value(
            property.name(),
            format!("unexpected identifier '{}'", ident),
        ))),
    }
}

/// Parse a numeric value against the property's allowed unit classes.
///
/// A unit-less non-zero number is valid only where NUMBER (or INTEGER, for
/// integral values) is allowed; a unit-less zero is always a valid zero
/// length for LENGTH-accepting properties.
fn parse_numeric<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    allowed: UnitFlags,
) -> Result<Value, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number {
            value, int_value, ..
        } => {
            if allowed.contains(UnitFlags::NUMBER) {
                Ok(Value::numeric(value, Unit::Number))
            } else if allowed.contains(UnitFlags::INTEGER) && int_value.is_some() {
                Ok(Value::numeric(value, Unit::Integer))
            } else if allowed.contains(UnitFlags::LENGTH) && value == 0.0 {
                Ok(Value::numeric(0.0, Unit::Unknown))
            } else {
                Err(location.new_custom_error(Error::invalid_value(
                    property.name(),
                    "unit-less number not allowed here",
                )))
            }
        }
        Token::Percentage { unit_value, .. } => {
            if allowed.contains(UnitFlags::PERCENT) {
                Ok(Value::numeric(unit_value * 100.0, Unit::Percentage))
            } else {
                Err(location.new_custom_error(Error::invalid_value(
                    property.name(),
                    "percentage not allowed here",
                )))
            }
        }
        Token::Dimension { value, unit, .. } => {
            let unit = Unit::from_suffix(&unit).ok_or_else(|| {
                location.new_custom_error(Error::invalid_value(
                    property.name(),
                    format!("unknown unit '{}'", unit),
                ))
            })?;
            if allowed.intersects(unit.class()) {
                Ok(Value::numeric(value, unit))
            } else {
                Err(location.new_custom_error(Error::invalid_value(
                    property.name(),
                    format!("unit '{}' not allowed here", unit.suffix()),
                )))
            }
        }
        t => Err(location.new_unexpected_token_error(t)),
    }
}

/// Parse a color: named, `#hex`, or `rgb(...)`. `extra` lists non-color
/// keywords the property also accepts (`invert` for outline-color).
fn parse_color_value<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
    extra: &[Keyword],
) -> Result<Value, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Hash(hex) | Token::IDHash(hex) => {
            Color::from_hex(&hex).map(Value::Color).ok_or_else(|| {
                location.new_custom_error(Error::invalid_value(
                    property.name(),
                    format!("invalid hex color '#{}'", hex),
                ))
            })
        }
        Token::Ident(name) => {
            if let Some(keyword) = Keyword::from_name(&name)
                && extra.contains(&keyword)
            {
                return Ok(Value::Keyword(keyword));
            }
            Color::from_name(&name).map(Value::Color).ok_or_else(|| {
                location.new_custom_error(Error::invalid_value(
                    property.name(),
                    format!("unknown color '{}'", name),
                ))
            })
        }
        Token::Function(name) if name.eq_ignore_ascii_case("rgb") => {
            let (r, g, b) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                p.expect_exhausted()?;
                Ok::<_, ParseError<'i, Error>>((r, g, b))
            })?;
            Ok(Value::Color(Color::rgb(r, g, b)))
        }
        t => Err(location.new_unexpected_token_error(t)),
    }
}

/// One `rgb()` component: a number 0-255 or a percentage.
fn parse_color_component<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value.round().clamp(0.0, 255.0) as u8),
        Token::Percentage { unit_value, .. } => {
            Ok((unit_value * 255.0).round().clamp(0.0, 255.0) as u8)
        }
        t => Err(location.new_unexpected_token_error(t)),
    }
}

/// `none` or a `url(...)` value. The URL is passed through unresolved.
fn parse_uri_value<'i>(parser: &mut Parser<'i, '_>) -> Result<Value, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Ident(name) if name.eq_ignore_ascii_case("none") => {
            Ok(Value::Keyword(Keyword::None))
        }
        Token::UnquotedUrl(url) => Ok(Value::Uri(url.as_ref().trim().to_owned())),
        Token::Function(name) if name.eq_ignore_ascii_case("url") => {
            let url = parser.parse_nested_block(|p| {
                let url = p.expect_string()?.as_ref().trim().to_owned();
                p.expect_exhausted()?;
                Ok::<_, ParseError<'i, Error>>(url)
            })?;
            Ok(Value::Uri(url))
        }
        t => Err(location.new_unexpected_token_error(t)),
    }
}

/// `normal | bold | bolder | lighter` or one of the nine hundred-steps.
fn parse_font_weight<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Ident(name) => match Keyword::from_name(&name) {
            Some(
                keyword @ (Keyword::Normal | Keyword::Bold | Keyword::Bolder | Keyword::Lighter),
            ) => Ok(Value::Keyword(keyword)),
            _ => Err(location.new_custom_error(Error::invalid_value(
                property.name(),
                format!("unexpected identifier '{}'", name),
            ))),
        },
        Token::Number {
            int_value: Some(n), ..
        } if (100..=900).contains(&n) && n % 100 == 0 => {
            Ok(Value::numeric(n as f32, Unit::Integer))
        }
        t => Err(location.new_unexpected_token_error(t)),
    }
}

/// One background-position component: an edge keyword, length, or percent.
fn parse_position_component<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    match parser.try_parse(|p| parse_keyword_from(p, property, BACKGROUND_POSITION_KEYWORDS)) {
        Ok(value) => Ok(value),
        Err(_) => parse_numeric(
            parser,
            property,
            UnitFlags::LENGTH | UnitFlags::PERCENT,
        ),
    }
}

/// The standalone `background-position` value: one or two components.
fn parse_background_position<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    let first = parse_position_component(parser, property)?;
    parser.skip_whitespace();
    if parser.is_exhausted() {
        return Ok(first);
    }
    let second = parse_position_component(parser, property)?;
    Ok(Value::List(ValueList {
        values: vec![first, second],
        separator: ListSeparator::Space,
    }))
}

/// Comma-separated font families; unquoted multi-word names are joined.
fn parse_font_family<'i>(parser: &mut Parser<'i, '_>) -> Result<Value, ParseError<'i, Error>> {
    let mut families = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let location = parser.current_source_location();
        match parser.next()?.clone() {
            Token::QuotedString(name) => families.push(Value::String(name.as_ref().to_owned())),
            Token::Ident(first) => {
                let mut name = first.as_ref().to_owned();
                while let Ok(word) = parser.try_parse(|p| p.expect_ident_cloned()) {
                    name.push(' ');
                    name.push_str(&word);
                }
                families.push(Value::String(name));
            }
            t => return Err(location.new_unexpected_token_error(t)),
        }
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        parser.expect_comma()?;
    }
    if families.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_value("font-family", "empty list")));
    }
    Ok(Value::List(ValueList {
        values: families,
        separator: ListSeparator::Comma,
    }))
}

/// `none`, or a space-separated list of decoration keywords.
fn parse_text_decoration<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    if parser
        .try_parse(|p| {
            p.expect_ident_matching("none")?;
            p.expect_exhausted()
        })
        .is_ok()
    {
        return Ok(Value::Keyword(Keyword::None));
    }
    let mut decorations = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        decorations.push(parse_keyword_from(parser, property, TEXT_DECORATION_KEYWORDS)?);
    }
    if decorations.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_value(property.name(), "empty list")));
    }
    Ok(Value::List(ValueList {
        values: decorations,
        separator: ListSeparator::Space,
    }))
}

/// `normal | none`, or a list of strings, URIs, `attr()`, `counter()`, and
/// quote keywords.
fn parse_content<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    if let Ok(value) = parser.try_parse(|p| -> Result<Value, ParseError<'i, Error>> {
        let value = parse_keyword_from(p, property, &[Keyword::Normal, Keyword::None])?;
        p.expect_exhausted()?;
        Ok(value)
    }) {
        return Ok(value);
    }

    let mut parts = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let location = parser.current_source_location();
        match parser.next()?.clone() {
            Token::QuotedString(s) => parts.push(Value::String(s.as_ref().to_owned())),
            Token::UnquotedUrl(url) => parts.push(Value::Uri(url.as_ref().trim().to_owned())),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                let url = parser.parse_nested_block(|p| {
                    let url = p.expect_string()?.as_ref().trim().to_owned();
                    p.expect_exhausted()?;
                    Ok::<_, ParseError<'i, Error>>(url)
                })?;
                parts.push(Value::Uri(url));
            }
            Token::Function(name) if name.eq_ignore_ascii_case("attr") => {
                let attribute = parser.parse_nested_block(|p| {
                    let attribute = p.expect_ident_cloned()?.as_ref().to_owned();
                    p.expect_exhausted()?;
                    Ok::<_, ParseError<'i, Error>>(attribute)
                })?;
                parts.push(Value::Function(FunctionValue {
                    name: "attr".to_owned(),
                    args: vec![Value::String(attribute)],
                }));
            }
            Token::Function(name) if name.eq_ignore_ascii_case("counter") => {
                let args = parser.parse_nested_block(|p| {
                    let counter = p.expect_ident_cloned()?.as_ref().to_owned();
                    let mut args = vec![Value::String(counter)];
                    if p.try_parse(|p| p.expect_comma()).is_ok() {
                        args.push(parse_keyword_from(p, property, LIST_STYLE_TYPE_KEYWORDS)?);
                    }
                    p.expect_exhausted()?;
                    Ok::<_, ParseError<'i, Error>>(args)
                })?;
                parts.push(Value::Function(FunctionValue {
                    name: "counter".to_owned(),
                    args,
                }));
            }
            Token::Ident(name) => match Keyword::from_name(&name) {
                Some(
                    keyword @ (Keyword::OpenQuote
                    | Keyword::CloseQuote
                    | Keyword::NoOpenQuote
                    | Keyword::NoCloseQuote),
                ) => parts.push(Value::Keyword(keyword)),
                _ => {
                    return Err(location.new_custom_error(Error::invalid_value(
                        property.name(),
                        format!("unexpected identifier '{}'", name),
                    )));
                }
            },
            t => return Err(location.new_unexpected_token_error(t)),
        }
    }
    if parts.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_value(property.name(), "empty list")));
    }
    Ok(Value::List(ValueList {
        values: parts,
        separator: ListSeparator::Space,
    }))
}

/// `none`, or counter names each with an optional integer.
fn parse_counter_pairs<'i>(parser: &mut Parser<'i, '_>) -> Result<Value, ParseError<'i, Error>> {
    if parser
        .try_parse(|p| {
            p.expect_ident_matching("none")?;
            p.expect_exhausted()
        })
        .is_ok()
    {
        return Ok(Value::Keyword(Keyword::None));
    }
    let mut items = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let counter = parser.expect_ident_cloned()?.as_ref().to_owned();
        items.push(Value::String(counter));
        if let Ok(delta) = parser.try_parse(|p| p.expect_integer()) {
            items.push(Value::numeric(delta as f32, Unit::Integer));
        }
    }
    if items.is_empty() {
        return Err(parser.new_custom_error(Error::invalid_value("counter", "empty list")));
    }
    Ok(Value::List(ValueList {
        values: items,
        separator: ListSeparator::Space,
    }))
}

/// `none`, or a non-empty even-length list of quote strings.
fn parse_quotes<'i>(
    parser: &mut Parser<'i, '_>,
    property: PropertyId,
) -> Result<Value, ParseError<'i, Error>> {
    if parser
        .try_parse(|p| {
            p.expect_ident_matching("none")?;
            p.expect_exhausted()
        })
        .is_ok()
    {
        return Ok(Value::Keyword(Keyword::None));
    }
    let mut strings = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        strings.push(Value::String(parser.expect_string()?.as_ref().to_owned()));
    }
    if strings.is_empty() || strings.len() % 2 != 0 {
        return Err(parser.new_custom_error(Error::invalid_value(
            property.name(),
            "quote marks come in pairs",
        )));
    }
    Ok(Value::List(ValueList {
        values: strings,
        separator: ListSeparator::Space,
    }))
}
