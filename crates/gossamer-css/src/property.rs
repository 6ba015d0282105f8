//! The closed property table and per-property value-shape dispatch.
//!
//! Property ids are dense integers starting at 1; an unknown property name
//! maps to `None` and discards its declaration. The shape table drives the
//! value parser: which keyword set a property accepts, which unit classes,
//! and how shorthands expand into their longhand members.

use crate::value::{Keyword, UnitFlags};

macro_rules! properties {
    ($($variant:ident => $name:literal,)+) => {
        /// A property from the closed property-name table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum PropertyId {
            $($variant,)+
        }

        impl PropertyId {
            /// Case-insensitive lookup of a property name.
            pub fn from_name(name: &str) -> Option<Self> {
                let lower;
                let name = if name.bytes().any(|b| b.is_ascii_uppercase()) {
                    lower = name.to_ascii_lowercase();
                    lower.as_str()
                } else {
                    name
                };
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The canonical property name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

properties! {
    BackgroundAttachment => "background-attachment",
    BackgroundColor => "background-color",
    BackgroundImage => "background-image",
    BackgroundPosition => "background-position",
    BackgroundRepeat => "background-repeat",
    BorderBottomColor => "border-bottom-color",
    BorderBottomStyle => "border-bottom-style",
    BorderBottomWidth => "border-bottom-width",
    BorderCollapse => "border-collapse",
    BorderLeftColor => "border-left-color",
    BorderLeftStyle => "border-left-style",
    BorderLeftWidth => "border-left-width",
    BorderRightColor => "border-right-color",
    BorderRightStyle => "border-right-style",
    BorderRightWidth => "border-right-width",
    BorderSpacing => "border-spacing",
    BorderTopColor => "border-top-color",
    BorderTopStyle => "border-top-style",
    BorderTopWidth => "border-top-width",
    Bottom => "bottom",
    CaptionSide => "caption-side",
    Clear => "clear",
    Color => "color",
    Content => "content",
    CounterIncrement => "counter-increment",
    CounterReset => "counter-reset",
    Cursor => "cursor",
    Direction => "direction",
    Display => "display",
    Elevation => "elevation",
    EmptyCells => "empty-cells",
    Float => "float",
    FontFamily => "font-family",
    FontSize => "font-size",
    FontStyle => "font-style",
    FontVariant => "font-variant",
    FontWeight => "font-weight",
    Height => "height",
    Left => "left",
    LetterSpacing => "letter-spacing",
    LineHeight => "line-height",
    ListStyleImage => "list-style-image",
    ListStylePosition => "list-style-position",
    ListStyleType => "list-style-type",
    MarginBottom => "margin-bottom",
    MarginLeft => "margin-left",
    MarginRight => "margin-right",
    MarginTop => "margin-top",
    MaxHeight => "max-height",
    MaxWidth => "max-width",
    MinHeight => "min-height",
    MinWidth => "min-width",
    Opacity => "opacity",
    Orphans => "orphans",
    OutlineColor => "outline-color",
    OutlineStyle => "outline-style",
    OutlineWidth => "outline-width",
    Overflow => "overflow",
    PaddingBottom => "padding-bottom",
    PaddingLeft => "padding-left",
    PaddingRight => "padding-right",
    PaddingTop => "padding-top",
    PageBreakAfter => "page-break-after",
    PageBreakBefore => "page-break-before",
    PageBreakInside => "page-break-inside",
    PauseAfter => "pause-after",
    PauseBefore => "pause-before",
    Pitch => "pitch",
    Position => "position",
    Quotes => "quotes",
    Right => "right",
    SpeechRate => "speech-rate",
    TableLayout => "table-layout",
    TextAlign => "text-align",
    TextDecoration => "text-decoration",
    TextIndent => "text-indent",
    TextTransform => "text-transform",
    Top => "top",
    UnicodeBidi => "unicode-bidi",
    VerticalAlign => "vertical-align",
    Visibility => "visibility",
    Volume => "volume",
    WhiteSpace => "white-space",
    Widows => "widows",
    Width => "width",
    WordSpacing => "word-spacing",
    ZIndex => "z-index",
    // Shorthands
    Background => "background",
    Border => "border",
    BorderBottom => "border-bottom",
    BorderColor => "border-color",
    BorderLeft => "border-left",
    BorderRight => "border-right",
    BorderStyle => "border-style",
    BorderTop => "border-top",
    BorderWidth => "border-width",
    ListStyle => "list-style",
    Margin => "margin",
    Outline => "outline",
    Padding => "padding",
}

impl PropertyId {
    /// The dense numeric id (1-based; 0 is reserved for "unknown").
    pub fn id(self) -> u16 {
        self as u16 + 1
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a property's value text is parsed.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ValueShape {
    /// A closed identifier set and nothing else.
    Keywords(&'static [Keyword]),
    /// A closed identifier set, or a numeric value in the given unit classes.
    KeywordsOrUnits(&'static [Keyword], UnitFlags),
    /// A numeric value in the given unit classes.
    Units(UnitFlags),
    /// A color literal; `extra` lists non-color keywords also accepted.
    Color { extra: &'static [Keyword] },
    /// `none` or a `url(...)` value.
    Uri,
    /// Keyword or one of the nine hundred-step numeric weights.
    FontWeight,
    /// Comma-separated family names, quoted or as ident runs.
    FontFamily,
    /// `none` or a space-separated list of decoration keywords.
    TextDecoration,
    /// Strings, URIs, `attr()`/`counter()`, and quote keywords.
    Content,
    /// `none` or counter-name / optional-integer pairs.
    CounterPairs,
    /// `none` or pairs of strings.
    Quotes,
    /// One or two position components (keyword, length, or percentage).
    BackgroundPosition,
    /// Box-edge shorthand: expands over [top, right, bottom, left].
    BoxEdges(&'static [PropertyId; 4]),
    /// Member-sequence shorthand: each segment tries these ids in order.
    Sequence(&'static [PropertyId]),
}

const BORDER_STYLE_KEYWORDS: &[Keyword] = &[
    Keyword::None,
    Keyword::Hidden,
    Keyword::Dotted,
    Keyword::Dashed,
    Keyword::Solid,
    Keyword::Double,
    Keyword::Groove,
    Keyword::Ridge,
    Keyword::Inset,
    Keyword::Outset,
];

const BORDER_WIDTH_KEYWORDS: &[Keyword] = &[Keyword::Thin, Keyword::Medium, Keyword::Thick];

const DISPLAY_KEYWORDS: &[Keyword] = &[
    Keyword::Inline,
    Keyword::Block,
    Keyword::ListItem,
    Keyword::RunIn,
    Keyword::Compact,
    Keyword::Marker,
    Keyword::Table,
    Keyword::InlineTable,
    Keyword::TableRowGroup,
    Keyword::TableHeaderGroup,
    Keyword::TableFooterGroup,
    Keyword::TableRow,
    Keyword::TableColumnGroup,
    Keyword::TableColumn,
    Keyword::TableCell,
    Keyword::TableCaption,
    Keyword::None,
];

pub(crate) const LIST_STYLE_TYPE_KEYWORDS: &[Keyword] = &[
    Keyword::Disc,
    Keyword::Circle,
    Keyword::Square,
    Keyword::Decimal,
    Keyword::DecimalLeadingZero,
    Keyword::LowerRoman,
    Keyword::UpperRoman,
    Keyword::LowerGreek,
    Keyword::LowerAlpha,
    Keyword::LowerLatin,
    Keyword::UpperAlpha,
    Keyword::UpperLatin,
    Keyword::Hebrew,
    Keyword::Armenian,
    Keyword::Georgian,
    Keyword::None,
];

const CURSOR_KEYWORDS: &[Keyword] = &[
    Keyword::Auto,
    Keyword::Crosshair,
    Keyword::Default,
    Keyword::Pointer,
    Keyword::Move,
    Keyword::EResize,
    Keyword::NeResize,
    Keyword::NwResize,
    Keyword::NResize,
    Keyword::SeResize,
    Keyword::SwResize,
    Keyword::SResize,
    Keyword::WResize,
    Keyword::Text,
    Keyword::Wait,
    Keyword::Help,
];

const FONT_SIZE_KEYWORDS: &[Keyword] = &[
    Keyword::XxSmall,
    Keyword::XSmall,
    Keyword::Small,
    Keyword::Medium,
    Keyword::Large,
    Keyword::XLarge,
    Keyword::XxLarge,
    Keyword::Smaller,
    Keyword::Larger,
];

const VERTICAL_ALIGN_KEYWORDS: &[Keyword] = &[
    Keyword::Baseline,
    Keyword::Sub,
    Keyword::Super,
    Keyword::Top,
    Keyword::TextTop,
    Keyword::Middle,
    Keyword::Bottom,
    Keyword::TextBottom,
];

const PAGE_BREAK_KEYWORDS: &[Keyword] = &[
    Keyword::Auto,
    Keyword::Always,
    Keyword::Avoid,
    Keyword::Left,
    Keyword::Right,
];

pub(crate) const BACKGROUND_POSITION_KEYWORDS: &[Keyword] = &[
    Keyword::Left,
    Keyword::Right,
    Keyword::Top,
    Keyword::Bottom,
    Keyword::Center,
];

pub(crate) const TEXT_DECORATION_KEYWORDS: &[Keyword] = &[
    Keyword::Underline,
    Keyword::Overline,
    Keyword::LineThrough,
    Keyword::Blink,
];

const AUTO: &[Keyword] = &[Keyword::Auto];
const NONE: &[Keyword] = &[Keyword::None];
const NORMAL: &[Keyword] = &[Keyword::Normal];

const MARGIN_EDGES: [PropertyId; 4] = [
    PropertyId::MarginTop,
    PropertyId::MarginRight,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
];
const PADDING_EDGES: [PropertyId; 4] = [
    PropertyId::PaddingTop,
    PropertyId::PaddingRight,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
];
const BORDER_WIDTH_EDGES: [PropertyId; 4] = [
    PropertyId::BorderTopWidth,
    PropertyId::BorderRightWidth,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderLeftWidth,
];
const BORDER_STYLE_EDGES: [PropertyId; 4] = [
    PropertyId::BorderTopStyle,
    PropertyId::BorderRightStyle,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderLeftStyle,
];
const BORDER_COLOR_EDGES: [PropertyId; 4] = [
    PropertyId::BorderTopColor,
    PropertyId::BorderRightColor,
    PropertyId::BorderBottomColor,
    PropertyId::BorderLeftColor,
];

// Member order is significant: first match wins per segment.
const BORDER_MEMBERS: &[PropertyId] = &[
    PropertyId::BorderWidth,
    PropertyId::BorderStyle,
    PropertyId::BorderColor,
];
const BORDER_TOP_MEMBERS: &[PropertyId] = &[
    PropertyId::BorderTopWidth,
    PropertyId::BorderTopStyle,
    PropertyId::BorderTopColor,
];
const BORDER_RIGHT_MEMBERS: &[PropertyId] = &[
    PropertyId::BorderRightWidth,
    PropertyId::BorderRightStyle,
    PropertyId::BorderRightColor,
];
const BORDER_BOTTOM_MEMBERS: &[PropertyId] = &[
    PropertyId::BorderBottomWidth,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderBottomColor,
];
const BORDER_LEFT_MEMBERS: &[PropertyId] = &[
    PropertyId::BorderLeftWidth,
    PropertyId::BorderLeftStyle,
    PropertyId::BorderLeftColor,
];
// Position appears twice so `center center` style pairs consume both slots.
const BACKGROUND_MEMBERS: &[PropertyId] = &[
    PropertyId::BackgroundColor,
    PropertyId::BackgroundImage,
    PropertyId::BackgroundPosition,
    PropertyId::BackgroundRepeat,
    PropertyId::BackgroundAttachment,
    PropertyId::BackgroundPosition,
];
const OUTLINE_MEMBERS: &[PropertyId] = &[
    PropertyId::OutlineWidth,
    PropertyId::OutlineStyle,
    PropertyId::OutlineColor,
];
const LIST_STYLE_MEMBERS: &[PropertyId] = &[
    PropertyId::ListStyleType,
    PropertyId::ListStylePosition,
    PropertyId::ListStyleImage,
];

/// The value shape of a property.
pub(crate) fn value_shape(prop: PropertyId) -> ValueShape {
    use PropertyId as P;
    use ValueShape as S;

    const LP: UnitFlags = UnitFlags::LENGTH.union(UnitFlags::PERCENT);

    match prop {
        P::BackgroundAttachment => S::Keywords(&[Keyword::Scroll, Keyword::Fixed]),
        P::BackgroundColor | P::Color => S::Color { extra: &[] },
        P::BackgroundImage | P::ListStyleImage => S::Uri,
        P::BackgroundPosition => S::BackgroundPosition,
        P::BackgroundRepeat => S::Keywords(&[
            Keyword::Repeat,
            Keyword::RepeatX,
            Keyword::RepeatY,
            Keyword::NoRepeat,
        ]),
        P::BorderTopColor | P::BorderRightColor | P::BorderBottomColor | P::BorderLeftColor => {
            S::Color { extra: &[] }
        }
        P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle => {
            S::Keywords(BORDER_STYLE_KEYWORDS)
        }
        P::BorderTopWidth | P::BorderRightWidth | P::BorderBottomWidth | P::BorderLeftWidth => {
            S::KeywordsOrUnits(BORDER_WIDTH_KEYWORDS, UnitFlags::LENGTH)
        }
        P::BorderCollapse => S::Keywords(&[Keyword::Collapse, Keyword::Separate]),
        P::BorderSpacing => S::Units(UnitFlags::LENGTH),
        P::Bottom | P::Left | P::Right | P::Top => S::KeywordsOrUnits(AUTO, LP),
        P::CaptionSide => S::Keywords(&[
            Keyword::Top,
            Keyword::Bottom,
            Keyword::Left,
            Keyword::Right,
        ]),
        P::Clear => S::Keywords(&[Keyword::None, Keyword::Left, Keyword::Right, Keyword::Both]),
        P::Content => S::Content,
        P::CounterIncrement | P::CounterReset => S::CounterPairs,
        P::Cursor => S::Keywords(CURSOR_KEYWORDS),
        P::Direction => S::Keywords(&[Keyword::Ltr, Keyword::Rtl]),
        P::Display => S::Keywords(DISPLAY_KEYWORDS),
        P::Elevation => S::KeywordsOrUnits(
            &[
                Keyword::Below,
                Keyword::Level,
                Keyword::Above,
                Keyword::Higher,
                Keyword::Lower,
            ],
            UnitFlags::ANGLE,
        ),
        P::EmptyCells => S::Keywords(&[Keyword::Show, Keyword::Hide]),
        P::Float => S::Keywords(&[Keyword::Left, Keyword::Right, Keyword::None]),
        P::FontFamily => S::FontFamily,
        P::FontSize => S::KeywordsOrUnits(FONT_SIZE_KEYWORDS, LP),
        P::FontStyle => S::Keywords(&[Keyword::Normal, Keyword::Italic, Keyword::Oblique]),
        P::FontVariant => S::Keywords(&[Keyword::Normal, Keyword::SmallCaps]),
        P::FontWeight => S::FontWeight,
        P::Height | P::Width => S::KeywordsOrUnits(AUTO, LP),
        P::LetterSpacing | P::WordSpacing => S::KeywordsOrUnits(NORMAL, UnitFlags::LENGTH),
        P::LineHeight => S::KeywordsOrUnits(NORMAL, UnitFlags::NUMBER.union(LP)),
        P::ListStylePosition => S::Keywords(&[Keyword::Inside, Keyword::Outside]),
        P::ListStyleType => S::Keywords(LIST_STYLE_TYPE_KEYWORDS),
        P::MarginTop | P::MarginRight | P::MarginBottom | P::MarginLeft => {
            S::KeywordsOrUnits(AUTO, LP)
        }
        P::MaxHeight | P::MaxWidth => S::KeywordsOrUnits(NONE, LP),
        P::MinHeight | P::MinWidth => S::Units(LP),
        P::Opacity => S::Units(UnitFlags::NUMBER),
        P::Orphans | P::Widows => S::Units(UnitFlags::INTEGER),
        P::OutlineColor => S::Color {
            extra: &[Keyword::Invert],
        },
        P::OutlineStyle => S::Keywords(BORDER_STYLE_KEYWORDS),
        P::OutlineWidth => S::KeywordsOrUnits(BORDER_WIDTH_KEYWORDS, UnitFlags::LENGTH),
        P::Overflow => S::Keywords(&[
            Keyword::Visible,
            Keyword::Hidden,
            Keyword::Scroll,
            Keyword::Auto,
        ]),
        P::PaddingTop | P::PaddingRight | P::PaddingBottom | P::PaddingLeft | P::TextIndent => {
            S::Units(LP)
        }
        P::PageBreakAfter | P::PageBreakBefore => S::Keywords(PAGE_BREAK_KEYWORDS),
        P::PageBreakInside => S::Keywords(&[Keyword::Auto, Keyword::Avoid]),
        P::PauseAfter | P::PauseBefore => S::Units(UnitFlags::TIME.union(UnitFlags::PERCENT)),
        P::Pitch => S::KeywordsOrUnits(
            &[
                Keyword::XLow,
                Keyword::Low,
                Keyword::Medium,
                Keyword::High,
                Keyword::XHigh,
            ],
            UnitFlags::FREQUENCY,
        ),
        P::Position => S::Keywords(&[
            Keyword::Static,
            Keyword::Relative,
            Keyword::Absolute,
            Keyword::Fixed,
        ]),
        P::Quotes => S::Quotes,
        P::SpeechRate => S::KeywordsOrUnits(
            &[
                Keyword::XSlow,
                Keyword::Slow,
                Keyword::Medium,
                Keyword::Fast,
                Keyword::XFast,
                Keyword::Faster,
                Keyword::Slower,
            ],
            UnitFlags::NUMBER,
        ),
        P::TableLayout => S::Keywords(&[Keyword::Auto, Keyword::Fixed]),
        P::TextAlign => S::Keywords(&[
            Keyword::Left,
            Keyword::Right,
            Keyword::Center,
            Keyword::Justify,
        ]),
        P::TextDecoration => S::TextDecoration,
        P::TextTransform => S::Keywords(&[
            Keyword::Capitalize,
            Keyword::Uppercase,
            Keyword::Lowercase,
            Keyword::None,
        ]),
        P::UnicodeBidi => S::Keywords(&[Keyword::Normal, Keyword::Embed, Keyword::BidiOverride]),
        P::VerticalAlign => S::KeywordsOrUnits(VERTICAL_ALIGN_KEYWORDS, LP),
        P::Visibility => S::Keywords(&[Keyword::Visible, Keyword::Hidden, Keyword::Collapse]),
        P::Volume => S::KeywordsOrUnits(
            &[
                Keyword::Silent,
                Keyword::XSoft,
                Keyword::Soft,
                Keyword::Medium,
                Keyword::Loud,
                Keyword::XLoud,
            ],
            UnitFlags::NUMBER.union(UnitFlags::PERCENT),
        ),
        P::WhiteSpace => S::Keywords(&[Keyword::Normal, Keyword::Pre, Keyword::Nowrap]),
        P::ZIndex => S::KeywordsOrUnits(AUTO, UnitFlags::INTEGER),

        // Shorthands
        P::Background => S::Sequence(BACKGROUND_MEMBERS),
        P::Border => S::Sequence(BORDER_MEMBERS),
        P::BorderTop => S::Sequence(BORDER_TOP_MEMBERS),
        P::BorderRight => S::Sequence(BORDER_RIGHT_MEMBERS),
        P::BorderBottom => S::Sequence(BORDER_BOTTOM_MEMBERS),
        P::BorderLeft => S::Sequence(BORDER_LEFT_MEMBERS),
        P::BorderColor => S::BoxEdges(&BORDER_COLOR_EDGES),
        P::BorderStyle => S::BoxEdges(&BORDER_STYLE_EDGES),
        P::BorderWidth => S::BoxEdges(&BORDER_WIDTH_EDGES),
        P::ListStyle => S::Sequence(LIST_STYLE_MEMBERS),
        P::Margin => S::BoxEdges(&MARGIN_EDGES),
        P::Outline => S::Sequence(OUTLINE_MEMBERS),
        P::Padding => S::BoxEdges(&PADDING_EDGES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for prop in [
            PropertyId::BackgroundAttachment,
            PropertyId::BorderTopWidth,
            PropertyId::ZIndex,
            PropertyId::Padding,
        ] {
            assert_eq!(PropertyId::from_name(prop.name()), Some(prop));
        }
    }

    #[test]
    fn ids_are_dense_and_one_based() {
        assert_eq!(PropertyId::BackgroundAttachment.id(), 1);
        assert_eq!(
            PropertyId::Padding.id(),
            PropertyId::ListStyle.id() + 3,
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            PropertyId::from_name("Border-Top-Width"),
            Some(PropertyId::BorderTopWidth)
        );
        assert_eq!(PropertyId::from_name("bogus-prop"), None);
    }

    #[test]
    fn border_members_try_width_then_style_then_color() {
        let ValueShape::Sequence(members) = value_shape(PropertyId::Border) else {
            panic!("border must be a member-sequence shorthand");
        };
        assert_eq!(
            members,
            &[
                PropertyId::BorderWidth,
                PropertyId::BorderStyle,
                PropertyId::BorderColor
            ]
        );
    }

    #[test]
    fn box_edges_are_in_top_right_bottom_left_order() {
        let ValueShape::BoxEdges(edges) = value_shape(PropertyId::Margin) else {
            panic!("margin must be a box-edge shorthand");
        };
        assert_eq!(
            edges,
            &[
                PropertyId::MarginTop,
                PropertyId::MarginRight,
                PropertyId::MarginBottom,
                PropertyId::MarginLeft
            ]
        );
    }
}
