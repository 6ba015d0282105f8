//! The closed CSS value-keyword table.
//!
//! One variant per identifier that can appear as a property value. Which
//! keywords a given property accepts is decided by the property table, not
//! here; this is only the name <-> id mapping.

macro_rules! keywords {
    ($($variant:ident => $name:literal,)+) => {
        /// An identifier from the closed value-keyword table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)+
        }

        impl Keyword {
            /// Case-insensitive lookup of an identifier.
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

            /// The canonical (lowercase) spelling.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

keywords! {
    // Shared
    Auto => "auto",
    None => "none",
    Normal => "normal",
    Medium => "medium",
    Hidden => "hidden",
    Visible => "visible",
    Left => "left",
    Right => "right",
    Top => "top",
    Bottom => "bottom",
    Center => "center",
    Both => "both",
    Fixed => "fixed",
    Scroll => "scroll",
    Collapse => "collapse",
    // Border and outline widths
    Thin => "thin",
    Thick => "thick",
    // Border and outline styles
    Dotted => "dotted",
    Dashed => "dashed",
    Solid => "solid",
    Double => "double",
    Groove => "groove",
    Ridge => "ridge",
    Inset => "inset",
    Outset => "outset",
    // Color sentinels
    Transparent => "transparent",
    Invert => "invert",
    // display
    Inline => "inline",
    Block => "block",
    ListItem => "list-item",
    RunIn => "run-in",
    Compact => "compact",
    Marker => "marker",
    Table => "table",
    InlineTable => "inline-table",
    TableRowGroup => "table-row-group",
    TableHeaderGroup => "table-header-group",
    TableFooterGroup => "table-footer-group",
    TableRow => "table-row",
    TableColumnGroup => "table-column-group",
    TableColumn => "table-column",
    TableCell => "table-cell",
    TableCaption => "table-caption",
    // position
    Static => "static",
    Relative => "relative",
    Absolute => "absolute",
    // white-space
    Pre => "pre",
    Nowrap => "nowrap",
    // direction, unicode-bidi
    Ltr => "ltr",
    Rtl => "rtl",
    Embed => "embed",
    BidiOverride => "bidi-override",
    // text-align
    Justify => "justify",
    // text-transform
    Capitalize => "capitalize",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    // text-decoration
    Underline => "underline",
    Overline => "overline",
    LineThrough => "line-through",
    Blink => "blink",
    // font-style, font-variant
    Italic => "italic",
    Oblique => "oblique",
    SmallCaps => "small-caps",
    // font-weight
    Bold => "bold",
    Bolder => "bolder",
    Lighter => "lighter",
    // font-size
    XxSmall => "xx-small",
    XSmall => "x-small",
    Small => "small",
    Large => "large",
    XLarge => "x-large",
    XxLarge => "xx-large",
    Smaller => "smaller",
    Larger => "larger",
    // background-repeat
    Repeat => "repeat",
    RepeatX => "repeat-x",
    RepeatY => "repeat-y",
    NoRepeat => "no-repeat",
    // border-collapse
    Separate => "separate",
    // empty-cells
    Show => "show",
    Hide => "hide",
    // list-style-type
    Disc => "disc",
    Circle => "circle",
    Square => "square",
    Decimal => "decimal",
    DecimalLeadingZero => "decimal-leading-zero",
    LowerRoman => "lower-roman",
    UpperRoman => "upper-roman",
    LowerGreek => "lower-greek",
    LowerAlpha => "lower-alpha",
    LowerLatin => "lower-latin",
    UpperAlpha => "upper-alpha",
    UpperLatin => "upper-latin",
    Hebrew => "hebrew",
    Armenian => "armenian",
    Georgian => "georgian",
    // list-style-position
    Inside => "inside",
    Outside => "outside",
    // page-break-*
    Always => "always",
    Avoid => "avoid",
    // vertical-align
    Baseline => "baseline",
    Sub => "sub",
    Super => "super",
    TextTop => "text-top",
    TextBottom => "text-bottom",
    Middle => "middle",
    // cursor
    Crosshair => "crosshair",
    Default => "default",
    Pointer => "pointer",
    Move => "move",
    EResize => "e-resize",
    NeResize => "ne-resize",
    NwResize => "nw-resize",
    NResize => "n-resize",
    SeResize => "se-resize",
    SwResize => "sw-resize",
    SResize => "s-resize",
    WResize => "w-resize",
    Text => "text",
    Wait => "wait",
    Help => "help",
    // content
    OpenQuote => "open-quote",
    CloseQuote => "close-quote",
    NoOpenQuote => "no-open-quote",
    NoCloseQuote => "no-close-quote",
    // elevation
    Below => "below",
    Level => "level",
    Above => "above",
    Higher => "higher",
    Lower => "lower",
    // pitch
    XLow => "x-low",
    Low => "low",
    High => "high",
    XHigh => "x-high",
    // volume
    Silent => "silent",
    XSoft => "x-soft",
    Soft => "soft",
    Loud => "loud",
    XLoud => "x-loud",
    // speech-rate
    XSlow => "x-slow",
    Slow => "slow",
    Fast => "fast",
    XFast => "x-fast",
    Faster => "faster",
    Slower => "slower",
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
