//! Document name resolution.
//!
//! Selectors refer to element and attribute names; resolving those names to
//! numeric ids is the document model's job, not the parser's. The parser
//! only talks to the [`NameResolver`] trait. When no live document is
//! available (default stylesheets, tests), [`HtmlNames`] resolves against a
//! closed table of well-known HTML 4 names.

/// Numeric namespace identifier.
///
/// `NONE` is the null namespace (selector prefix `|name`), `ANY` matches
/// every namespace (prefix `*|name`, and the default for documents without
/// namespace declarations). Other values are document-assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(pub u32);

impl NamespaceId {
    /// The null namespace.
    pub const NONE: Self = Self(0);
    /// Wildcard: any namespace.
    pub const ANY: Self = Self(u32::MAX);
}

/// Numeric element-name identifier assigned by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u16);

/// Numeric attribute-name identifier assigned by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeId(pub u16);

/// Resolves selector name text to document-model identifiers.
///
/// Implemented by the document model; [`HtmlNames`] is the static fallback
/// used when no document context exists. Returning `None` fails the
/// enclosing selector segment.
pub trait NameResolver {
    /// Resolve a declared namespace prefix. The wildcard and empty prefixes
    /// never reach this method; the parser maps them to [`NamespaceId::ANY`]
    /// and [`NamespaceId::NONE`] itself.
    fn namespace_prefix(&self, prefix: &str) -> Option<NamespaceId>;

    /// The namespace applied to type selectors written without a prefix.
    fn default_namespace(&self) -> NamespaceId;

    /// Resolve an element name within a namespace.
    fn element_id(&self, ns: NamespaceId, name: &str, case_insensitive: bool)
    -> Option<ElementId>;

    /// Resolve an attribute name within a namespace.
    fn attribute_id(
        &self,
        ns: NamespaceId,
        name: &str,
        case_insensitive: bool,
    ) -> Option<AttributeId>;
}

/// Static fallback resolver over the well-known HTML 4 name tables.
///
/// Ids are dense (table index + 1) and stable for the lifetime of the
/// process; the tables are `const` data, safe to share between parsers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlNames;

/// Shared instance for contexts without a live document.
pub static HTML_NAMES: HtmlNames = HtmlNames;

// Sorted; looked up by binary search.
const ELEMENT_NAMES: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "b", "base", "basefont", "bdo", "big",
    "blockquote", "body", "br", "button", "caption", "center", "cite", "code", "col", "colgroup",
    "dd", "del", "dfn", "dir", "div", "dl", "dt", "em", "embed", "fieldset", "font", "form",
    "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "hr", "html", "i", "iframe",
    "img", "input", "ins", "isindex", "kbd", "label", "legend", "li", "link", "map", "menu",
    "meta", "noframes", "noscript", "object", "ol", "optgroup", "option", "p", "param", "pre",
    "q", "s", "samp", "script", "select", "small", "span", "strike", "strong", "style", "sub",
    "sup", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "title", "tr", "tt", "u",
    "ul", "var",
];

// Sorted; looked up by binary search.
const ATTRIBUTE_NAMES: &[&str] = &[
    "abbr", "accept", "accept-charset", "accesskey", "action", "align", "alink", "alt", "archive",
    "axis", "background", "bgcolor", "border", "cellpadding", "cellspacing", "char", "charoff",
    "charset", "checked", "cite", "class", "classid", "clear", "code", "codebase", "codetype",
    "color", "cols", "colspan", "compact", "content", "coords", "data", "datetime", "declare",
    "defer", "dir", "disabled", "enctype", "face", "for", "frame", "frameborder", "headers",
    "height", "href", "hreflang", "hspace", "http-equiv", "id", "ismap", "label", "lang",
    "language", "link", "longdesc", "marginheight", "marginwidth", "maxlength", "media", "method",
    "multiple", "name", "nohref", "noresize", "noshade", "nowrap", "object", "profile", "prompt",
    "readonly", "rel", "rev", "rows", "rowspan", "rules", "scheme", "scope", "scrolling",
    "selected", "shape", "size", "span", "src", "standby", "start", "style", "summary",
    "tabindex", "target", "text", "title", "type", "usemap", "valign", "value", "valuetype",
    "version", "vlink", "vspace", "width",
];

fn lookup(table: &[&str], name: &str, case_insensitive: bool) -> Option<u16> {
    let index = if case_insensitive && name.bytes().any(|b| b.is_ascii_uppercase()) {
        let lower = name.to_ascii_lowercase();
        table.binary_search(&lower.as_str()).ok()?
    } else {
        table.binary_search(&name).ok()?
    };
    Some(index as u16 + 1)
}

impl HtmlNames {
    /// Reverse mapping for element ids handed out by this resolver.
    pub fn element_name(id: ElementId) -> Option<&'static str> {
        ELEMENT_NAMES.get(id.0.checked_sub(1)? as usize).copied()
    }

    /// Reverse mapping for attribute ids handed out by this resolver.
    pub fn attribute_name(id: AttributeId) -> Option<&'static str> {
        ATTRIBUTE_NAMES.get(id.0.checked_sub(1)? as usize).copied()
    }
}

impl NameResolver for HtmlNames {
    fn namespace_prefix(&self, _prefix: &str) -> Option<NamespaceId> {
        // HTML documents declare no namespace prefixes.
        None
    }

    fn default_namespace(&self) -> NamespaceId {
        NamespaceId::ANY
    }

    fn element_id(
        &self,
        ns: NamespaceId,
        name: &str,
        case_insensitive: bool,
    ) -> Option<ElementId> {
        if ns != NamespaceId::ANY && ns != NamespaceId::NONE {
            return None;
        }
        lookup(ELEMENT_NAMES, name, case_insensitive).map(ElementId)
    }

    fn attribute_id(
        &self,
        ns: NamespaceId,
        name: &str,
        case_insensitive: bool,
    ) -> Option<AttributeId> {
        if ns != NamespaceId::ANY && ns != NamespaceId::NONE {
            return None;
        }
        lookup(ATTRIBUTE_NAMES, name, case_insensitive).map(AttributeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(ELEMENT_NAMES.windows(2).all(|w| w[0] < w[1]));
        assert!(ATTRIBUTE_NAMES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn element_lookup() {
        let div = HTML_NAMES
            .element_id(NamespaceId::ANY, "div", true)
            .unwrap();
        assert_eq!(HtmlNames::element_name(div), Some("div"));

        // Case-insensitive resolution for HTML documents.
        assert_eq!(HTML_NAMES.element_id(NamespaceId::ANY, "DIV", true), Some(div));
        // Case-sensitive resolution rejects the uppercase form.
        assert_eq!(HTML_NAMES.element_id(NamespaceId::ANY, "DIV", false), None);

        assert_eq!(HTML_NAMES.element_id(NamespaceId::ANY, "bogus", true), None);
    }

    #[test]
    fn attribute_lookup() {
        let id = HTML_NAMES
            .attribute_id(NamespaceId::NONE, "id", true)
            .unwrap();
        let class = HTML_NAMES
            .attribute_id(NamespaceId::NONE, "class", true)
            .unwrap();
        assert_ne!(id, class);
        assert_eq!(HtmlNames::attribute_name(class), Some("class"));
    }
}
