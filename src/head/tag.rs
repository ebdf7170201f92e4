//! Head tag descriptors.

use serde::{Deserialize, Serialize};

use super::Attrs;

/// One markup element in the document head.
///
/// Wire names follow the host payload convention (`tagName`, `attributes`,
/// `closeTag`, `innerHTML`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Element name (`link`, `script`, `meta`, ...).
    #[serde(rename = "tagName")]
    pub name: String,
    /// Attribute mapping, insertion-ordered.
    #[serde(rename = "attributes", skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    /// Whether the element is rendered with a closing tag.
    #[serde(rename = "closeTag")]
    pub close_tag: bool,
    /// Literal inner markup, rendered unescaped by the host.
    #[serde(rename = "innerHTML", skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
}

impl Tag {
    /// Empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// `<noscript>` wrapper around literal inner markup.
    pub fn noscript(inner_html: impl Into<String>) -> Self {
        Self {
            name: "noscript".into(),
            attrs: Attrs::new(),
            close_tag: true,
            inner_html: Some(inner_html.into()),
        }
    }

    /// Inline `<script>` carrying literal source text.
    pub fn inline_script(source: impl Into<String>) -> Self {
        Self {
            name: "script".into(),
            attrs: Attrs::from_iter([("type", "text/javascript")]),
            close_tag: true,
            inner_html: Some(source.into()),
        }
    }

    /// Whether this tag is a blocking stylesheet link.
    pub fn is_blocking_stylesheet(&self) -> bool {
        self.name == "link" && self.attrs.get("rel") == Some("stylesheet")
    }

    /// Open-tag fragment carrying this tag's attributes verbatim, in
    /// insertion order: `<link rel="stylesheet" href="a.css">`.
    ///
    /// Values are emitted byte-for-byte, unescaped and unreordered.
    pub fn fallback_fragment(&self) -> String {
        let attrs = self
            .attrs
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");
        format!("<{} {}>", self.name, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stylesheet_link(href: &str) -> Tag {
        let mut tag = Tag::new("link");
        tag.attrs.set("rel", "stylesheet");
        tag.attrs.set("href", href);
        tag
    }

    #[test]
    fn test_is_blocking_stylesheet() {
        assert!(stylesheet_link("a.css").is_blocking_stylesheet());

        let mut preload = stylesheet_link("a.css");
        preload.attrs.set("rel", "preload");
        assert!(!preload.is_blocking_stylesheet());

        let mut script = Tag::new("script");
        script.attrs.set("rel", "stylesheet");
        assert!(!script.is_blocking_stylesheet());

        // No attributes at all: ineligible, not an error
        assert!(!Tag::new("link").is_blocking_stylesheet());
    }

    #[test]
    fn test_fallback_fragment() {
        let mut tag = stylesheet_link("a.css");
        tag.attrs.set("media", "screen and (min-width: 600px)");
        assert_eq!(
            tag.fallback_fragment(),
            r#"<link rel="stylesheet" href="a.css" media="screen and (min-width: 600px)">"#
        );
    }

    #[test]
    fn test_fallback_fragment_no_attrs() {
        assert_eq!(Tag::new("link").fallback_fragment(), "<link >");
    }

    #[test]
    fn test_constructors() {
        let noscript = Tag::noscript("<link rel=\"stylesheet\">");
        assert_eq!(noscript.name, "noscript");
        assert!(noscript.close_tag);
        assert!(noscript.attrs.is_empty());
        assert_eq!(noscript.inner_html.as_deref(), Some("<link rel=\"stylesheet\">"));

        let script = Tag::inline_script("console.log(1)");
        assert_eq!(script.name, "script");
        assert_eq!(script.attrs.get("type"), Some("text/javascript"));
        assert!(script.close_tag);
        assert_eq!(script.inner_html.as_deref(), Some("console.log(1)"));
    }

    #[test]
    fn test_wire_names() {
        let json = r#"{"tagName":"link","attributes":{"rel":"stylesheet"},"closeTag":false}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.name, "link");
        assert_eq!(tag.attrs.get("rel"), Some("stylesheet"));
        assert!(!tag.close_tag);
        assert!(tag.inner_html.is_none());

        let noscript = Tag::noscript("<link>");
        let json = serde_json::to_string(&noscript).unwrap();
        assert_eq!(json, r#"{"tagName":"noscript","closeTag":true,"innerHTML":"<link>"}"#);
    }
}
