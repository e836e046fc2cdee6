//! Page Nodes
//!
//! Host-agnostic element description. Renderers build cards as `Node`
//! trees and hand them to a UI target; the in-memory page stores its
//! targets as nodes too.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// A single element: tag, class list, text, attributes, children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set the class list (space separated)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Attribute value, if set
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of this node and its descendants, like `textContent`
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Serialize as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, None);
        out
    }

    /// Serialize as HTML, stamping an `id` attribute on the root element
    pub fn to_html_with_id(&self, id: &str) -> String {
        let mut out = String::new();
        self.write_html(&mut out, Some(id));
        out
    }

    fn write_html(&self, out: &mut String, id: Option<&str>) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape(class));
        }

        let mut style = self.attrs.get("style").cloned();
        if self.hidden {
            style = Some(match style {
                Some(s) if !s.is_empty() => format!("{}; display: none", s.trim_end_matches(';')),
                _ => "display: none".to_string(),
            });
        }
        for (name, value) in self.attrs.iter().filter(|(name, _)| *name != "style") {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if let Some(style) = style {
            let _ = write!(out, " style=\"{}\"", escape(&style));
        }

        if is_void(&self.tag) {
            out.push_str(">");
            return;
        }

        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out, None);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

/// Escape text for use in HTML content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
