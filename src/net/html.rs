//! # HTML Scanning
//!
//! A small, tolerant element extractor. It does not build a DOM; it finds
//! `<tag ...>...</tag>` blocks case-insensitively, parses their attributes and
//! strips nested markup from the inner text. That is enough for the few
//! download pages the scrapers read, and it survives attribute reordering
//! and whitespace noise.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .unwrap()
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Attribute names are lower-cased.
    pub attrs: HashMap<String, String>,
    /// Inner text with tags removed, entities decoded, whitespace collapsed.
    pub text: String,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// True when the element carries every class in `classes`
    /// (space separated), in any order.
    pub fn has_class(&self, classes: &str) -> bool {
        let Some(own) = self.attr("class") else {
            return false;
        };
        let own: Vec<&str> = own.split_whitespace().collect();
        classes.split_whitespace().all(|c| own.contains(&c))
    }
}

fn parse_attrs(raw: &str) -> HashMap<String, String> {
    ATTR_RE
        .captures_iter(raw)
        .map(|cap| {
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map_or("", |m| m.as_str());
            (cap[1].to_ascii_lowercase(), decode_entities(value))
        })
        .collect()
}

pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Inner markup → plain text.
pub fn strip_tags(markup: &str) -> String {
    let text = TAG_RE.replace_all(markup, " ");
    let text = decode_entities(&text);
    SPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Every `<tag>...</tag>` element in document order.
pub fn elements(html: &str, tag: &str) -> Vec<Element> {
    let pattern = format!(
        r"(?is)<{t}\b([^>]*)>(.*?)</{t}\s*>",
        t = regex::escape(tag)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.captures_iter(html)
        .map(|cap| Element {
            attrs: parse_attrs(&cap[1]),
            text: strip_tags(&cap[2]),
        })
        .collect()
}

/// Every void element (`<meta ...>`, `<link ... />`) with the given tag.
pub fn void_elements(html: &str, tag: &str) -> Vec<Element> {
    let pattern = format!(r"(?is)<{}\b([^>]*?)/?>", regex::escape(tag));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.captures_iter(html)
        .map(|cap| Element {
            attrs: parse_attrs(&cap[1]),
            text: String::new(),
        })
        .collect()
}

/// `href` of every anchor, in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    elements(html, "a")
        .into_iter()
        .filter_map(|a| a.attrs.get("href").cloned())
        .collect()
}
