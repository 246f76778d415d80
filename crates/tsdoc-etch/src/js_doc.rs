//! JSDoc parsing and representation
//!
//! Extracts the description and the tags the renderer understands from
//! `/** ... */` comments. Unrecognized tags are kept verbatim so nothing
//! a reader wrote is silently lost.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Regex for {@link ...} references
    static ref LINK_REGEX: Regex = Regex::new(
        r"\{@(?:link|linkcode|linkplain)\s+([^}|\s]+)(?:\s*\|\s*|\s+)?([^}]*)\}"
    ).unwrap();

    /// Regex for the `{type} [name=default] - doc` body of a @param tag
    static ref PARAM_REGEX: Regex = Regex::new(
        r"(?s)^(?:\{[^}]*\}\s*)?(\[)?([\w$.]+)(?:=[^\]]*)?\]?\s*(?:-\s*)?(.*)$"
    ).unwrap();
}

/// Parsed JSDoc documentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDoc {
    /// Main description text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Parsed JSDoc tags
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    /// Parse JSDoc from a comment string
    ///
    /// Accepts the comment with or without its `/**` and `*/` delimiters.
    pub fn parse(comment: &str) -> Self {
        let cleaned = clean_jsdoc_comment(comment);
        let description = extract_description(&cleaned);
        let tags = parse_tags(&cleaned);

        Self { description, tags }
    }

    /// Check if this doc is empty
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.tags.is_empty()
    }

    /// Get the main description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get param doc by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.tags.iter().find_map(|t| match t {
            JsDocTag::Param { name: n, doc } if n == name => doc.as_deref(),
            _ => None,
        })
    }

    /// Get the @returns description
    pub fn returns(&self) -> Option<&str> {
        self.tags.iter().find_map(|t| match t {
            JsDocTag::Returns { doc } => doc.as_deref(),
            _ => None,
        })
    }

    /// Get all @example bodies
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|t| match t {
            JsDocTag::Example { doc } => Some(doc.as_str()),
            _ => None,
        })
    }

    /// Get the @deprecated tag, `Some("")` when it has no message
    pub fn deprecated(&self) -> Option<&str> {
        self.tags.iter().find_map(|t| match t {
            JsDocTag::Deprecated { doc } => Some(doc.as_deref().unwrap_or("")),
            _ => None,
        })
    }

    /// Get all @see tags
    pub fn see_also(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|t| match t {
            JsDocTag::See { reference } => Some(reference.as_str()),
            _ => None,
        })
    }

    /// Check if marked @internal
    pub fn is_internal(&self) -> bool {
        self.tags.iter().any(|t| matches!(t, JsDocTag::Internal))
    }

    /// Check if marked @private or @hidden
    pub fn is_private(&self) -> bool {
        self.tags
            .iter()
            .any(|t| matches!(t, JsDocTag::Private | JsDocTag::Hidden))
    }
}

/// JSDoc tag types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JsDocTag {
    /// @param {type} name - description
    Param { name: String, doc: Option<String> },

    /// @returns {type} description
    Returns { doc: Option<String> },

    /// @example
    Example { doc: String },

    /// @deprecated message
    Deprecated { doc: Option<String> },

    /// @see reference
    See { reference: String },

    /// @internal
    Internal,

    /// @private
    Private,

    /// @hidden / @ignore
    Hidden,

    /// Unknown/custom tag
    Unknown { tag: String, value: String },
}

/// Replace `{@link target text}` with its display text
pub fn strip_links(text: &str) -> String {
    LINK_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let label = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if label.is_empty() {
                caps[1].to_string()
            } else {
                label.to_string()
            }
        })
        .into_owned()
}

/// Clean JSDoc comment by removing delimiters and leading stars
fn clean_jsdoc_comment(comment: &str) -> String {
    let mut lines = Vec::new();

    for line in comment.lines() {
        let mut content = line.trim();

        if let Some(rest) = content.strip_prefix("/**") {
            content = rest;
        }
        if let Some(rest) = content.strip_suffix("*/") {
            content = rest;
        }
        content = content.trim();

        if let Some(rest) = content.strip_prefix("* ") {
            content = rest;
        } else if let Some(rest) = content.strip_prefix('*') {
            content = rest;
        }

        lines.push(content.trim_end());
    }

    lines.join("\n").trim().to_string()
}

/// Extract description text before the first tag
fn extract_description(text: &str) -> Option<String> {
    let end = if text.starts_with('@') {
        0
    } else {
        text.find("\n@").unwrap_or(text.len())
    };

    let trimmed = text[..end].trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(strip_links(trimmed))
    }
}

/// Parse all JSDoc tags from the comment
fn parse_tags(text: &str) -> Vec<JsDocTag> {
    let mut tags = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        let trimmed = line.trim_end();

        if let Some(after_at) = trimmed.trim_start().strip_prefix('@') {
            if let Some((name, content)) = current.take() {
                tags.push(parse_single_tag(&name, &content));
            }

            let (name, content) = after_at
                .split_once(char::is_whitespace)
                .unwrap_or((after_at, ""));
            current = Some((name.to_string(), content.to_string()));
        } else if let Some((_, ref mut content)) = current {
            // examples keep their indentation
            content.push('\n');
            content.push_str(trimmed);
        }
    }

    if let Some((name, content)) = current {
        tags.push(parse_single_tag(&name, &content));
    }

    tags
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(strip_links(s))
    }
}

/// Parse a single JSDoc tag
fn parse_single_tag(tag_name: &str, content: &str) -> JsDocTag {
    match tag_name {
        "param" | "arg" | "argument" => parse_param_tag(content.trim()),
        "returns" | "return" => JsDocTag::Returns {
            doc: non_empty(skip_type(content.trim()).trim_start_matches('-')),
        },
        "example" => JsDocTag::Example {
            doc: content.trim_matches('\n').trim_end().to_string(),
        },
        "deprecated" => JsDocTag::Deprecated {
            doc: non_empty(content),
        },
        "see" => JsDocTag::See {
            reference: strip_links(content.trim()),
        },
        "internal" => JsDocTag::Internal,
        "private" => JsDocTag::Private,
        "hidden" | "ignore" => JsDocTag::Hidden,
        _ => JsDocTag::Unknown {
            tag: tag_name.to_string(),
            value: content.trim().to_string(),
        },
    }
}

/// Skip a leading `{type}` annotation
fn skip_type(content: &str) -> &str {
    if content.starts_with('{') {
        if let Some(end) = content.find('}') {
            return content[end + 1..].trim_start();
        }
    }
    content
}

/// Parse @param tag content
fn parse_param_tag(content: &str) -> JsDocTag {
    match PARAM_REGEX.captures(content) {
        Some(caps) => JsDocTag::Param {
            name: caps[2].to_string(),
            doc: non_empty(&caps[3]),
        },
        None => JsDocTag::Unknown {
            tag: "param".to_string(),
            value: content.to_string(),
        },
    }
}
