//! Markup decorators
//!
//! Small pure functions that wrap text in the MDX fragments a page is
//! built from. Anything that came from source text goes through
//! [`escape`] before it is wrapped, so the fragments never contain a raw
//! `<`, `>`, `{` or `}` that MDX would parse as markup or an expression.

/// Horizontal rule opening each function detail section
pub const SEPARATOR: &str = r#"<hr className="ts-doc-sep" />"#;

/// Delimiter between top-level blocks of a page
pub const BLOCK_DELIMITER: &str = "\n---\n";

/// Escape text for MDX
///
/// `& < > " '` become HTML entities and the braces become `&lcub;` and
/// `&rcub;`.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('{', "&lcub;")
        .replace('}', "&rcub;")
}

/// Escape prose from doc comments
///
/// Markdown stays intact; only characters MDX would treat as JSX or an
/// expression are replaced.
pub fn escape_prose(text: &str) -> String {
    text.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&lcub;")
        .replace('}', "&rcub;")
}

fn label(class: &str, text: &str) -> String {
    format!(r#"<span className="ts-doc-{}">{}</span>"#, class, text)
}

/// Kind label (`type`, `class`, `property`, ...)
pub fn kind_label(text: &str) -> String {
    label("kind", &escape(text))
}

/// Type label; `text` must already be escaped
pub fn type_label(text: &str) -> String {
    label("type", text)
}

/// Literal label; `text` must already be escaped
pub fn literal_label(text: &str) -> String {
    label("lit", text)
}

/// Name label
pub fn name_label(text: &str) -> String {
    label("name", &escape(text))
}

/// Markdown link
pub fn link(text: &str, href: &str) -> String {
    format!("[{}]({})", escape(text), href)
}

/// Surround non-blank `text` with escaped delimiters
///
/// Blank text stays empty so optional parts vanish entirely.
pub fn wrap(text: &str, prefix: &str, suffix: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        format!("{}{}{}", escape(prefix), text, escape(suffix))
    }
}

/// Heading with a styled title
///
/// With an `anchor`, a plain markdown heading of the same level follows
/// the styled one so the page gets a linkable id for the declaration.
/// The anchor is source text and is escaped like any other.
pub fn heading(level: usize, title: &str, anchor: Option<&str>) -> String {
    let level = level.clamp(1, 6);
    let mut out = format!(
        "<div className=\"ts-doc-header-wrapper\">\n\n<h{level} className=\"ts-doc-header\">{}</h{level}>\n\n",
        title,
        level = level
    );
    if let Some(anchor) = anchor {
        out.push_str(&"#".repeat(level));
        out.push(' ');
        out.push_str(&escape(anchor));
        out.push_str("\n\n");
    }
    out.push_str("</div>");
    out
}

/// Section wrapper, empty for blank content
pub fn section(content: &str) -> String {
    if content.trim().is_empty() {
        String::new()
    } else {
        format!("<div className=\"ts-doc-section\">\n{}\n</div>", content)
    }
}

/// Join the non-blank parts with newlines
pub fn block<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fenced TypeScript example
pub fn example(code: &str) -> String {
    format!("```ts\n{}\n```", code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">{y} & 'z'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&lcub;y&rcub; &amp; &#039;z&#039;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_labels() {
        assert_eq!(kind_label("type"), r#"<span className="ts-doc-kind">type</span>"#);
        assert_eq!(type_label("string"), r#"<span className="ts-doc-type">string</span>"#);
        assert_eq!(literal_label("1e3"), r#"<span className="ts-doc-lit">1e3</span>"#);
        assert_eq!(name_label("Point"), r#"<span className="ts-doc-name">Point</span>"#);
        assert_eq!(link("Point", "/docs/src-a#point"), "[Point](/docs/src-a#point)");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("T", "<", ">"), "&lt;T&gt;");
        assert_eq!(wrap("  ", "<", ">"), "");
        assert_eq!(wrap("", "[", "]"), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            heading(2, "value", Some("declaration")),
            "<div className=\"ts-doc-header-wrapper\">\n\n<h2 className=\"ts-doc-header\">value</h2>\n\n## declaration\n\n</div>"
        );
        assert_eq!(
            heading(4, "value", Some("I.a<b>{c}")),
            "<div className=\"ts-doc-header-wrapper\">\n\n<h4 className=\"ts-doc-header\">value</h4>\n\n#### I.a&lt;b&gt;&lcub;c&rcub;\n\n</div>"
        );
        assert_eq!(
            heading(5, "Returns:", None),
            "<div className=\"ts-doc-header-wrapper\">\n\n<h5 className=\"ts-doc-header\">Returns:</h5>\n\n</div>"
        );
    }

    #[test]
    fn test_section_and_block() {
        assert_eq!(section(""), "");
        assert_eq!(section(" \n"), "");
        assert_eq!(section("x"), "<div className=\"ts-doc-section\">\nx\n</div>");
        assert_eq!(block(["a", "", "  ", "b"]), "a\nb");
    }
}
