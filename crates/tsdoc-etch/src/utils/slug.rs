//! Page slugs and anchors
//!
//! A source file becomes one page. Its title is the root-relative path
//! (aliases applied, extension stripped) and its slug is the title with
//! `/` replaced by `-`. Declarations on the page are addressed by an
//! anchor derived from their qualified name.

use std::path::{Component, Path};

/// Extensions stripped from source paths, longest first
const EXTENSIONS: &[&str] = &[".d.ts", ".d.mts", ".tsx", ".mts", ".cts", ".ts"];

/// Path of `path` relative to `root`, `/`-separated
///
/// Returns `None` when `path` is not under `root`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tsdoc_etch::utils::slug::relative_path;
///
/// let rel = relative_path(Path::new("/project"), Path::new("/project/src/geo/point.ts"));
/// assert_eq!(rel.as_deref(), Some("src/geo/point.ts"));
/// assert_eq!(relative_path(Path::new("/project"), Path::new("/q/a.ts")), None);
/// ```
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Strip a TypeScript extension
///
/// # Examples
///
/// ```
/// use tsdoc_etch::utils::slug::strip_extension;
///
/// assert_eq!(strip_extension("src/a.ts"), "src/a");
/// assert_eq!(strip_extension("types/global.d.ts"), "types/global");
/// assert_eq!(strip_extension("README"), "README");
/// ```
pub fn strip_extension(path: &str) -> &str {
    EXTENSIONS
        .iter()
        .find_map(|ext| path.strip_suffix(ext))
        .unwrap_or(path)
}

/// Output slug of a page title
///
/// # Examples
///
/// ```
/// use tsdoc_etch::utils::slug::page_slug;
///
/// assert_eq!(page_slug("src/geo/point"), "src-geo-point");
/// ```
pub fn page_slug(title: &str) -> String {
    title
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Anchor of a declaration on its page
///
/// Case-folds the qualified name and drops every character other than
/// alphanumerics, `-` and `_`.
///
/// # Examples
///
/// ```
/// use tsdoc_etch::utils::slug::anchor;
///
/// assert_eq!(anchor("Point"), "point");
/// assert_eq!(anchor("Shapes.Circle.radius"), "shapescircleradius");
/// assert_eq!(anchor("STRING_TYPE"), "string_type");
/// ```
pub fn anchor(qualified_name: &str) -> String {
    qualified_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
