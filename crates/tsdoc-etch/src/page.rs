//! Page composition
//!
//! A page is one source file's blocks, joined by [`BLOCK_DELIMITER`]
//! under the Storybook preamble, the label style block and a `<Meta>`
//! title directive.

use crate::config::{DocConfig, LabelColors};
use crate::decorate::BLOCK_DELIMITER;
use crate::diagnostics::{DocError, DocResult};
use handlebars::Handlebars;
use serde::Serialize;

const PAGE_TEMPLATE: &str = "page";

/// Extension of generated pages
pub const PAGE_EXTENSION: &str = "mdx";

#[derive(Serialize)]
struct PageData<'a> {
    title: &'a str,
    colors: &'a LabelColors,
    body: String,
}

/// Renders pages from the embedded template
pub struct PageComposer {
    handlebars: Handlebars<'static>,
    colors: LabelColors,
}

impl PageComposer {
    pub fn new(config: &DocConfig) -> DocResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(PAGE_TEMPLATE, include_str!("templates/page.mdx.hbs"))
            .map_err(|e| DocError::Template(e.to_string()))?;
        Ok(Self {
            handlebars,
            colors: config.colors.clone(),
        })
    }

    /// The page for `blocks`; blank blocks are dropped
    pub fn compose<S: AsRef<str>>(&self, title: &str, blocks: &[S]) -> DocResult<String> {
        let body = blocks
            .iter()
            .map(AsRef::as_ref)
            .filter(|b| !b.trim().is_empty())
            .collect::<Vec<_>>()
            .join(BLOCK_DELIMITER);
        let data = PageData {
            title,
            colors: &self.colors,
            body,
        };
        self.handlebars
            .render(PAGE_TEMPLATE, &data)
            .map_err(|e| DocError::Template(e.to_string()))
    }
}

/// File name of the page with `slug`
pub fn page_file_name(slug: &str) -> String {
    format!("{}.{}", slug, PAGE_EXTENSION)
}
