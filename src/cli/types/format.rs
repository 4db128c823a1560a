//! Output format selection for rendered views.

use std::fmt;

use crate::{
    view::{HtmlRenderer, JsonRenderer, Renderer, TextRenderer},
    Result,
};

/// How rendered views are written out.
///
/// - **Html**: the same markup the browser dashboard shows
/// - **Text**: box-drawn tables for the terminal
/// - **Json**: the underlying view models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn renderer(&self) -> Result<Box<dyn Renderer>> {
        Ok(match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new()?),
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}
