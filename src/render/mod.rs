//! Rendering pipeline: resolve a partial config, lay it out as blocks,
//! then hand the blocks to a format backend.

use std::fmt;
use std::str::FromStr;

use crate::config::PartialNoticeConfig;
use crate::error::{Error, Result};
use crate::reference::ServiceEndpoints;

pub mod document;
pub mod html;
pub mod text;

pub use document::{build_document, resolve, Block, DetailRow, ImageRef, NoticeDocument};
pub use html::HtmlRenderer;
pub use text::{TextRenderer, DEFAULT_TEXT_WIDTH};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Html,
    Text,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Text => "text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(Format::Html),
            "text" | "txt" => Ok(Format::Text),
            other => Err(Error::ConfigError(format!(
                "unknown format '{other}' (expected 'html' or 'text')"
            ))),
        }
    }
}

/// A format backend turning a laid-out notice into a string.
pub trait NoticeRenderer {
    fn render(&self, document: &NoticeDocument) -> Result<String>;
}

/// Settings for the whole pipeline.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: Format,
    pub endpoints: ServiceEndpoints,
    /// Wrap column for the text backend; ignored by the HTML backend.
    pub text_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: Format::default(),
            endpoints: ServiceEndpoints::default(),
            text_width: DEFAULT_TEXT_WIDTH,
        }
    }
}

/// Backend for the requested format.
pub fn new_renderer(options: &RenderOptions) -> Box<dyn NoticeRenderer> {
    match options.format {
        Format::Html => Box::new(HtmlRenderer),
        Format::Text => Box::new(TextRenderer {
            width: options.text_width,
        }),
    }
}

/// Resolve, lay out, and render in one call.
pub fn render_notice(partial: PartialNoticeConfig, options: &RenderOptions) -> Result<String> {
    let config = resolve(partial);
    let document = build_document(&config, &options.endpoints);
    new_renderer(options).render(&document)
}
