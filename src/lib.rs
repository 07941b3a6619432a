//! E-VOA Approval Notice Generator
//!
//! Form-driven generator for Electronic Visa on Arrival approval notices.
//! A partial configuration merges over blank defaults, absent reference
//! numbers are filled with generated ones, and the result renders as a
//! styled HTML email or a wrapped plain-text alternative.
//!
//! # Features
//!
//! - **Typed form fields**: updates address a closed enum, so an unknown
//!   field name is an error instead of a silent no-op
//! - **Two backends**: HTML and plain text rendered from the same block
//!   layout
//! - **`fetch`** (optional): downloads the QR/barcode images and inlines
//!   them as `data:` URIs
//!
//! # Example
//!
//! ```
//! use evoa_notice::{render_notice, Format, PartialNoticeConfig, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let partial: PartialNoticeConfig =
//!     serde_json::from_str(r#"{"applicantDetails": {"name": "Jane Roe"}}"#)?;
//!
//! let options = RenderOptions { format: Format::Html, ..Default::default() };
//! let html = render_notice(partial, &options)?;
//! assert!(html.contains("JANE ROE"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;

// Reference generation and image-service URLs
pub mod reference;

// Field registry, edit sessions, and the interactive wizard
pub mod form;

// Resolution, block layout, and the HTML/text backends
pub mod render;

// Image download and data-URI embedding
#[cfg(feature = "fetch")]
pub mod fetch;

pub use config::{ApplicantDetails, NoticeConfig, PartialApplicantDetails, PartialNoticeConfig};
pub use form::{FormField, FormSession};
pub use reference::{
    barcode_url, generate_reference, qr_code_url, random_refs_config, RefTag, ServiceEndpoints,
};
pub use render::{
    build_document, render_notice, resolve, Format, HtmlRenderer, NoticeDocument, NoticeRenderer,
    RenderOptions, TextRenderer,
};

#[cfg(feature = "fetch")]
pub use fetch::ImageFetcher;
