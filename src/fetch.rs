//! Optional download-and-embed support (feature `fetch`).
//!
//! The rendered HTML normally references the QR and barcode services by
//! URL. [`ImageFetcher`] downloads those images and swaps the sources
//! for `data:` URIs so the document is self-contained. Site-relative
//! assets (the logos) have no host to fetch from and are left alone.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::blocking::Client;

use crate::error::{Error, Result};
use crate::render::NoticeDocument;

/// Default `User-Agent` sent to the image services.
pub const DEFAULT_USER_AGENT: &str = concat!("evoa-notice/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// One downloaded image.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    /// Encode as a `data:` URI usable in an `img` source.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.content_type, BASE64.encode(&self.bytes))
    }
}

/// Blocking downloader for the notice images.
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_MS)
    }

    pub fn with_settings(user_agent: &str, timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| Error::FetchError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Download one image.
    pub fn fetch(&self, url: &str) -> Result<FetchedImage> {
        log::debug!("fetching image {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::FetchError(format!("Failed to fetch {}: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "Service returned {} for {}",
                status, url
            )));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = resp
            .bytes()
            .map_err(|e| Error::FetchError(format!("Failed to read response body: {}", e)))?
            .to_vec();

        Ok(FetchedImage {
            content_type,
            bytes,
        })
    }

    /// Download every fetchable image in the document and replace its
    /// source with a `data:` URI. Sources that are not absolute HTTP
    /// URLs are skipped.
    pub fn embed_document_images(&self, document: &mut NoticeDocument) -> Result<()> {
        for image in document.images_mut() {
            if !image.src.starts_with("http://") && !image.src.starts_with("https://") {
                continue;
            }
            let fetched = self.fetch(&image.src)?;
            image.src = fetched.data_uri();
        }
        Ok(())
    }
}
