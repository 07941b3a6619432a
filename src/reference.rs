//! Reference numbers and image-service URL construction.
//!
//! References are short random identifiers: a fixed tag followed by eight
//! decimal digits. They are not cryptographically secure and carry no
//! uniqueness guarantee across calls (collision odds around 1 in 10^8,
//! accepted for this use case). The URL builders map a reference to the
//! external QR/barcode generation endpoints; the reference is
//! percent-encoded and the services are never contacted from here.

use rand::Rng;
use url::Url;

use crate::config::NoticeConfig;

/// Default base URL of the QR-code generation service.
pub const QR_SERVICE_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default base URL of the Code128 barcode generation service.
pub const BARCODE_SERVICE_BASE: &str = "https://barcodeapi.org/api/code128/";

/// Requested QR image size, fixed.
const QR_IMAGE_SIZE: &str = "100x100";

const REFERENCE_DIGITS: usize = 8;

/// The two reference kinds carried by a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTag {
    /// Application tracking reference ("REF").
    Application,
    /// Payment tracking reference ("PAY").
    Payment,
}

impl RefTag {
    /// Literal prefix carried by generated references of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            RefTag::Application => "REF",
            RefTag::Payment => "PAY",
        }
    }
}

/// Generate a reference: the tag prefix followed by eight independently
/// drawn decimal digits. Leading zeros are permitted.
pub fn generate_reference(tag: RefTag) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(tag.prefix().len() + REFERENCE_DIGITS);
    out.push_str(tag.prefix());
    for _ in 0..REFERENCE_DIGITS {
        let digit: u8 = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Base URLs of the external image-generation services.
///
/// Overridable so tests and air-gapped deployments can point the builders
/// at a local server; the defaults are the public endpoints.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    pub qr_base: String,
    pub barcode_base: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            qr_base: QR_SERVICE_BASE.to_string(),
            barcode_base: BARCODE_SERVICE_BASE.to_string(),
        }
    }
}

/// URL of a QR image for `reference` at the default endpoint.
pub fn qr_code_url(reference: &str) -> String {
    qr_code_url_with(&ServiceEndpoints::default(), reference)
}

/// URL of a QR image for `reference`: the reference goes percent-encoded
/// into the `data` query parameter, with a fixed `size`.
pub fn qr_code_url_with(endpoints: &ServiceEndpoints, reference: &str) -> String {
    match Url::parse(&endpoints.qr_base) {
        Ok(mut base) => {
            base.query_pairs_mut()
                .append_pair("size", QR_IMAGE_SIZE)
                .append_pair("data", reference);
            base.to_string()
        }
        // A non-parseable base can only come from an override; fall back to
        // plain concatenation rather than failing.
        Err(_) => format!("{}?size={}&data={}", endpoints.qr_base, QR_IMAGE_SIZE, reference),
    }
}

/// URL of a Code128 barcode image for `reference` at the default endpoint.
pub fn barcode_url(reference: &str) -> String {
    barcode_url_with(&ServiceEndpoints::default(), reference)
}

/// URL of a Code128 barcode image for `reference`: the reference goes
/// percent-encoded into the final path segment.
pub fn barcode_url_with(endpoints: &ServiceEndpoints, reference: &str) -> String {
    match Url::parse(&endpoints.barcode_base) {
        Ok(mut base) => {
            if let Ok(mut segments) = base.path_segments_mut() {
                segments.pop_if_empty().push(reference);
            }
            base.to_string()
        }
        Err(_) => format!("{}{}", endpoints.barcode_base, reference),
    }
}

/// Alternate factory: an all-blank config except that both reference
/// fields are pre-populated with freshly generated values.
pub fn random_refs_config() -> NoticeConfig {
    let mut config = NoticeConfig::blank();
    config.reference_no = generate_reference(RefTag::Application);
    config.payment_ref_no = generate_reference(RefTag::Payment);
    config
}
