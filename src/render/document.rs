//! Notice resolution and the format-independent document model.
//!
//! [`resolve`] turns a partial config into a complete one by merging it
//! over the blank defaults, two levels deep. The two reference numbers
//! are special: when a reference is absent from the partial it is
//! replaced with a freshly generated value, while a present-but-empty
//! string is kept and rendered as-is.
//!
//! [`build_document`] then lays the resolved config out as an ordered
//! list of [`Block`]s carrying both the variable data and the fixed
//! notice copy, which the HTML and text backends render without knowing
//! anything about visas.

use crate::config::{ApplicantDetails, NoticeConfig, PartialNoticeConfig};
use crate::reference::{barcode_url_with, generate_reference, qr_code_url_with, RefTag, ServiceEndpoints};

pub const SALUTATION: &str = "Dear";
pub const INTRO_PARAGRAPH: &str =
    "Thank you for your application for the Electronic Visa on Arrival to the Kingdom of Thailand.";
pub const APPROVAL_PARAGRAPH: &str =
    "We are delighted to inform you that your application has been approved.";
pub const DETAILS_HEADING: &str = "Your Electronic Visa on Arrival details";

pub const REFERENCE_LABEL: &str = "Reference No.";
pub const PAYMENT_LABEL: &str = "Payment Ref No.";

pub const TRANSFER_LABEL: &str = "Date/time of application transfer:";
pub const DETERMINATION_LABEL: &str = "Date/time of visa determination:";

/// Column headers of the details table, left to right.
pub const TABLE_HEADERS: [&str; 3] = ["QR Code", "Detail", "E-VOA Pre-Approval Code"];

pub const PRINT_NOTICE: &str = "PRINT OUT THIS EMAIL TOGETHER WITH THE ATTACHED TM88 FORM. \
YOU MUST PRESENT THE DOCUMENTS UPON ARRIVAL AT THE IMMIGRATION CHECKPOINT";

pub const IMPORTANT_HEADING: &str = "Important:";
pub const IMPORTANT_ITEMS: [&str; 2] = [
    "Please note that the Immigration Bureau of Thailand grants you the Electronic Visa on \
Arrival and reserves the right to conduct further due diligence upon arrival at the immigration \
checkpoint in Thailand. The Electronic Visa on Arrival does not guarantee your entry into Thailand.",
    "Upon arrival, you may be asked to present confirmed return flight ticket, confirmation of \
your accommodation in Thailand, and proof of funds of at least 10,000 Baht per person or 20,000 \
Baht per family during your stay.",
];

pub const REMARK_HEADING: &str = "Remark:";
pub const REMARK_BODY: &str = "To obtain the service fee receipt, you may request at our eVisa \
Thailand counter at the destination airport. To obtain the visa fee receipt, please click here \
to download.";

pub const CLOSING_LINES: [&str; 3] = [
    "If you have any questions, please contact Contact@evisathailand.com",
    "Best regards,",
    "eVisa Thailand",
];

/// An image slot in the document. `src` starts out as a service URL or a
/// site-relative asset path and may later be swapped for a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

fn header_logo() -> ImageRef {
    ImageRef {
        src: "/visa-logo.png".to_string(),
        alt: "eVisa Thailand Logo",
        width: 180,
        height: 60,
    }
}

fn footer_logo() -> ImageRef {
    ImageRef {
        src: "/visa-footer-logo.png".to_string(),
        alt: "eVisa Logo",
        width: 100,
        height: 50,
    }
}

fn partner_logo() -> ImageRef {
    ImageRef {
        src: "/gw-logo.png".to_string(),
        alt: "GW Logo",
        width: 100,
        height: 50,
    }
}

/// One labeled line inside the details table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Layout blocks of the notice, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Colored masthead with the header logo.
    Banner { logo: ImageRef },
    /// The two tracking references, side by side.
    ReferenceRow {
        reference_no: String,
        payment_ref_no: String,
    },
    Paragraph(&'static str),
    SectionHeading(&'static str),
    /// QR column, labeled detail lines, barcode column.
    DetailTable {
        qr: ImageRef,
        rows: Vec<DetailRow>,
        barcode: ImageRef,
    },
    /// A secondary "label: value" line below the table.
    MetaLine {
        label: &'static str,
        value: String,
    },
    /// The all-caps print instruction.
    Alert(&'static str),
    NoteList {
        heading: &'static str,
        items: &'static [&'static str],
    },
    Note {
        heading: &'static str,
        body: &'static str,
    },
    /// Right-aligned sign-off lines.
    Signature(&'static [&'static str]),
    LogoRow(Vec<ImageRef>),
}

/// A fully laid-out notice, ready for a rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDocument {
    pub blocks: Vec<Block>,
}

impl NoticeDocument {
    /// Every image in the document, in display order.
    pub fn images(&self) -> Vec<&ImageRef> {
        let mut images = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Banner { logo } => images.push(logo),
                Block::DetailTable { qr, barcode, .. } => {
                    images.push(qr);
                    images.push(barcode);
                }
                Block::LogoRow(logos) => images.extend(logos.iter()),
                _ => {}
            }
        }
        images
    }

    /// Mutable view of every image, for swapping sources in place.
    pub fn images_mut(&mut self) -> Vec<&mut ImageRef> {
        let mut images = Vec::new();
        for block in &mut self.blocks {
            match block {
                Block::Banner { logo } => images.push(logo),
                Block::DetailTable { qr, barcode, .. } => {
                    images.push(qr);
                    images.push(barcode);
                }
                Block::LogoRow(logos) => images.extend(logos.iter_mut()),
                _ => {}
            }
        }
        images
    }
}

/// Merge a partial config over the blank defaults.
///
/// Absent fields fall back to empty strings; the nested applicant record
/// merges field by field rather than wholesale. Absent references are
/// replaced with generated ones, so every resolved notice carries a
/// scannable code even when the caller supplied nothing.
pub fn resolve(partial: PartialNoticeConfig) -> NoticeConfig {
    let reference_no = partial.reference_no.unwrap_or_else(|| {
        let generated = generate_reference(RefTag::Application);
        log::debug!("no reference provided, generated {generated}");
        generated
    });
    let payment_ref_no = partial.payment_ref_no.unwrap_or_else(|| {
        let generated = generate_reference(RefTag::Payment);
        log::debug!("no payment reference provided, generated {generated}");
        generated
    });
    let applicant = partial.applicant_details.unwrap_or_default();

    NoticeConfig {
        reference_no,
        payment_ref_no,
        applicant_details: ApplicantDetails {
            name: applicant.name.unwrap_or_default(),
            passport_no: applicant.passport_no.unwrap_or_default(),
            arrival_airport: applicant.arrival_airport.unwrap_or_default(),
            date_time_of_arrival: applicant.date_time_of_arrival.unwrap_or_default(),
            flight_no: applicant.flight_no.unwrap_or_default(),
        },
        date_time_of_application_transfer: partial
            .date_time_of_application_transfer
            .unwrap_or_default(),
        date_time_of_visa_determination: partial
            .date_time_of_visa_determination
            .unwrap_or_default(),
    }
}

fn detail_rows(applicant: &ApplicantDetails) -> Vec<DetailRow> {
    // Applicant values are displayed uppercased; the stored config keeps
    // its casing.
    [
        ("Name:", &applicant.name),
        ("Passport No.:", &applicant.passport_no),
        ("Arrival Airport:", &applicant.arrival_airport),
        ("Date/time of Arrival:", &applicant.date_time_of_arrival),
        ("Flight No:", &applicant.flight_no),
    ]
    .into_iter()
    .map(|(label, value)| DetailRow {
        label,
        value: value.to_uppercase(),
    })
    .collect()
}

/// Lay a resolved config out as renderable blocks.
pub fn build_document(config: &NoticeConfig, endpoints: &ServiceEndpoints) -> NoticeDocument {
    let qr = ImageRef {
        src: qr_code_url_with(endpoints, &config.reference_no),
        alt: "QR Code",
        width: 100,
        height: 100,
    };
    let barcode = ImageRef {
        src: barcode_url_with(endpoints, &config.payment_ref_no),
        alt: "E-VOA Pre-Approval Code",
        width: 180,
        height: 48,
    };

    NoticeDocument {
        blocks: vec![
            Block::Banner {
                logo: header_logo(),
            },
            Block::ReferenceRow {
                reference_no: config.reference_no.clone(),
                payment_ref_no: config.payment_ref_no.clone(),
            },
            Block::Paragraph(SALUTATION),
            Block::Paragraph(INTRO_PARAGRAPH),
            Block::Paragraph(APPROVAL_PARAGRAPH),
            Block::SectionHeading(DETAILS_HEADING),
            Block::DetailTable {
                qr,
                rows: detail_rows(&config.applicant_details),
                barcode,
            },
            Block::MetaLine {
                label: TRANSFER_LABEL,
                value: config.date_time_of_application_transfer.clone(),
            },
            Block::MetaLine {
                label: DETERMINATION_LABEL,
                value: config.date_time_of_visa_determination.clone(),
            },
            Block::Alert(PRINT_NOTICE),
            Block::NoteList {
                heading: IMPORTANT_HEADING,
                items: &IMPORTANT_ITEMS,
            },
            Block::Note {
                heading: REMARK_HEADING,
                body: REMARK_BODY,
            },
            Block::Signature(&CLOSING_LINES),
            Block::LogoRow(vec![footer_logo(), partner_logo()]),
        ],
    }
}
