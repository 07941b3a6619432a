//! Merge and reference-resolution behavior of the rendering pipeline.

use evoa_notice::config::PartialNoticeConfig;
use evoa_notice::render::{render_notice, resolve, Format, RenderOptions};

fn html_options() -> RenderOptions {
    RenderOptions {
        format: Format::Html,
        ..Default::default()
    }
}

#[test]
fn full_fixture_renders_every_value() {
    let partial = PartialNoticeConfig::from_path("tests/fixtures/full_config.json")
        .expect("read fixture");
    let html = render_notice(partial, &html_options()).expect("render");

    assert!(html.contains("REF19283746"));
    assert!(html.contains("PAY56473829"));
    // Applicant values come out uppercased.
    assert!(html.contains("JANE ROE"));
    assert!(html.contains("BKK - SUVARNABHUMI INTL."));
    assert!(html.contains("20/12/2024 AT 10:15 AM"));
    // Processing dates keep their casing.
    assert!(html.contains("12/12/2024 09:30 AM"));
    assert!(html.contains("15/12/2024 02:00 PM"));
}

#[test]
fn absent_references_are_generated() {
    let config = resolve(PartialNoticeConfig::default());
    assert!(config.reference_no.starts_with("REF"));
    assert_eq!(config.reference_no.len(), 11);
    assert!(config.reference_no[3..].chars().all(|c| c.is_ascii_digit()));
    assert!(config.payment_ref_no.starts_with("PAY"));
    assert_eq!(config.payment_ref_no.len(), 11);
}

#[test]
fn empty_string_references_stay_empty() {
    let json = r#"{ "referenceNo": "", "paymentRefNo": "" }"#;
    let partial: PartialNoticeConfig = serde_json::from_str(json).expect("parse");
    let config = resolve(partial.clone());
    assert_eq!(config.reference_no, "");
    assert_eq!(config.payment_ref_no, "");

    // The empty reference flows into the QR data parameter untouched.
    let html = render_notice(partial, &html_options()).expect("render");
    assert!(html.contains("size=100x100&amp;data=\""));
}

#[test]
fn applicant_record_merges_field_by_field() {
    let json = r#"{ "applicantDetails": { "passportNo": "X1234567X" } }"#;
    let partial: PartialNoticeConfig = serde_json::from_str(json).expect("parse");
    let config = resolve(partial);
    assert_eq!(config.applicant_details.passport_no, "X1234567X");
    assert_eq!(config.applicant_details.name, "");
    assert_eq!(config.applicant_details.flight_no, "");
    assert_eq!(config.date_time_of_application_transfer, "");
}

#[test]
fn text_format_renders_the_same_data() {
    let partial = PartialNoticeConfig::from_path("tests/fixtures/full_config.json")
        .expect("read fixture");
    let text = render_notice(
        partial,
        &RenderOptions {
            format: Format::Text,
            ..Default::default()
        },
    )
    .expect("render");

    assert!(text.contains("Reference No. REF19283746"));
    assert!(text.contains("Payment Ref No. PAY56473829"));
    assert!(text.contains("Name: JANE ROE"));
    assert!(text.contains(
        "QR Code: https://api.qrserver.com/v1/create-qr-code/?size=100x100&data=REF19283746"
    ));
    assert!(text.contains(
        "E-VOA Pre-Approval Code: https://barcodeapi.org/api/code128/PAY56473829"
    ));
    assert!(!text.contains('<'));
}
