//! End-to-end form flows: session edits, wizard runs, rendering the result.

use evoa_notice::form::wizard::{run_wizard, ScriptedPrompter};
use evoa_notice::form::{FormField, FormSession};
use evoa_notice::render::{render_notice, Format, RenderOptions};
use evoa_notice::Error;

#[test]
fn session_edits_finalize_and_render() {
    let mut session = FormSession::new();
    session.set_by_name("applicantDetails.name", "Jane Roe").unwrap();
    session.set_by_name("applicantDetails.passportNo", "X1234567X").unwrap();
    session
        .set_by_name("applicantDetails.arrivalAirport", "BKK - Suvarnabhumi Intl.")
        .unwrap();
    session
        .set_by_name("applicantDetails.dateTimeOfArrival", "20/12/2024 at 10:15 AM")
        .unwrap();
    session.set_by_name("applicantDetails.flightNo", "SQ706").unwrap();
    session
        .set_by_name("dateTimeOfApplicationTransfer", "12/12/2024 09:30 AM")
        .unwrap();
    session
        .set_by_name("dateTimeOfVisaDetermination", "15/12/2024 02:00 PM")
        .unwrap();

    assert!(session.can_submit());
    let config = session.submit().unwrap().clone();
    assert!(config.reference_no.starts_with("REF"));

    let html = render_notice(
        config.clone().into_partial(),
        &RenderOptions {
            format: Format::Html,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(html.contains(&config.reference_no));
    assert!(html.contains("JANE ROE"));
}

#[test]
fn unknown_field_surfaces_as_error() {
    let mut session = FormSession::new();
    match session.set_by_name("applicantDetails.middleName", "Q") {
        Err(Error::UnknownField(name)) => assert_eq!(name, "applicantDetails.middleName"),
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn wizard_output_renders_with_its_own_references() {
    let mut prompter = ScriptedPrompter::new([
        "REF10000001",
        "",
        "Jane Roe",
        "X1234567X",
        "BKK - Suvarnabhumi Intl.",
        "20/12/2024 at 10:15 AM",
        "SQ706",
        "12/12/2024 09:30 AM",
        "15/12/2024 02:00 PM",
    ]);
    let config = run_wizard(&mut prompter).unwrap();
    assert_eq!(config.reference_no, "REF10000001");
    assert!(config.payment_ref_no.starts_with("PAY"));

    let text = render_notice(
        config.into_partial(),
        &RenderOptions {
            format: Format::Text,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(text.contains("Reference No. REF10000001"));
    assert!(text.contains("Flight No: SQ706"));
}

#[test]
fn gating_blocks_until_every_required_field_is_set() {
    let mut session = FormSession::new();
    let missing = session.missing_required();
    assert_eq!(missing.len(), 7);
    assert!(!missing.contains(&FormField::ReferenceNo));
    assert!(!missing.contains(&FormField::PaymentRefNo));

    for field in missing {
        assert!(!session.can_submit());
        session.set(field, "filled").unwrap();
    }
    assert!(session.can_submit());
}
