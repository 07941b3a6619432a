//! Render one notice in both formats from an inline partial config.

use evoa_notice::config::PartialNoticeConfig;
use evoa_notice::render::{render_notice, Format, RenderOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("E-VOA Notice Generator - Render Example\n");

    // References are left out on purpose; the renderer fills them in.
    let partial: PartialNoticeConfig = serde_json::from_str(
        r#"{
            "applicantDetails": {
                "name": "Jane Roe",
                "passportNo": "X1234567X",
                "arrivalAirport": "BKK - Suvarnabhumi Intl.",
                "dateTimeOfArrival": "20/12/2024 at 10:15 AM",
                "flightNo": "SQ706"
            },
            "dateTimeOfApplicationTransfer": "12/12/2024 09:30 AM",
            "dateTimeOfVisaDetermination": "15/12/2024 02:00 PM"
        }"#,
    )?;

    let text = render_notice(
        partial.clone(),
        &RenderOptions {
            format: Format::Text,
            ..Default::default()
        },
    )?;
    println!("{}", "=".repeat(60));
    println!("{text}");
    println!("{}", "=".repeat(60));

    let html = render_notice(
        partial,
        &RenderOptions {
            format: Format::Html,
            ..Default::default()
        },
    )?;
    let out = std::env::temp_dir().join("evoa-notice.html");
    std::fs::write(&out, html)?;
    println!("Wrote HTML notice to {}", out.display());

    Ok(())
}
