//! Structural checks on the HTML backend using a real parser.

use evoa_notice::config::PartialNoticeConfig;
use evoa_notice::render::{render_notice, Format, RenderOptions};
use scraper::{Html, Selector};

fn fixture_html() -> Html {
    let partial = PartialNoticeConfig::from_path("tests/fixtures/full_config.json")
        .expect("read fixture");
    let html = render_notice(
        partial,
        &RenderOptions {
            format: Format::Html,
            ..Default::default()
        },
    )
    .expect("render");
    Html::parse_document(&html)
}

#[test]
fn page_has_title_and_stylesheet() {
    let document = fixture_html();
    let title_sel = Selector::parse("title").unwrap();
    let style_sel = Selector::parse("style").unwrap();

    let title = document
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>())
        .unwrap_or_default();
    assert_eq!(title, "Electronic Visa on Arrival");
    let style = document
        .select(&style_sel)
        .next()
        .map(|s| s.text().collect::<String>())
        .unwrap_or_default();
    assert!(style.contains("#0072bc"));
    assert!(style.contains("#8cc63f"));
    assert!(style.contains("#e6f3f7"));
}

#[test]
fn images_point_where_they_should() {
    let document = fixture_html();
    let img_sel = Selector::parse("img").unwrap();
    let images: Vec<_> = document.select(&img_sel).collect();
    assert_eq!(images.len(), 5);

    let srcs: Vec<_> = images
        .iter()
        .map(|img| img.value().attr("src").unwrap_or_default())
        .collect();
    assert_eq!(srcs[0], "/visa-logo.png");
    assert_eq!(
        srcs[1],
        "https://api.qrserver.com/v1/create-qr-code/?size=100x100&data=REF19283746"
    );
    assert_eq!(srcs[2], "https://barcodeapi.org/api/code128/PAY56473829");
    assert_eq!(srcs[3], "/visa-footer-logo.png");
    assert_eq!(srcs[4], "/gw-logo.png");

    assert_eq!(images[1].value().attr("alt"), Some("QR Code"));
    assert_eq!(images[1].value().attr("width"), Some("100"));
    assert_eq!(images[1].value().attr("height"), Some("100"));
    assert_eq!(images[2].value().attr("alt"), Some("E-VOA Pre-Approval Code"));
    assert_eq!(images[2].value().attr("width"), Some("180"));
    assert_eq!(images[2].value().attr("height"), Some("48"));
    assert_eq!(images[0].value().attr("alt"), Some("eVisa Thailand Logo"));
}

#[test]
fn details_table_lays_out_headers_and_rows() {
    let document = fixture_html();
    let head_sel = Selector::parse("table.details tr.head td").unwrap();
    let headers: Vec<String> = document
        .select(&head_sel)
        .map(|td| td.text().collect::<String>())
        .collect();
    assert_eq!(headers, ["QR Code", "Detail", "E-VOA Pre-Approval Code"]);

    let rows_sel = Selector::parse("table.details td.detail-rows p").unwrap();
    let rows: Vec<String> = document
        .select(&rows_sel)
        .map(|p| p.text().collect::<String>())
        .collect();
    assert_eq!(
        rows,
        [
            "Name: JANE ROE",
            "Passport No.: X1234567X",
            "Arrival Airport: BKK - SUVARNABHUMI INTL.",
            "Date/time of Arrival: 20/12/2024 AT 10:15 AM",
            "Flight No: SQ706",
        ]
    );
}

#[test]
fn fixed_copy_is_present_in_order() {
    let document = fixture_html();
    let p_sel = Selector::parse("div.content > p").unwrap();
    let paragraphs: Vec<String> = document
        .select(&p_sel)
        .map(|p| p.text().collect::<String>())
        .collect();

    assert_eq!(paragraphs[0], "Dear");
    assert!(paragraphs[1].starts_with("Thank you for your application"));
    assert!(paragraphs[2].starts_with("We are delighted to inform you"));
    assert!(paragraphs
        .iter()
        .any(|p| p.starts_with("PRINT OUT THIS EMAIL TOGETHER WITH THE ATTACHED TM88 FORM")));

    let h2_sel = Selector::parse("h2").unwrap();
    let heading = document
        .select(&h2_sel)
        .next()
        .map(|h| h.text().collect::<String>())
        .unwrap_or_default();
    assert_eq!(heading, "Your Electronic Visa on Arrival details");

    let li_sel = Selector::parse("div.notes li").unwrap();
    let items: Vec<String> = document
        .select(&li_sel)
        .map(|li| li.text().collect::<String>())
        .collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].contains("does not guarantee your entry into Thailand"));
    assert!(items[1].contains("10,000 Baht per person or 20,000 Baht per family"));
}

#[test]
fn signature_block_closes_the_notice() {
    let document = fixture_html();
    let sig_sel = Selector::parse("div.signature p").unwrap();
    let lines: Vec<String> = document
        .select(&sig_sel)
        .map(|p| p.text().collect::<String>())
        .collect();
    assert_eq!(
        lines,
        [
            "If you have any questions, please contact Contact@evisathailand.com",
            "Best regards,",
            "eVisa Thailand",
        ]
    );
}

#[test]
fn markup_in_values_is_escaped() {
    let json = r#"{ "applicantDetails": { "name": "<script>alert(1)</script>" } }"#;
    let partial: PartialNoticeConfig = serde_json::from_str(json).expect("parse");
    let html = render_notice(
        partial,
        &RenderOptions {
            format: Format::Html,
            ..Default::default()
        },
    )
    .expect("render");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;SCRIPT&gt;"));
}
