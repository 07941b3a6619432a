//! HTML rendering backend.
//!
//! Produces a complete standalone page with a `<style>` block, suitable
//! for mailing or archiving. Dynamic values are escaped; the fixed copy
//! is emitted verbatim.

use crate::error::Result;
use crate::render::document::{
    Block, ImageRef, NoticeDocument, PAYMENT_LABEL, REFERENCE_LABEL, TABLE_HEADERS,
};
use crate::render::NoticeRenderer;

const DOC_TITLE: &str = "Electronic Visa on Arrival";

const STYLE: &str = r#"body { margin: 0; background: #f9fafb; padding: 32px; font-family: Arial, Helvetica, sans-serif; color: #111827; line-height: 1.5; }
.sheet { max-width: 896px; margin: 0 auto; background: #ffffff; }
.band { background: #0072bc; padding: 10px 24px; }
.accent { height: 16px; background: #8cc63f; font-size: 0; }
.content { padding: 32px; }
.refs { width: 100%; color: #4b5563; margin-bottom: 32px; }
.refs td.right { text-align: right; }
.refs .value, .meta .value { color: #000000; }
h2 { margin-top: 32px; font-size: 20px; font-weight: normal; color: #4b5563; }
table.details { width: 100%; border-collapse: collapse; border: 1px solid #e5e7eb; }
table.details td { padding: 16px; vertical-align: top; }
table.details tr.head td { background: #e6f3f7; font-weight: 500; }
table.details td.qr { width: 100px; }
table.details td.code { width: 180px; }
table.details td img { display: block; }
.detail-rows p { margin: 0 0 8px; }
.label, .meta { color: #4b5563; }
.alert { font-weight: bold; }
.notes h3 { margin-bottom: 4px; font-size: 16px; font-weight: 600; }
.notes ul { margin: 0; padding-left: 20px; }
.notes li { margin-bottom: 8px; }
.signature { margin-top: 32px; text-align: right; }
.signature p, .meta { margin: 4px 0; }
.logos { margin-top: 32px; padding-top: 32px; border-top: 1px solid #e5e7eb; text-align: center; }
.logos img { margin: 0 16px; }"#;

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn img_tag(image: &ImageRef) -> String {
    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}">"#,
        escape_html(&image.src),
        escape_html(image.alt),
        image.width,
        image.height
    )
}

/// Renders the notice as a self-contained HTML page.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn push_block(&self, html: &mut String, block: &Block) {
        match block {
            Block::Banner { logo } => {
                html.push_str(&format!(
                    "<div class=\"band\">{}</div>\n<div class=\"accent\"></div>\n",
                    img_tag(logo)
                ));
            }
            Block::ReferenceRow {
                reference_no,
                payment_ref_no,
            } => {
                html.push_str(&format!(
                    "<table class=\"refs\"><tr>\
<td>{REFERENCE_LABEL} <span class=\"value\">{}</span></td>\
<td class=\"right\">{PAYMENT_LABEL} <span class=\"value\">{}</span></td>\
</tr></table>\n",
                    escape_html(reference_no),
                    escape_html(payment_ref_no)
                ));
            }
            Block::Paragraph(text) => {
                html.push_str(&format!("<p>{text}</p>\n"));
            }
            Block::SectionHeading(text) => {
                html.push_str(&format!("<h2>{text}</h2>\n"));
            }
            Block::DetailTable { qr, rows, barcode } => {
                html.push_str("<table class=\"details\">\n<tr class=\"head\">");
                for header in TABLE_HEADERS {
                    html.push_str(&format!("<td>{header}</td>"));
                }
                html.push_str("</tr>\n<tr>\n");
                html.push_str(&format!("<td class=\"qr\">{}</td>\n", img_tag(qr)));
                html.push_str("<td class=\"detail-rows\">\n");
                for row in rows {
                    html.push_str(&format!(
                        "<p><span class=\"label\">{}</span> {}</p>\n",
                        row.label,
                        escape_html(&row.value)
                    ));
                }
                html.push_str("</td>\n");
                html.push_str(&format!("<td class=\"code\">{}</td>\n", img_tag(barcode)));
                html.push_str("</tr>\n</table>\n");
            }
            Block::MetaLine { label, value } => {
                html.push_str(&format!(
                    "<p class=\"meta\">{label} <span class=\"value\">{}</span></p>\n",
                    escape_html(value)
                ));
            }
            Block::Alert(text) => {
                html.push_str(&format!("<p class=\"alert\">{text}</p>\n"));
            }
            Block::NoteList { heading, items } => {
                html.push_str(&format!("<div class=\"notes\">\n<h3>{heading}</h3>\n<ul>\n"));
                for item in *items {
                    html.push_str(&format!("<li>{item}</li>\n"));
                }
                html.push_str("</ul>\n</div>\n");
            }
            Block::Note { heading, body } => {
                html.push_str(&format!(
                    "<div class=\"notes\">\n<h3>{heading}</h3>\n<p>{body}</p>\n</div>\n"
                ));
            }
            Block::Signature(lines) => {
                html.push_str("<div class=\"signature\">\n");
                for line in *lines {
                    html.push_str(&format!("<p>{line}</p>\n"));
                }
                html.push_str("</div>\n");
            }
            Block::LogoRow(logos) => {
                html.push_str("<div class=\"logos\">\n");
                for logo in logos {
                    html.push_str(&img_tag(logo));
                    html.push('\n');
                }
                html.push_str("</div>\n");
            }
        }
    }
}

impl NoticeRenderer for HtmlRenderer {
    fn render(&self, document: &NoticeDocument) -> Result<String> {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str(&format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{DOC_TITLE}</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n<div class=\"sheet\">\n"
        ));
        let mut in_content = false;
        for block in &document.blocks {
            // Everything below the masthead sits in the padded container.
            if !in_content && !matches!(block, Block::Banner { .. }) {
                html.push_str("<div class=\"content\">\n");
                in_content = true;
            }
            self.push_block(&mut html, block);
        }
        if in_content {
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n</body>\n</html>\n");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn img_tag_escapes_the_source() {
        let image = ImageRef {
            src: "https://example.com/?a=1&b=2".to_string(),
            alt: "QR Code",
            width: 100,
            height: 100,
        };
        assert_eq!(
            img_tag(&image),
            r#"<img src="https://example.com/?a=1&amp;b=2" alt="QR Code" width="100" height="100">"#
        );
    }
}
