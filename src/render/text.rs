//! Plain-text rendering backend.
//!
//! Renders the same block sequence as the HTML backend in a
//! fixed-width, mail-friendly form. Prose wraps at a configurable
//! column; URLs and labeled values stay on one line so they survive
//! copy-paste. Purely decorative images (logos) are dropped, the QR and
//! barcode come through as their labeled URLs.

use crate::error::Result;
use crate::render::document::{Block, NoticeDocument, PAYMENT_LABEL, REFERENCE_LABEL, TABLE_HEADERS};
use crate::render::NoticeRenderer;

/// Default wrap column.
pub const DEFAULT_TEXT_WIDTH: usize = 72;

/// Renders the notice as wrapped plain text.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_TEXT_WIDTH,
        }
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_wrapped(lines: &mut Vec<String>, text: &str, width: usize, first: &str, rest: &str) {
    let inner = width.saturating_sub(rest.chars().count());
    for (i, line) in wrap(text, inner).into_iter().enumerate() {
        let prefix = if i == 0 { first } else { rest };
        lines.push(format!("{prefix}{line}"));
    }
}

fn push_blank(lines: &mut Vec<String>) {
    if !lines.is_empty() && lines.last().is_some_and(|l| !l.is_empty()) {
        lines.push(String::new());
    }
}

impl TextRenderer {
    fn push_block(&self, lines: &mut Vec<String>, block: &Block) {
        match block {
            // Logos carry no information in a text part.
            Block::Banner { .. } | Block::LogoRow(_) => {}
            Block::ReferenceRow {
                reference_no,
                payment_ref_no,
            } => {
                lines.push(format!("{REFERENCE_LABEL} {reference_no}").trim_end().to_string());
                lines.push(format!("{PAYMENT_LABEL} {payment_ref_no}").trim_end().to_string());
                push_blank(lines);
            }
            Block::Paragraph(text) => {
                push_wrapped(lines, text, self.width, "", "");
                push_blank(lines);
            }
            Block::SectionHeading(text) => {
                lines.push((*text).to_string());
                lines.push("-".repeat(text.chars().count()));
                push_blank(lines);
            }
            Block::DetailTable { qr, rows, barcode } => {
                lines.push(format!("{}: {}", TABLE_HEADERS[0], qr.src));
                for row in rows {
                    lines.push(format!("{} {}", row.label, row.value).trim_end().to_string());
                }
                lines.push(format!("{}: {}", TABLE_HEADERS[2], barcode.src));
                push_blank(lines);
            }
            Block::MetaLine { label, value } => {
                lines.push(format!("{label} {value}").trim_end().to_string());
            }
            Block::Alert(text) => {
                push_blank(lines);
                push_wrapped(lines, text, self.width, "", "");
                push_blank(lines);
            }
            Block::NoteList { heading, items } => {
                lines.push((*heading).to_string());
                for item in *items {
                    push_wrapped(lines, item, self.width, "  - ", "    ");
                }
                push_blank(lines);
            }
            Block::Note { heading, body } => {
                lines.push((*heading).to_string());
                push_wrapped(lines, body, self.width, "", "");
                push_blank(lines);
            }
            Block::Signature(sign_off) => {
                push_blank(lines);
                for line in *sign_off {
                    lines.push((*line).to_string());
                }
            }
        }
    }
}

impl NoticeRenderer for TextRenderer {
    fn render(&self, document: &NoticeDocument) -> Result<String> {
        let mut lines = Vec::new();
        for block in &document.blocks {
            self.push_block(&mut lines, block);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap("one two three four five six seven", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap("see https://example.com/a/very/long/path now", 10);
        assert!(lines.contains(&"https://example.com/a/very/long/path".to_string()));
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn list_items_keep_a_hanging_indent() {
        let mut lines = Vec::new();
        push_wrapped(&mut lines, "alpha beta gamma delta", 12, "  - ", "    ");
        assert_eq!(lines[0], "  - alpha");
        assert!(lines[1..].iter().all(|l| l.starts_with("    ")));
    }
}
