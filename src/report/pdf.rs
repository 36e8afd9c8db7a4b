use chrono::Local;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::core::Reconciliation;
use crate::error::AppError;

use super::locale::Locale;

// A4 portrait.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;
const BODY_WIDTH_CHARS: usize = 90;

/// Render the audit report for one reconciliation outcome.
///
/// Output is byte-for-byte deterministic for identical inputs apart from
/// the generation-date line, which is stamped at render time with the
/// local clock (independent of the ledger timestamp).
pub fn render(recon: &Reconciliation, locale: Locale) -> Result<Vec<u8>, AppError> {
    let s = locale.strings();

    let (doc, page, layer) = PdfDocument::new(
        s.title,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        y: PAGE_HEIGHT - MARGIN,
    };

    writer.line(s.title, 18.0, &bold);
    writer.blank();

    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    writer.line(&format!("{} {}", s.date_label, generated), 11.0, &regular);
    writer.blank();

    writer.line(s.section_summary, 13.0, &bold);
    writer.line(&format!("{} {}", s.total_initial, recon.original.len()), 11.0, &regular);
    writer.line(&format!("{} {}", s.total_removed, recon.matched.len()), 11.0, &regular);
    writer.line(&format!("{} {}", s.total_final, recon.retained.len()), 11.0, &regular);
    writer.blank();

    for row in wrap(s.conclusion, BODY_WIDTH_CHARS) {
        writer.line(&row, 10.0, &regular);
    }
    writer.blank();

    writer.line(s.section_details, 13.0, &bold);
    writer.columns(s.header_ip, s.header_status, &bold);

    if recon.matched.is_empty() {
        // Explicit placeholder so the detail section is never an empty table.
        writer.columns("N/A", s.status_maintained, &regular);
    } else {
        // BTreeSet iterates lexicographically.
        for ip in &recon.matched {
            writer.columns(ip, s.status_revoked, &regular);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Report(e.to_string()))
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, AppError> {
    doc.add_builtin_font(font)
        .map_err(|e| AppError::Report(e.to_string()))
}

/// Tracks the vertical cursor and starts a fresh A4 page when the current
/// one runs out of room.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN {
            self.next_page();
        }
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    /// Two-column row: address on the left, status label on the right half.
    fn columns(&mut self, left: &str, right: &str, font: &IndirectFontRef) {
        if self.y < MARGIN {
            self.next_page();
        }
        self.layer.use_text(left, 10.0, Mm(MARGIN), Mm(self.y), font);
        self.layer.use_text(right, 10.0, Mm(PAGE_WIDTH / 2.0), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn blank(&mut self) {
        self.y -= LINE_HEIGHT / 2.0;
    }

    fn next_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }
}

/// Greedy word wrap; the builtin fonts are close enough to fixed-width at
/// report sizes for a character budget to work.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
