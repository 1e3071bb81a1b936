//! CSV and PDF export artifacts.
//!
//! Both exporters take the table read-only and hand back an owned byte
//! buffer; the disk helpers below wrap them for the exports directory.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::*;
use thiserror::Error;

use crate::config;
use crate::models::record::{DocumentRecord, DocumentTable};
use crate::store::{self, StoreError};

/// Download name of the CSV artifact.
pub const CSV_EXPORT_FILE_NAME: &str = "documents.csv";
/// Download name of the PDF artifact.
pub const PDF_EXPORT_FILE_NAME: &str = "documents.pdf";
/// MIME type the shell serves the CSV artifact under.
pub const CSV_MIME_TYPE: &str = "text/csv";
/// MIME type the shell serves the PDF artifact under.
pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] StoreError),

    #[error("PDF export failed: {0}")]
    Pdf(String),

    #[error("Cannot write export to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ─── Byte-buffer exporters ────────────────────────────────────────────────────

/// Serializes the table as downloadable CSV bytes.
///
/// Same dialect as the store, so a saved file and an exported buffer are
/// interchangeable.
pub fn to_csv(table: &DocumentTable) -> Result<Vec<u8>, ExportError> {
    let bytes = store::table_to_csv_bytes(table)?;
    tracing::info!("Exported {} documents as CSV", table.len());
    Ok(bytes)
}

/// Renders the table as a single-font portrait PDF. Returns PDF bytes.
///
/// One centered title line, then one line per record: file name, doc ref,
/// title and status joined with pipes, values verbatim. The cursor walks
/// down in fixed steps and rolls onto a fresh page when it runs out.
pub fn to_pdf(table: &DocumentTable) -> Result<Vec<u8>, ExportError> {
    let title = "All Documents";
    let (doc, page1, layer1) = PdfDocument::new(title, Mm(210.0), Mm(297.0), "Layer 1");
    let mut layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(280.0);

    layer.use_text(title, 10.0, centered_x(title, 10.0), y, &font);
    y -= Mm(10.0);

    for record in table.records() {
        if y < Mm(15.0) {
            let (page, new_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            y = Mm(280.0);
        }
        layer.use_text(row_line(record), 10.0, Mm(10.0), y, &font);
        y -= Mm(8.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))?;

    tracing::info!("Exported {} documents as PDF", table.len());
    Ok(bytes)
}

/// Formats the pipe-joined line for one record. Values go in verbatim;
/// a blank status renders as an empty last column.
fn row_line(record: &DocumentRecord) -> String {
    let status = record.status.as_ref().map(|s| s.as_str()).unwrap_or("");
    format!(
        "{} | {} | {} | {}",
        record.file_name, record.doc_ref, record.document_title, status
    )
}

/// Approximates the x offset that centers `text` on an A4 page. No font
/// metrics are loaded for the builtin Helvetica, so an average glyph width
/// of half the font size stands in.
fn centered_x(text: &str, font_size: f32) -> Mm {
    let width_mm = text.chars().count() as f32 * font_size * 0.5 * 0.3528;
    Mm(((210.0 - width_mm) / 2.0).max(0.0))
}

// ─── Disk helpers ─────────────────────────────────────────────────────────────

/// Writes the CSV artifact into the exports directory. Returns the written path.
pub fn write_csv_export(table: &DocumentTable) -> Result<PathBuf, ExportError> {
    let bytes = to_csv(table)?;
    write_export_to(&bytes, CSV_EXPORT_FILE_NAME, &config::exports_dir())
}

/// Writes the PDF artifact into the exports directory. Returns the written path.
pub fn write_pdf_export(table: &DocumentTable) -> Result<PathBuf, ExportError> {
    let bytes = to_pdf(table)?;
    write_export_to(&bytes, PDF_EXPORT_FILE_NAME, &config::exports_dir())
}

/// Writes export bytes under an explicit directory, creating it on demand.
pub fn write_export_to(bytes: &[u8], filename: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Write {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|e| ExportError::Write {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
