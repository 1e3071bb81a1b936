//! Flat-file persistence for the document table.
//!
//! One UTF-8 CSV file with the fixed 11-column header is the only persisted
//! state. The exporter reuses this module's writer, so anything the store
//! writes it can read back unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;
use crate::models::record::{DocumentRecord, DocumentTable, COLUMNS};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read document table at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write document table at {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Malformed document table at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("Cannot encode document table: {0}")]
    Encode(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

// ─── Loading ──────────────────────────────────────────────────────────────────

/// Loads the document table from the canonical location.
pub fn load() -> Result<DocumentTable, StoreError> {
    load_at(&config::documents_file())
}

/// Loads the document table from an explicit file path.
///
/// A missing file means "no data yet": an empty table is returned and the
/// file is not created.
pub fn load_at(path: &Path) -> Result<DocumentTable, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No document table at {}, starting empty", path.display());
            return Ok(DocumentTable::new());
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let table = table_from_csv(&content)?;
    tracing::info!("Loaded {} documents from {}", table.len(), path.display());
    Ok(table)
}

// ─── Saving ───────────────────────────────────────────────────────────────────

/// Saves the document table to the canonical location.
pub fn save(table: &DocumentTable) -> Result<(), StoreError> {
    save_at(table, &config::documents_file())
}

/// Saves the document table to an explicit file path, replacing the previous
/// contents entirely. The bytes land in a sibling temp file first and are
/// renamed over the target.
pub fn save_at(table: &DocumentTable, path: &Path) -> Result<(), StoreError> {
    let bytes = table_to_csv_bytes(table)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, &bytes).map_err(|e| StoreError::Write {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved {} documents to {}", table.len(), path.display());
    Ok(())
}

// ─── CSV codec ────────────────────────────────────────────────────────────────

/// Serializes a table in the canonical column order, header first.
/// An empty table still gets its header row.
pub fn table_to_csv_bytes(table: &DocumentTable) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if table.is_empty() {
        writer
            .write_record(COLUMNS)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
    }
    for record in table.records() {
        writer
            .serialize(record)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| StoreError::Encode(e.to_string()))
}

fn table_from_csv(content: &str) -> Result<DocumentTable, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: DocumentRecord = result.map_err(malformed)?;
        records.push(record);
    }
    Ok(DocumentTable::from_records(records))
}

fn malformed(err: csv::Error) -> StoreError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    StoreError::Malformed {
        line,
        message: err.to_string(),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
