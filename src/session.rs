//! Session facade over store, editor and exporter.
//!
//! `Session` owns the storage path and the live table for one sitting,
//! standing in for the ambient table the presentation layer would
//! otherwise hold. The shell serializes all calls, so nothing here locks;
//! two sessions pointed at the same file race with last-writer-wins on
//! save.

use std::path::{Path, PathBuf};

use crate::config;
use crate::editor::{self, ValidationError};
use crate::export::{self, ExportError};
use crate::models::record::{DocumentRecord, DocumentTable, DraftRecord};
use crate::store::{self, StoreError};

pub struct Session {
    path: PathBuf,
    table: DocumentTable,
}

impl Session {
    /// Opens a session on the canonical documents file.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(config::documents_file())
    }

    /// Opens a session on an explicit file path, loading the table once.
    /// A missing file starts the session with an empty table.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = store::load_at(&path)?;
        Ok(Self { path, table })
    }

    /// The live table.
    pub fn table(&self) -> &DocumentTable {
        &self.table
    }

    /// Path this session persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Editing ─────────────────────────────────────────────

    /// Validates a draft and appends it to the live table. The table is
    /// not persisted; saving stays an explicit step.
    pub fn add_record(&mut self, draft: DraftRecord) -> Result<DocumentRecord, ValidationError> {
        editor::add(&mut self.table, draft)
    }

    /// Replaces the live table with an externally edited one, unvalidated.
    pub fn replace_table(&mut self, edited: DocumentTable) {
        editor::replace_all(&mut self.table, edited);
    }

    /// Replaces the live table only if every row passes the presence rule.
    /// On rejection the current table stays as it was.
    pub fn replace_table_strict(&mut self, edited: DocumentTable) -> Result<(), ValidationError> {
        editor::validate_table(&edited)?;
        editor::replace_all(&mut self.table, edited);
        Ok(())
    }

    // ── Persistence ─────────────────────────────────────────

    /// Saves the live table to this session's path. On failure the
    /// in-memory table is untouched and stays available for retry.
    pub fn save_table(&self) -> Result<(), StoreError> {
        store::save_at(&self.table, &self.path)
    }

    // ── Export ──────────────────────────────────────────────

    /// CSV artifact of the live table.
    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        export::to_csv(&self.table)
    }

    /// PDF artifact of the live table.
    pub fn export_pdf(&self) -> Result<Vec<u8>, ExportError> {
        export::to_pdf(&self.table)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
