use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Discipline, Status};

/// Column labels of the persisted table, in schema order.
pub const COLUMNS: [&str; 11] = [
    "File Name",
    "Doc Ref",
    "Document Title",
    "Status",
    "Discipline",
    "File Type",
    "Rev Date",
    "Delivery Date",
    "Project",
    "Originator",
    "Project Stage",
];

/// One tracked project document. Field order is the persisted column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(rename = "Doc Ref")]
    pub doc_ref: String,
    #[serde(rename = "Document Title")]
    pub document_title: String,
    #[serde(rename = "Status")]
    pub status: Option<Status>,
    #[serde(rename = "Discipline")]
    pub discipline: Discipline,
    #[serde(rename = "File Type")]
    pub file_type: String,
    #[serde(rename = "Rev Date")]
    pub rev_date: NaiveDate,
    #[serde(rename = "Delivery Date")]
    pub delivery_date: NaiveDate,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Originator")]
    pub originator: String,
    #[serde(rename = "Project Stage")]
    pub project_stage: String,
}

/// Candidate row from the entry form, not yet validated.
/// Dates left as `None` default to today when the row is added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecord {
    pub file_name: String,
    pub doc_ref: String,
    pub document_title: String,
    pub status: Option<Status>,
    pub discipline: Option<Discipline>,
    pub file_type: String,
    pub rev_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub project: String,
    pub originator: String,
    pub project_stage: String,
}

/// Ordered collection of tracked documents, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTable {
    records: Vec<DocumentRecord>,
}

impl DocumentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn push(&mut self, record: DocumentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
