//! In-memory mutations of the document table.
//!
//! Two operations: a validated append fed by the entry form, and the
//! unvalidated bulk replace behind the grid editor. Neither touches disk;
//! persistence is an explicit save.

use chrono::Local;
use thiserror::Error;

use crate::models::record::{DocumentRecord, DocumentTable, DraftRecord};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field is empty: {field}")]
    MissingRequiredField { field: String },
}

/// Validates a draft and appends it to the table.
///
/// Required fields are checked in column order and the first empty one is
/// reported. Status may stay blank; either date falls back to today.
pub fn add(
    table: &mut DocumentTable,
    draft: DraftRecord,
) -> Result<DocumentRecord, ValidationError> {
    if draft.file_name.is_empty() {
        return Err(missing("File Name"));
    }
    if draft.doc_ref.is_empty() {
        return Err(missing("Doc Ref"));
    }
    if draft.document_title.is_empty() {
        return Err(missing("Document Title"));
    }
    let Some(discipline) = draft.discipline else {
        return Err(missing("Discipline"));
    };
    if draft.file_type.is_empty() {
        return Err(missing("File Type"));
    }
    if draft.project.is_empty() {
        return Err(missing("Project"));
    }
    if draft.originator.is_empty() {
        return Err(missing("Originator"));
    }
    if draft.project_stage.is_empty() {
        return Err(missing("Project Stage"));
    }

    let today = Local::now().date_naive();
    let record = DocumentRecord {
        file_name: draft.file_name,
        doc_ref: draft.doc_ref,
        document_title: draft.document_title,
        status: draft.status,
        discipline,
        file_type: draft.file_type,
        rev_date: draft.rev_date.unwrap_or(today),
        delivery_date: draft.delivery_date.unwrap_or(today),
        project: draft.project,
        originator: draft.originator,
        project_stage: draft.project_stage,
    };
    table.push(record.clone());
    Ok(record)
}

/// Swaps in an externally edited table wholesale.
///
/// No validation happens on this path; the grid editor is trusted as-is.
/// Callers wanting the presence rule enforced run `validate_table` first.
pub fn replace_all(table: &mut DocumentTable, edited: DocumentTable) {
    tracing::info!(
        "Replacing document table: {} -> {} rows",
        table.len(),
        edited.len()
    );
    *table = edited;
}

/// Presence check over a whole table, for the strict replace path.
///
/// The record type already guarantees Discipline and both dates, so only
/// the required text columns can be blank after a bulk edit.
pub fn validate_table(table: &DocumentTable) -> Result<(), ValidationError> {
    for record in table.records() {
        for (field, value) in [
            ("File Name", &record.file_name),
            ("Doc Ref", &record.doc_ref),
            ("Document Title", &record.document_title),
            ("File Type", &record.file_type),
            ("Project", &record.project),
            ("Originator", &record.originator),
            ("Project Stage", &record.project_stage),
        ] {
            if value.is_empty() {
                return Err(missing(field));
            }
        }
    }
    Ok(())
}

fn missing(field: &str) -> ValidationError {
    tracing::warn!("Rejected document row: {field} is empty");
    ValidationError::MissingRequiredField {
        field: field.into(),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Discipline, Status};
    use chrono::NaiveDate;

    fn make_draft() -> DraftRecord {
        DraftRecord {
            file_name: "A1.pdf".into(),
            doc_ref: "DOC-001".into(),
            document_title: "Site Plan".into(),
            status: None,
            discipline: Some(Discipline::Civil),
            file_type: "pdf".into(),
            rev_date: None,
            delivery_date: None,
            project: "P1".into(),
            originator: "J. Smith".into(),
            project_stage: "Design".into(),
        }
    }

    fn make_record(doc_ref: &str) -> DocumentRecord {
        DocumentRecord {
            file_name: "B2.dwg".into(),
            doc_ref: doc_ref.into(),
            document_title: "Elevation".into(),
            status: Some(Status::Approved),
            discipline: Discipline::Architecture,
            file_type: "dwg".into(),
            rev_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            project: "P2".into(),
            originator: "M. Lee".into(),
            project_stage: "Construction".into(),
        }
    }

    #[test]
    fn add_appends_and_returns_record() {
        let mut table = DocumentTable::new();

        let record = add(&mut table, make_draft()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0], record);
        assert_eq!(record.file_name, "A1.pdf");
        assert_eq!(record.doc_ref, "DOC-001");
        assert_eq!(record.discipline, Discipline::Civil);
        assert!(record.status.is_none());
    }

    #[test]
    fn add_defaults_dates_to_today() {
        let mut table = DocumentTable::new();
        let today = Local::now().date_naive();

        let record = add(&mut table, make_draft()).unwrap();

        assert_eq!(record.rev_date, today);
        assert_eq!(record.delivery_date, today);
    }

    #[test]
    fn add_keeps_explicit_dates() {
        let mut table = DocumentTable::new();
        let mut draft = make_draft();
        draft.rev_date = NaiveDate::from_ymd_opt(2024, 11, 2);
        draft.delivery_date = NaiveDate::from_ymd_opt(2024, 12, 24);

        let record = add(&mut table, draft).unwrap();

        assert_eq!(record.rev_date, NaiveDate::from_ymd_opt(2024, 11, 2).unwrap());
        assert_eq!(
            record.delivery_date,
            NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
        );
    }

    #[test]
    fn add_rejects_each_missing_required_field() {
        let cases: Vec<(&str, fn(&mut DraftRecord))> = vec![
            ("File Name", |d| d.file_name.clear()),
            ("Doc Ref", |d| d.doc_ref.clear()),
            ("Document Title", |d| d.document_title.clear()),
            ("Discipline", |d| d.discipline = None),
            ("File Type", |d| d.file_type.clear()),
            ("Project", |d| d.project.clear()),
            ("Originator", |d| d.originator.clear()),
            ("Project Stage", |d| d.project_stage.clear()),
        ];

        for (field, blank) in cases {
            let mut table = DocumentTable::new();
            let mut draft = make_draft();
            blank(&mut draft);

            let err = add(&mut table, draft).unwrap_err();
            let ValidationError::MissingRequiredField { field: reported } = err;
            assert_eq!(reported, field);
            assert_eq!(table.len(), 0);
        }
    }

    #[test]
    fn add_appends_after_existing_rows() {
        let mut table = DocumentTable::new();
        table.push(make_record("DOC-100"));

        add(&mut table, make_draft()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].doc_ref, "DOC-001");
    }

    #[test]
    fn duplicate_doc_refs_are_allowed() {
        let mut table = DocumentTable::new();

        add(&mut table, make_draft()).unwrap();
        add(&mut table, make_draft()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].doc_ref, table.records()[1].doc_ref);
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut table = DocumentTable::new();
        table.push(make_record("DOC-100"));

        let mut edited = DocumentTable::new();
        edited.push(make_record("DOC-200"));
        edited.push(make_record("DOC-201"));
        replace_all(&mut table, edited);

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].doc_ref, "DOC-200");
    }

    #[test]
    fn replace_all_accepts_blank_fields() {
        let mut table = DocumentTable::new();

        let mut bad = make_record("DOC-300");
        bad.project.clear();
        let mut edited = DocumentTable::new();
        edited.push(bad);
        replace_all(&mut table, edited);

        // the unvalidated path takes the row as-is
        assert_eq!(table.len(), 1);
        assert!(table.records()[0].project.is_empty());
    }

    #[test]
    fn validate_table_reports_blank_column() {
        let mut table = DocumentTable::new();
        table.push(make_record("DOC-301"));
        let mut bad = make_record("DOC-302");
        bad.originator.clear();
        table.push(bad);

        let err = validate_table(&table).unwrap_err();
        let ValidationError::MissingRequiredField { field } = err;
        assert_eq!(field, "Originator");
    }

    #[test]
    fn validate_table_passes_clean_table() {
        let mut table = DocumentTable::new();
        table.push(make_record("DOC-303"));

        assert!(validate_table(&table).is_ok());
    }
}
