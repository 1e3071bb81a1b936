pub mod enums;
pub mod record;

pub use enums::{Discipline, Status};
pub use record::{DocumentRecord, DocumentTable, DraftRecord, COLUMNS};
