//! Core of a project document tracker.
//!
//! A flat-CSV record store, a presence-validating editor, CSV and PDF
//! exporters, and the session facade a presentation shell drives. The
//! shell itself (form, grid, buttons) lives outside this crate.

pub mod config;
pub mod editor;
pub mod export;
pub mod models;
pub mod session;
pub mod store;

pub use editor::ValidationError;
pub use export::ExportError;
pub use models::{Discipline, DocumentRecord, DocumentTable, DraftRecord, Status, COLUMNS};
pub use session::Session;
pub use store::StoreError;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber: `RUST_LOG` when set, the crate
/// default otherwise. The shell calls this once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} ready", config::APP_NAME, config::APP_VERSION);
}
