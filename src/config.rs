use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "DocTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the persisted document table.
pub const DOCUMENTS_FILE_NAME: &str = "documents.csv";

/// Get the application data directory
/// ~/DocTrack/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("DocTrack")
}

/// Get the canonical path of the persisted document table
pub fn documents_file() -> PathBuf {
    app_data_dir().join(DOCUMENTS_FILE_NAME)
}

/// Get the directory export artifacts are written into
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    format!("warn,{}=info", env!("CARGO_PKG_NAME"))
}
