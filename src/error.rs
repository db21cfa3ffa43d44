use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftRosterError {
    #[error("{0}")]
    Engine(#[from] shift_roster_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("Unsupported file type: {0} (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat(String),

    #[error("Unsupported output type: {0} (expected .csv or .xlsx)")]
    UnsupportedOutput(String),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(String),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster {0} is empty (no header row found)")]
    EmptyRoster(String),

    #[error("Update cancelled; nothing was written")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, ShiftRosterError>;
