//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 名前入力列ではない（レイアウトとグリッドの不一致）
    #[error("Column {column} isn't a cell for someone's name: {reason}")]
    InvalidColumn { column: usize, reason: String },

    #[error("String '{token}' is not a valid shift (requires a date and time)")]
    ShiftParse { token: String },

    /// 未知のシフト種別（レイアウト設定の不備）
    #[error("Invalid shift type '{value}' at row {row}, column {column}")]
    InvalidShiftType {
        value: String,
        row: usize,
        column: usize,
    },

    #[error("Roster row {row}: {source}")]
    RosterRow {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_column() {
        let error = Error::InvalidColumn {
            column: 7,
            reason: "not in any column map".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Column 7"));
        assert!(display.contains("not in any column map"));
    }

    #[test]
    fn test_error_display_shift_parse() {
        let error = Error::ShiftParse {
            token: "Monday, 11/08".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "String 'Monday, 11/08' is not a valid shift (requires a date and time)"
        );
    }

    #[test]
    fn test_error_display_invalid_shift_type() {
        let error = Error::InvalidShiftType {
            value: "canvass".to_string(),
            row: 12,
            column: 4,
        };
        let display = format!("{}", error);
        assert!(display.contains("'canvass'"));
        assert!(display.contains("row 12"));
        assert!(display.contains("column 4"));
    }

    #[test]
    fn test_error_roster_row_keeps_source() {
        let error = Error::RosterRow {
            row: 3,
            source: Box::new(Error::ShiftParse {
                token: "garbage".to_string(),
            }),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Roster row 3"));
        assert!(display.contains("garbage"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
