//! 表ファイルの読み込み
//!
//! グリッド・名簿ともに「1行 = Vec<String>」の表として読み込む。
//! 座標は A1 を (1, 1) とする見た目どおりの位置になる。

pub mod csv;
pub mod workbook;

use crate::error::{Result, ShiftRosterError};
use shift_roster_common::Grid;
use std::path::Path;

/// 表ファイルの形式（拡張子で判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(ShiftRosterError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// ワークブックのどのシートを読むか（CSVでは無視）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    First,
    /// 一番右のシート（最新の書き出し）
    Last,
    Named(String),
}

impl SheetSelector {
    /// `--sheet` が指定されていればその名前、無ければ `default`
    pub fn or(name: Option<&str>, default: SheetSelector) -> Self {
        match name {
            Some(name) => Self::Named(name.to_string()),
            None => default,
        }
    }
}

/// 表ファイルを読み込む
pub fn read_table(path: &Path, sheet: &SheetSelector) -> Result<Grid> {
    if !path.exists() {
        return Err(ShiftRosterError::FileNotFound(path.display().to_string()));
    }

    let table = match FileFormat::from_path(path)? {
        FileFormat::Csv => csv::read_csv(path)?,
        FileFormat::Workbook => workbook::read_sheet(path, sheet)?,
    };
    tracing::debug!(path = %path.display(), rows = table.len(), "table loaded");
    Ok(table)
}
