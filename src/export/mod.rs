//! 名簿の書き出し
//!
//! 拡張子で CSV / Excel を切り替える。Excel は既存のシートを残したまま
//! 新しいシートを右端に追加する。書き出せるのは .csv と .xlsx のみ。

pub mod csv;
pub mod excel;

use crate::error::{Result, ShiftRosterError};
use chrono::{DateTime, Local};
use shift_roster_common::Roster;
use std::path::Path;

/// シート名のタイムスタンプ部分（例: "10-19 03-04PM"）
pub fn timestamp_label(now: DateTime<Local>) -> String {
    now.format("%m-%d %I-%M%p").to_string()
}

/// 全員分の名簿シート名
pub fn roster_sheet_name(now: DateTime<Local>) -> String {
    format!("Shifts as of {}", timestamp_label(now))
}

/// 日別名簿のシート名
pub fn daily_sheet_name(date_token: &str, now: DateTime<Local>) -> String {
    format!("Shifts for {} as of {}", date_token.trim(), timestamp_label(now))
}

/// 書き出し形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// 拡張子から判定（.xls / .xlsm / .ods には書き出さない）
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(ShiftRosterError::UnsupportedOutput(path.display().to_string())),
        }
    }
}

/// 名簿を書き出す
///
/// `sheet_name` は Excel のときだけ使う（使用禁止文字は置き換える）。
pub fn write_roster(roster: &Roster, output: &Path, sheet_name: &str) -> Result<()> {
    let format = OutputFormat::from_path(output)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ShiftRosterError::FileNotFound(parent.display().to_string()));
        }
    }

    let table = roster.to_table();
    match format {
        OutputFormat::Csv => csv::write_csv(&table, output)?,
        OutputFormat::Xlsx => excel::append_roster_sheet(&table, output, sheet_name)?,
    }
    tracing::debug!(path = %output.display(), people = roster.len(), "roster written");
    Ok(())
}
