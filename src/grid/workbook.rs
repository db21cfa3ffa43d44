//! ワークブック（xlsx / xlsm / xls / ods）の読み込み

use super::SheetSelector;
use crate::error::{Result, ShiftRosterError};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveTime;
use shift_roster_common::Grid;
use std::path::Path;

fn read_error(path: &Path, err: impl std::fmt::Display) -> ShiftRosterError {
    ShiftRosterError::SpreadsheetRead(format!("{}: {}", path.display(), err))
}

/// 日付セルを文字列に変換
///
/// シリアル値のままだと書き戻したときに数値になるため、
/// 日付のみ "%Y-%m-%d"、時刻を含めば "%Y-%m-%d %H:%M:%S"、1日未満は時刻のみにする。
fn datetime_text(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        let seconds = (value.as_f64() * 86_400.0).round() as i64;
        return format!("{}:{:02}:{:02}", seconds / 3600, seconds % 3600 / 60, seconds % 60);
    }
    let Some(datetime) = value.as_datetime() else {
        return value.as_f64().to_string();
    };
    let time = datetime.time();
    if value.as_f64() < 1.0 {
        time.format("%H:%M:%S").to_string()
    } else if time == NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// セルを表示文字列に変換
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(value) => datetime_text(value),
        other => other.to_string(),
    }
}

/// 使用範囲を A1 起点の表に変換
///
/// calamine の Range は最初に値のあるセルから始まるため、
/// 左上の空き行・空き列を補って見た目どおりの座標に揃える。
fn range_to_table(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut table: Grid = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        table.push(cells);
    }
    table
}

/// ワークブックのシート名一覧（左から順）
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|e| read_error(path, e))?;
    Ok(workbook.sheet_names())
}

/// 指定シートを表として読み込む
pub fn read_sheet(path: &Path, sheet: &SheetSelector) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(path, e))?;
    let names = workbook.sheet_names();

    let name = match sheet {
        SheetSelector::First => names.first().cloned(),
        SheetSelector::Last => names.last().cloned(),
        SheetSelector::Named(wanted) => names.iter().find(|n| *n == wanted).cloned(),
    };
    let name = name.ok_or_else(|| ShiftRosterError::SheetNotFound {
        path: path.display().to_string(),
        sheet: match sheet {
            SheetSelector::Named(wanted) => wanted.clone(),
            _ => "(any)".to_string(),
        },
    })?;

    tracing::debug!(path = %path.display(), sheet = %name, "reading worksheet");
    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| read_error(path, e))?;
    Ok(range_to_table(&range))
}

/// 全シートを (シート名, 表) として読み込む（左から順）
pub fn read_all_sheets(path: &Path) -> Result<Vec<(String, Grid)>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(path, e))?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| read_error(path, e))?;
        sheets.push((name, range_to_table(&range)));
    }
    Ok(sheets)
}
