//! グリッドスキャナー
//!
//! 申込グリッド全体を走査し、名前が書かれたセルごとに SignupRecord を生成する。
//! 行単位で遅延評価し、1行内の名前入力列はまとめて処理する。

use crate::cell::{extract_identity, split_turf_and_location};
use crate::error::Result;
use crate::layout::{LayoutConfig, SECOND_ORGANIZER_OFFSET};
use crate::resolver::resolve;
use crate::types::SignupRecord;
use std::collections::BTreeSet;

/// 名前として扱う最小文字数（この文字数以下のセルは読み飛ばす）
pub const DEFAULT_MIN_NAME_LEN: usize = 5;

/// 行・セルの文字列グリッド（0始まりで保持）
pub type Grid = Vec<Vec<String>>;

/// 1始まりの列番号でセルを取得（範囲外は空文字）
fn cell_at(cells: &[String], column: usize) -> &str {
    column
        .checked_sub(1)
        .and_then(|i| cells.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

pub struct GridScanner<'a> {
    layout: &'a LayoutConfig,
    columns: BTreeSet<usize>,
    first_row: usize,
    min_name_len: usize,
}

impl<'a> GridScanner<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self {
            layout,
            columns: layout.name_columns(),
            first_row: layout.first_row().unwrap_or(usize::MAX),
            min_name_len: DEFAULT_MIN_NAME_LEN,
        }
    }

    pub fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = min_name_len;
        self
    }

    /// 担当区域セルの列
    ///
    /// 2列右も名前入力列（2人で同じ日付を共有するレイアウト）なら 4列右、そうでなければ 2列右。
    fn turf_column(&self, column: usize) -> usize {
        if self.columns.contains(&(column + SECOND_ORGANIZER_OFFSET)) {
            column + 2 * SECOND_ORGANIZER_OFFSET
        } else {
            column + SECOND_ORGANIZER_OFFSET
        }
    }

    /// 1行分を走査（row_number は1始まり）
    pub fn scan_row(&self, row_number: usize, cells: &[String]) -> Result<Vec<SignupRecord>> {
        let mut records = Vec::new();
        if row_number < self.first_row {
            return Ok(records);
        }

        for &column in &self.columns {
            let raw_name = cell_at(cells, column);
            let name = raw_name.trim();
            if name.chars().count() <= self.min_name_len {
                if !name.is_empty() {
                    tracing::debug!(
                        row_number,
                        column,
                        text = name,
                        "too short for a name, skipped"
                    );
                }
                continue;
            }

            let slot = resolve(self.layout, row_number, column)?;
            let (Some(time), Some(shift_type)) = (slot.time, slot.shift_type) else {
                tracing::debug!(row_number, column, "no time block for this row, skipped");
                continue;
            };

            let raw_contact = cell_at(cells, column + 1);
            let (phone, email) = extract_identity(raw_contact);
            let (turf, report_location) =
                split_turf_and_location(cell_at(cells, self.turf_column(column)));

            records.push(SignupRecord {
                raw_name: raw_name.to_string(),
                raw_contact: raw_contact.to_string(),
                row: row_number,
                column,
                date: slot.date,
                time,
                shift_type,
                name: name.to_string(),
                phone,
                email,
                turf,
                report_location,
            });
        }

        Ok(records)
    }

    /// グリッド全体を走査
    ///
    /// 行ごとに遅延評価する。レイアウト不一致のエラーはその行で返る。
    pub fn scan<'s, I, R>(&'s self, rows: I) -> impl Iterator<Item = Result<SignupRecord>> + 's
    where
        I: IntoIterator<Item = R> + 's,
        I::IntoIter: 's,
        R: AsRef<[String]> + 's,
    {
        rows.into_iter()
            .enumerate()
            .flat_map(move |(index, row)| match self.scan_row(index + 1, row.as_ref()) {
                Ok(records) => records.into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            })
    }
}

/// グリッドを走査して全申込を収集
pub fn scan_grid(grid: &[Vec<String>], layout: &LayoutConfig) -> Result<Vec<SignupRecord>> {
    let scanner = GridScanner::new(layout);
    let records = scanner.scan(grid).collect::<Result<Vec<_>>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RowBlock;

    /// 平日: A=時間, B=名前1, C=連絡先1, D=名前2, E=連絡先2, F=区域（共有）
    /// 週末: G=名前1, H=連絡先1, I=名前2, J=連絡先2, K=区域（共有）
    fn layout() -> LayoutConfig {
        LayoutConfig::new()
            .with_column(2, "Monday, 11/08")
            .with_weekend_column(7, "Saturday, 11/13")
            .with_rows(3, RowBlock::shift("10AM - 11AM", "walkthrough"))
            .with_rows(5, RowBlock::break_block())
            .with_rows(6, RowBlock::shift("6PM - 8PM", "phonebank"))
            .with_weekend_rows(3, RowBlock::shift("9AM - 12PM", "walkthrough"))
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn grid() -> Grid {
        vec![
            row(&["", "MONDAY", "", "", "", "", "SATURDAY"]),
            row(&["", "Organizer 1", "Contact", "Organizer 2", "Contact", "Turf", "Name"]),
            row(&[
                "10AM",
                "Jane Doe",
                "555-123-4567 jane@example.org",
                "John Smith",
                "(555)987-6543",
                "North Campus // Union Hall",
                "Ana Lopez",
                "ana@example.org",
                "",
                "",
                "Gym",
            ]),
            row(&["", "tbd", "", "", "", "", ""]),
            row(&["BREAK", "Lunch break!", "", "", "", "", ""]),
            row(&["6PM", "John Smith", "", "", "", ""]),
        ]
    }

    #[test]
    fn test_scan_grid_records() {
        let records = scan_grid(&grid(), &layout()).unwrap();
        assert_eq!(records.len(), 4);

        let jane = &records[0];
        assert_eq!((jane.row, jane.column), (3, 2));
        assert_eq!(jane.name, "Jane Doe");
        assert_eq!(jane.date, "Monday, 11/08");
        assert_eq!(jane.time, "10AM - 11AM");
        assert_eq!(jane.shift_type, "walkthrough");
        assert_eq!(jane.phone.as_deref(), Some("5551234567"));
        assert_eq!(jane.email.as_deref(), Some("jane@example.org"));
        assert_eq!(jane.turf.as_deref(), Some("North Campus"));
        assert_eq!(jane.report_location.as_deref(), Some("Union Hall"));

        let john = &records[1];
        assert_eq!(john.column, 4);
        assert_eq!(john.phone.as_deref(), Some("5559876543"));
        assert_eq!(john.turf.as_deref(), Some("North Campus"));

        let ana = &records[2];
        assert_eq!(ana.column, 7);
        assert_eq!(ana.date, "Saturday, 11/13");
        assert_eq!(ana.turf.as_deref(), Some("Gym"));
        assert_eq!(ana.phone, None);

        let evening = &records[3];
        assert_eq!(evening.row, 6);
        assert_eq!(evening.shift_type, "phonebank");
        assert_eq!(evening.turf, None);
    }

    #[test]
    fn test_scan_skips_short_names() {
        let grid = vec![
            row(&[]),
            row(&[]),
            row(&["", "Ann B", "", "Bo", "", ""]),
            row(&["", "  Eve C   ", "", "12345", "", ""]),
            row(&["", "", "", "", "", ""]),
            row(&["", "Ann Bo", "", "", "", ""]),
        ];
        let records = scan_grid(&grid, &layout()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ann Bo");
    }

    #[test]
    fn test_scan_min_name_len_option() {
        let layout = layout();
        let scanner = GridScanner::new(&layout).with_min_name_len(2);
        let cells = row(&["", "Ann B", "", "Bo", "", ""]);
        let records = scanner.scan_row(3, &cells).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ann B");
    }

    #[test]
    fn test_scan_skips_rows_before_first_block() {
        let layout = layout();
        let scanner = GridScanner::new(&layout);
        let cells = row(&["", "Somebody Important", "", "", "", ""]);
        assert!(scanner.scan_row(1, &cells).unwrap().is_empty());
        assert!(scanner.scan_row(2, &cells).unwrap().is_empty());
        assert_eq!(scanner.scan_row(3, &cells).unwrap().len(), 1);
    }

    #[test]
    fn test_scan_skips_break_rows() {
        let layout = layout();
        let scanner = GridScanner::new(&layout);
        let cells = row(&["", "Lunch break!", "", "", "", ""]);
        assert!(scanner.scan_row(5, &cells).unwrap().is_empty());
    }

    #[test]
    fn test_scan_short_rows_are_padded() {
        let layout = layout();
        let scanner = GridScanner::new(&layout);
        let cells = row(&["", "Jane Doe"]);
        let records = scanner.scan_row(3, &cells).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw_contact, "");
        assert_eq!(records[0].turf, None);
    }

    #[test]
    fn test_turf_column_offsets() {
        let layout = layout();
        let scanner = GridScanner::new(&layout);
        assert_eq!(scanner.turf_column(2), 6);
        assert_eq!(scanner.turf_column(4), 6);
        assert_eq!(scanner.turf_column(7), 11);
        assert_eq!(scanner.turf_column(9), 11);
    }

    #[test]
    fn test_scan_is_lazy_per_row() {
        let layout = layout();
        let scanner = GridScanner::new(&layout);
        let grid = grid();
        let mut iter = scanner.scan(grid.iter());
        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.name, "Jane Doe");
    }
}
