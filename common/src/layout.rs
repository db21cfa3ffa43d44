//! グリッドレイアウト設定
//!
//! 申込グリッドのどの列がどの日付、どの行がどの時間帯かを記述する。
//! 行は「ブロック開始行」だけを持ち、各ブロックは次のブロック開始行の直前まで続く。
//!
//! JSON形式（キーは1始まりの番号を文字列で記述）:
//! ```json
//! {
//!   "columns": { "3": "Monday, 11/08", "8": "Tuesday, 11/09" },
//!   "weekend_columns": { "3": "Saturday, 11/13" },
//!   "rows": { "4": ["10:00AM - 11:00AM", "walkthrough"], "20": [null, null] },
//!   "weekend_rows": { "40": ["9:00AM - 12:00PM", "walkthrough"] }
//! }
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// 2人目のオーガナイザー列のオフセット（同じ日付の右隣の名前欄）
pub const SECOND_ORGANIZER_OFFSET: usize = 2;

/// 平日/週末の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Weekend,
}

/// 時間帯ブロック
///
/// `time` か `shift_type` のどちらかが欠けていれば休憩（区切り）ブロック。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBlock {
    pub time: Option<String>,
    pub shift_type: Option<String>,
}

impl RowBlock {
    pub fn shift(time: impl Into<String>, shift_type: impl Into<String>) -> Self {
        Self {
            time: Some(time.into()),
            shift_type: Some(shift_type.into()),
        }
    }

    pub fn break_block() -> Self {
        Self::default()
    }

    pub fn is_break(&self) -> bool {
        self.time.is_none() || self.shift_type.is_none()
    }
}

/// 検証済みレイアウト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    /// 列番号 → 日付ラベル（平日）
    pub column_dates: BTreeMap<usize, String>,
    /// 列番号 → 日付ラベル（週末）
    pub weekend_column_dates: BTreeMap<usize, String>,
    /// ブロック開始行 → 時間帯（平日）
    pub row_blocks: BTreeMap<usize, RowBlock>,
    /// ブロック開始行 → 時間帯（週末）
    pub weekend_row_blocks: BTreeMap<usize, RowBlock>,
}

#[derive(Debug, Deserialize)]
struct RawLayout {
    #[serde(alias = "columnDateMap")]
    columns: BTreeMap<String, String>,
    #[serde(default, alias = "weekendColumnDateMap")]
    weekend_columns: BTreeMap<String, String>,
    #[serde(alias = "rowTimeBlocks")]
    rows: BTreeMap<String, (Option<String>, Option<String>)>,
    #[serde(default, alias = "weekendRowTimeBlocks")]
    weekend_rows: BTreeMap<String, (Option<String>, Option<String>)>,
}

fn parse_key(section: &str, key: &str) -> Result<usize> {
    match key.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Layout(format!(
            "{}: key '{}' is not a positive integer",
            section, key
        ))),
    }
}

fn coerce_dates(section: &str, raw: BTreeMap<String, String>) -> Result<BTreeMap<usize, String>> {
    raw.into_iter()
        .map(|(k, v)| Ok((parse_key(section, &k)?, v)))
        .collect()
}

fn coerce_blocks(
    section: &str,
    raw: BTreeMap<String, (Option<String>, Option<String>)>,
) -> Result<BTreeMap<usize, RowBlock>> {
    raw.into_iter()
        .map(|(k, (time, shift_type))| Ok((parse_key(section, &k)?, RowBlock { time, shift_type })))
        .collect()
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawLayout = serde_json::from_str(json)?;
        let layout = Self {
            column_dates: coerce_dates("columns", raw.columns)?,
            weekend_column_dates: coerce_dates("weekend_columns", raw.weekend_columns)?,
            row_blocks: coerce_blocks("rows", raw.rows)?,
            weekend_row_blocks: coerce_blocks("weekend_rows", raw.weekend_rows)?,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_dates.is_empty() && self.weekend_column_dates.is_empty() {
            return Err(Error::Layout("no name columns configured".into()));
        }
        if !self.column_dates.is_empty() && self.row_blocks.is_empty() {
            return Err(Error::Layout("weekday columns configured without rows".into()));
        }
        if !self.weekend_column_dates.is_empty() && self.weekend_row_blocks.is_empty() {
            return Err(Error::Layout(
                "weekend columns configured without weekend_rows".into(),
            ));
        }
        let zero_key = self.column_dates.contains_key(&0)
            || self.weekend_column_dates.contains_key(&0)
            || self.row_blocks.contains_key(&0)
            || self.weekend_row_blocks.contains_key(&0);
        if zero_key {
            return Err(Error::Layout("row and column numbers are 1-based".into()));
        }
        Ok(())
    }

    pub fn with_column(mut self, column: usize, date: impl Into<String>) -> Self {
        self.column_dates.insert(column, date.into());
        self
    }

    pub fn with_weekend_column(mut self, column: usize, date: impl Into<String>) -> Self {
        self.weekend_column_dates.insert(column, date.into());
        self
    }

    pub fn with_rows(mut self, start_row: usize, block: RowBlock) -> Self {
        self.row_blocks.insert(start_row, block);
        self
    }

    pub fn with_weekend_rows(mut self, start_row: usize, block: RowBlock) -> Self {
        self.weekend_row_blocks.insert(start_row, block);
        self
    }

    pub fn column_dates(&self, kind: DayKind) -> &BTreeMap<usize, String> {
        match kind {
            DayKind::Weekday => &self.column_dates,
            DayKind::Weekend => &self.weekend_column_dates,
        }
    }

    pub fn row_blocks(&self, kind: DayKind) -> &BTreeMap<usize, RowBlock> {
        match kind {
            DayKind::Weekday => &self.row_blocks,
            DayKind::Weekend => &self.weekend_row_blocks,
        }
    }

    /// 名前入力列（設定列 + 2人目オーガナイザー列）
    pub fn name_columns_for(&self, kind: DayKind) -> BTreeSet<usize> {
        self.column_dates(kind)
            .keys()
            .flat_map(|&c| [c, c + SECOND_ORGANIZER_OFFSET])
            .collect()
    }

    /// 平日・週末すべての名前入力列（昇順・重複なし）
    pub fn name_columns(&self) -> BTreeSet<usize> {
        let mut columns = self.name_columns_for(DayKind::Weekday);
        columns.extend(self.name_columns_for(DayKind::Weekend));
        columns
    }

    pub fn is_name_column(&self, column: usize) -> bool {
        self.name_columns().contains(&column)
    }

    /// 列の平日/週末区分（平日を優先）
    pub fn day_kind(&self, column: usize) -> Option<DayKind> {
        [DayKind::Weekday, DayKind::Weekend]
            .into_iter()
            .find(|&kind| self.name_columns_for(kind).contains(&column))
    }

    /// 最初のブロック開始行（これより前の行は読み飛ばす）
    pub fn first_row(&self) -> Option<usize> {
        self.row_blocks
            .keys()
            .chain(self.weekend_row_blocks.keys())
            .min()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "columns": { "3": "Monday, 11/08", "8": "Tuesday, 11/09" },
        "weekend_columns": { "13": "Saturday, 11/13" },
        "rows": {
            "4": ["10:00AM - 11:00AM", "walkthrough"],
            "10": [null, null],
            "12": ["6:00PM - 8:00PM", "phonebank"]
        },
        "weekend_rows": { "5": ["9:00AM - 12:00PM", "walkthrough"] }
    }"#;

    #[test]
    fn test_from_json_coerces_keys() {
        let layout = LayoutConfig::from_json(SAMPLE).unwrap();
        assert_eq!(layout.column_dates.get(&3).map(String::as_str), Some("Monday, 11/08"));
        assert_eq!(layout.weekend_column_dates.len(), 1);
        assert_eq!(
            layout.row_blocks.get(&4),
            Some(&RowBlock::shift("10:00AM - 11:00AM", "walkthrough"))
        );
        assert!(layout.row_blocks[&10].is_break());
        assert_eq!(layout.row_blocks.keys().copied().collect::<Vec<_>>(), vec![4, 10, 12]);
    }

    #[test]
    fn test_from_json_camel_case_aliases() {
        let json = r#"{
            "columnDateMap": { "2": "Monday, 11/08" },
            "rowTimeBlocks": { "3": ["noon", "phonebank"] }
        }"#;
        let layout = LayoutConfig::from_json(json).unwrap();
        assert_eq!(layout.column_dates.len(), 1);
        assert!(layout.weekend_column_dates.is_empty());
        assert!(layout.weekend_row_blocks.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_keys() {
        let json = r#"{ "columns": { "C": "Monday" }, "rows": { "3": ["noon", "phonebank"] } }"#;
        let result = LayoutConfig::from_json(json);
        assert!(matches!(result, Err(Error::Layout(msg)) if msg.contains("'C'")));

        let json = r#"{ "columns": { "0": "Monday" }, "rows": { "3": ["noon", "phonebank"] } }"#;
        assert!(matches!(LayoutConfig::from_json(json), Err(Error::Layout(_))));
    }

    #[test]
    fn test_from_json_requires_rows_for_columns() {
        let json = r#"{ "columns": { "3": "Monday" }, "rows": {} }"#;
        assert!(matches!(LayoutConfig::from_json(json), Err(Error::Layout(_))));

        let json = r#"{ "columns": {}, "rows": {} }"#;
        assert!(matches!(LayoutConfig::from_json(json), Err(Error::Layout(_))));
    }

    #[test]
    fn test_name_columns_include_second_organizer() {
        let layout = LayoutConfig::from_json(SAMPLE).unwrap();
        let columns: Vec<usize> = layout.name_columns().into_iter().collect();
        assert_eq!(columns, vec![3, 5, 8, 10, 13, 15]);
        assert!(layout.is_name_column(5));
        assert!(!layout.is_name_column(4));
    }

    #[test]
    fn test_day_kind() {
        let layout = LayoutConfig::from_json(SAMPLE).unwrap();
        assert_eq!(layout.day_kind(10), Some(DayKind::Weekday));
        assert_eq!(layout.day_kind(15), Some(DayKind::Weekend));
        assert_eq!(layout.day_kind(4), None);
    }

    #[test]
    fn test_first_row_spans_weekday_and_weekend() {
        let layout = LayoutConfig::from_json(SAMPLE).unwrap();
        assert_eq!(layout.first_row(), Some(4));
        assert_eq!(LayoutConfig::new().first_row(), None);
    }
}
