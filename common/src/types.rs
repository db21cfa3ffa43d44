//! シフト・申込・スケジュールの型定義
//!
//! - Shift: 1回分のシフト（日付・時間・担当区域・集合場所）
//! - SignupRecord: グリッドの1セルから得た申込（スキャン中のみ存在）
//! - Schedule: 1人分のシフト一覧（集計結果）

use serde::{Deserialize, Serialize};
use std::fmt;

/// シフト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Walkthrough,
    Phonebank,
}

impl ShiftType {
    /// レイアウト設定のラベルから変換（未知のラベルは None）
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "walkthrough" => Some(ShiftType::Walkthrough),
            "phonebank" => Some(ShiftType::Phonebank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Walkthrough => "walkthrough",
            ShiftType::Phonebank => "phonebank",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1回分のシフト
///
/// 電話かけ（phonebank）のシフトは `turf` / `report_location` を持たない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_location: Option<String>,
}

impl Shift {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            turf: None,
            report_location: None,
        }
    }

    pub fn with_turf(mut self, turf: Option<String>, report_location: Option<String>) -> Self {
        self.turf = turf;
        self.report_location = report_location;
        self
    }

    /// 担当区域・集合場所のどちらかがあるか
    pub fn has_turf_info(&self) -> bool {
        non_blank(&self.turf).is_some() || non_blank(&self.report_location).is_some()
    }

    /// 並べ替えキー: 日付ラベルの最初の ", " より後ろ
    ///
    /// "Monday, 11/08" → "11/08"。区切りがなければラベル全体。
    pub fn sort_key(&self) -> &str {
        match self.date.split_once(", ") {
            Some((_, rest)) => rest,
            None => &self.date,
        }
    }

    /// 同一シフト判定用のキー
    pub fn slot(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }
}

/// 空白のみの値を None として扱う
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// 名前の照合キー（前後空白除去・小文字化）
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// グリッドの1セル分の申込
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupRecord {
    /// 名前セルの生テキスト
    pub raw_name: String,
    /// 電話・メールセルの生テキスト
    pub raw_contact: String,
    /// 1始まりの行番号
    pub row: usize,
    /// 1始まりの列番号
    pub column: usize,
    pub date: String,
    pub time: String,
    /// レイアウト設定上のシフト種別ラベル（集計時に検証）
    pub shift_type: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub turf: Option<String>,
    pub report_location: Option<String>,
}

/// 1人分のスケジュール
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub walkthrough_shifts: Vec<Shift>,
    #[serde(default)]
    pub phonebank_shifts: Vec<Shift>,
}

impl Schedule {
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone,
            ..Default::default()
        }
    }

    pub fn first_name(&self) -> String {
        split_first_name(&self.name).0
    }

    pub fn last_name(&self) -> String {
        split_first_name(&self.name).1
    }

    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn shifts_mut(&mut self, shift_type: ShiftType) -> &mut Vec<Shift> {
        match shift_type {
            ShiftType::Walkthrough => &mut self.walkthrough_shifts,
            ShiftType::Phonebank => &mut self.phonebank_shifts,
        }
    }
}

/// フルネームを (名, 姓) に分割
///
/// 名は最初の空白区切りトークン、姓は残りを半角スペースで連結したもの。
pub fn split_first_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
