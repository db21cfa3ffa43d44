//! 名簿（1人1行の一覧表）
//!
//! 実行をまたいで受け渡す永続形式。先頭行はヘッダーで、1〜6列目は固定:
//! フルネーム・名・姓・電話・ウォークスルーシフト・電話かけシフト。
//! 7列目以降は運用者が追加した任意の列（メールアドレス・メモなど）で、
//! 列の位置で保持するので、同じヘッダー名の列が複数あっても値は混ざらない。

use crate::cell::{parse_shift_list, serialize_shift_list};
use crate::error::{Error, Result};
use crate::types::{name_key, Schedule, Shift};
use std::collections::HashMap;

/// 固定列のヘッダー
pub const STANDARD_HEADERS: [&str; 6] = [
    "Full name",
    "First name",
    "Last name",
    "cell",
    "Walkthrough shifts",
    "Phonebank shifts",
];

/// 名簿の1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterEntry {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub walkthrough_shifts: Vec<Shift>,
    pub phonebank_shifts: Vec<Shift>,
    /// 追加列（名簿の追加列ヘッダーと同じ順の (ヘッダー名, 値)）
    pub other_columns: Vec<(String, String)>,
}

impl RosterEntry {
    /// 集計結果から新しい行を作る（追加列は空）
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            full_name: schedule.name.clone(),
            first_name: schedule.first_name(),
            last_name: schedule.last_name(),
            phone: schedule.phone.clone().unwrap_or_default(),
            walkthrough_shifts: schedule.walkthrough_shifts.clone(),
            phonebank_shifts: schedule.phonebank_shifts.clone(),
            other_columns: Vec::new(),
        }
    }

    pub fn key(&self) -> String {
        name_key(&self.full_name)
    }

    /// 追加列の値（未設定は空文字）
    pub fn other(&self, header: &str) -> &str {
        self.other_columns
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    fn to_row(&self, custom_headers: &[String]) -> Vec<String> {
        let mut row = vec![
            self.full_name.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.phone.clone(),
            serialize_shift_list(&self.walkthrough_shifts),
            serialize_shift_list(&self.phonebank_shifts),
        ];
        row.extend((0..custom_headers.len()).map(|i| {
            self.other_columns
                .get(i)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        }));
        row
    }

    /// 表の1行から復元（row_number はエラー表示用の1始まり行番号）
    fn from_row(cells: &[String], custom_headers: &[String], row_number: usize) -> Result<Self> {
        let cell = |index: usize| cells.get(index).map(String::as_str).unwrap_or("");
        let shifts = |index: usize| {
            parse_shift_list(cell(index)).map_err(|e| Error::RosterRow {
                row: row_number,
                source: Box::new(e),
            })
        };

        let other_columns = custom_headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                (
                    header.clone(),
                    cell(STANDARD_HEADERS.len() + i).to_string(),
                )
            })
            .collect();

        Ok(Self {
            full_name: cell(0).trim().to_string(),
            first_name: cell(1).to_string(),
            last_name: cell(2).to_string(),
            phone: cell(3).to_string(),
            walkthrough_shifts: shifts(4)?,
            phonebank_shifts: shifts(5)?,
            other_columns,
        })
    }
}

/// 名簿（小文字化したフルネームで引ける、行順を保持する一覧）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    custom_headers: Vec<String>,
    entries: Vec<RosterEntry>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new(custom_headers: Vec<String>) -> Self {
        Self {
            custom_headers,
            ..Default::default()
        }
    }

    /// 集計結果から名簿を作る（追加列なし）
    pub fn from_schedules(schedules: &[Schedule]) -> Self {
        let mut roster = Self::default();
        for schedule in schedules {
            roster.insert(RosterEntry::from_schedule(schedule));
        }
        roster
    }

    /// 文字列の表（先頭行ヘッダー）から読み込み
    ///
    /// フルネームが空の行は読み飛ばす。シフト文字列が不正な行があれば全体をエラーにする。
    pub fn from_table(table: &[Vec<String>]) -> Result<Self> {
        let Some((header, rows)) = table.split_first() else {
            return Ok(Self::default());
        };

        let mut custom_headers: Vec<String> = header
            .iter()
            .skip(STANDARD_HEADERS.len())
            .map(|h| h.trim().to_string())
            .collect();
        while custom_headers.last().is_some_and(|h| h.is_empty()) {
            custom_headers.pop();
        }

        let mut roster = Self::new(custom_headers);
        for (i, cells) in rows.iter().enumerate() {
            let row_number = i + 2;
            if cells.first().map_or(true, |name| name.trim().is_empty()) {
                continue;
            }
            let entry = RosterEntry::from_row(cells, &roster.custom_headers, row_number)?;
            if let Some(previous) = roster.insert(entry) {
                tracing::warn!(
                    row = row_number,
                    name = %previous.full_name,
                    "duplicate roster name, later row wins"
                );
            }
        }
        Ok(roster)
    }

    /// 文字列の表（先頭行ヘッダー）に変換
    pub fn to_table(&self) -> Vec<Vec<String>> {
        let mut table = Vec::with_capacity(self.entries.len() + 1);
        table.push(self.headers());
        table.extend(self.entries.iter().map(|e| e.to_row(&self.custom_headers)));
        table
    }

    pub fn headers(&self) -> Vec<String> {
        STANDARD_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain(self.custom_headers.iter().cloned())
            .collect()
    }

    pub fn custom_headers(&self) -> &[String] {
        &self.custom_headers
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// フルネームで検索（大文字小文字・前後空白を無視）
    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        self.index.get(&name_key(name)).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RosterEntry> {
        match self.index.get(&name_key(name)) {
            Some(&i) => self.entries.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name_key(name))
    }

    /// 行を追加。同じ名前の行があればその位置で置き換え、置き換え前の行を返す。
    pub fn insert(&mut self, entry: RosterEntry) -> Option<RosterEntry> {
        let key = entry.key();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i], entry)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// 条件を満たさない行を削除し、削除した行を返す
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<RosterEntry>
    where
        F: FnMut(&RosterEntry) -> bool,
    {
        let (kept, removed): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.entries).into_iter().partition(|e| keep(e));
        self.entries = kept;
        self.rebuild_index();
        removed
    }

    pub fn remove(&mut self, name: &str) -> Option<RosterEntry> {
        let key = name_key(name);
        let mut removed = self.retain(|e| e.key() != key);
        removed.pop()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key(), i))
            .collect();
    }
}
