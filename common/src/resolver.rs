//! 座標 → シフト変換
//!
//! グリッドの (行, 列) を (日付, 時間帯, シフト種別) に変換する。
//!
//! ## 変換ルール
//! 1. 列が平日の名前入力列なら平日の表、週末の名前入力列なら週末の表を使う
//! 2. 列が日付表に無ければ 2列左（1人目のオーガナイザー列）を引く
//! 3. 行は「開始行 ≤ 行」となる最後のブロックに属する
//! 4. 最初のブロックより前の行・休憩ブロックの行は時間帯なし（読み飛ばし対象）

use crate::error::{Error, Result};
use crate::layout::{DayKind, LayoutConfig, RowBlock, SECOND_ORGANIZER_OFFSET};
use std::collections::BTreeMap;

/// 座標の変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlot {
    pub kind: DayKind,
    pub date: String,
    /// None なら割り当てなし（区切り行・最初のブロックより前の行）
    pub time: Option<String>,
    pub shift_type: Option<String>,
}

impl ResolvedSlot {
    pub fn is_assigned(&self) -> bool {
        self.time.is_some()
    }
}

/// 列の日付を取得（2人目のオーガナイザー列は 2列左の日付）
fn lookup_date(dates: &BTreeMap<usize, String>, column: usize) -> Option<&String> {
    dates.get(&column).or_else(|| {
        column
            .checked_sub(SECOND_ORGANIZER_OFFSET)
            .and_then(|c| dates.get(&c))
    })
}

/// 行が属するブロック（開始行 ≤ 行 の最後のブロック）
pub fn active_block(blocks: &BTreeMap<usize, RowBlock>, row: usize) -> Option<&RowBlock> {
    blocks.range(..=row).next_back().map(|(_, block)| block)
}

/// 1始まりの (行, 列) をシフトに変換
pub fn resolve(layout: &LayoutConfig, row: usize, column: usize) -> Result<ResolvedSlot> {
    let kind = layout.day_kind(column).ok_or_else(|| Error::InvalidColumn {
        column,
        reason: "not in any configured column map".into(),
    })?;

    let date = lookup_date(layout.column_dates(kind), column)
        .ok_or_else(|| Error::InvalidColumn {
            column,
            reason: "doesn't conform to the layout".into(),
        })?
        .clone();

    let (time, shift_type) = match active_block(layout.row_blocks(kind), row) {
        Some(block) if !block.is_break() => (block.time.clone(), block.shift_type.clone()),
        _ => (None, None),
    };

    Ok(ResolvedSlot {
        kind,
        date,
        time,
        shift_type,
    })
}
