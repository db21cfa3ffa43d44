//! 名簿の更新（再スキャン結果の反映）
//!
//! 前回出力した名簿に最新の集計結果を反映する。
//! 1. 既存の人はシフト一覧だけを差し替える（電話番号・追加列はそのまま）
//! 2. 新しい人は追加列が空の行として末尾に追加する
//! 3. 最新の集計に居ない人は行ごと削除する（追加列のデータも消える）

use crate::roster::{Roster, RosterEntry};
use crate::types::{name_key, Schedule};
use std::collections::HashSet;

/// 更新内容の要約
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// 新しく追加された人
    pub added: Vec<String>,
    /// シフトが変わった人
    pub updated: Vec<String>,
    /// シフトが変わらなかった人数
    pub unchanged: usize,
    /// 削除された人
    pub removed: Vec<String>,
}

impl ReconcileSummary {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.updated.is_empty() || !self.removed.is_empty()
    }
}

/// 反映すると削除される人（名簿の行順）
pub fn pending_removals(roster: &Roster, fresh: &[Schedule]) -> Vec<String> {
    let fresh_keys: HashSet<String> = fresh.iter().map(Schedule::key).collect();
    roster
        .entries()
        .iter()
        .filter(|e| !fresh_keys.contains(&e.key()))
        .map(|e| e.full_name.clone())
        .collect()
}

/// 最新の集計結果を名簿に反映
pub fn reconcile(roster: &mut Roster, fresh: &[Schedule]) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();

    for schedule in fresh {
        match roster.get_mut(&schedule.name) {
            Some(entry) => {
                let changed = entry.walkthrough_shifts != schedule.walkthrough_shifts
                    || entry.phonebank_shifts != schedule.phonebank_shifts;
                entry.walkthrough_shifts = schedule.walkthrough_shifts.clone();
                entry.phonebank_shifts = schedule.phonebank_shifts.clone();
                if changed {
                    summary.updated.push(entry.full_name.clone());
                } else {
                    summary.unchanged += 1;
                }
            }
            None => {
                tracing::info!(name = %schedule.name, "new person");
                roster.insert(RosterEntry::from_schedule(schedule));
                summary.added.push(schedule.name.clone());
            }
        }
    }

    let fresh_keys: HashSet<String> = fresh.iter().map(|s| name_key(&s.name)).collect();
    let removed = roster.retain(|e| fresh_keys.contains(&e.key()));
    for entry in &removed {
        tracing::warn!(name = %entry.full_name, "no longer signed up, removed from roster");
    }
    summary.removed = removed.into_iter().map(|e| e.full_name).collect();

    tracing::info!(
        added = summary.added.len(),
        updated = summary.updated.len(),
        unchanged = summary.unchanged,
        removed = summary.removed.len(),
        "roster reconciled"
    );
    summary
}
