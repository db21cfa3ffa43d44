//! 申込の集計
//!
//! SignupRecord を人ごとにまとめて Schedule を作る。
//! 名前は前後空白除去・大文字小文字無視で同一人物とみなす。

use crate::error::{Error, Result};
use crate::types::{name_key, Schedule, Shift, ShiftType, SignupRecord};
use std::collections::HashMap;

/// 申込一覧を人ごとのスケジュールに集計
///
/// - 最初に現れた申込の名前表記・電話番号を採用する（後の申込では上書きしない）
/// - 同じ (日付, 時間) のシフトは1つにまとめる
/// - 戻り値はフルネームの辞書順
pub fn aggregate<I>(records: I) -> Result<Vec<Schedule>>
where
    I: IntoIterator<Item = SignupRecord>,
{
    let mut people: HashMap<String, Schedule> = HashMap::new();

    for record in records {
        let shift_type =
            ShiftType::from_label(&record.shift_type).ok_or_else(|| Error::InvalidShiftType {
                value: record.shift_type.clone(),
                row: record.row,
                column: record.column,
            })?;

        let shift = match shift_type {
            ShiftType::Walkthrough => Shift::new(record.date, record.time)
                .with_turf(record.turf, record.report_location),
            ShiftType::Phonebank => Shift::new(record.date, record.time),
        };

        let schedule = people
            .entry(name_key(&record.name))
            .or_insert_with(|| Schedule::new(record.name.clone(), record.phone.clone()));

        let shifts = schedule.shifts_mut(shift_type);
        if shifts.iter().any(|s| s.slot() == shift.slot()) {
            tracing::debug!(
                name = %record.name,
                date = %shift.date,
                time = %shift.time,
                "duplicate {} shift dropped",
                shift_type
            );
            continue;
        }
        shifts.push(shift);
    }

    let mut schedules: Vec<Schedule> = people.into_values().collect();
    schedules.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(schedules)
}
