//! 日別抽出
//!
//! 名簿から指定日のシフトだけを残した一覧を作る。元の名簿は変更しない。

use crate::roster::{Roster, RosterEntry};
use crate::types::Shift;

fn matching(shifts: &[Shift], date_token: &str) -> Vec<Shift> {
    shifts
        .iter()
        .filter(|s| s.date.contains(date_token))
        .cloned()
        .collect()
}

/// 日付ラベルに `date_token` を含むシフトだけを残す
///
/// 部分一致なので "11/08" で "Monday, 11/08" に一致する。
/// 該当シフトが1つも無い人は結果に含めない。追加列のヘッダーは元の名簿と同じ。
pub fn filter_by_date(roster: &Roster, date_token: &str) -> Roster {
    let mut filtered = Roster::new(roster.custom_headers().to_vec());
    for entry in roster.entries() {
        let walkthrough_shifts = matching(&entry.walkthrough_shifts, date_token);
        let phonebank_shifts = matching(&entry.phonebank_shifts, date_token);
        if walkthrough_shifts.is_empty() && phonebank_shifts.is_empty() {
            continue;
        }
        filtered.insert(RosterEntry {
            walkthrough_shifts,
            phonebank_shifts,
            ..entry.clone()
        });
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schedule;

    fn roster() -> Roster {
        let mut jane = Schedule::new("Jane Doe", None);
        jane.walkthrough_shifts = vec![
            Shift::new("Monday, 11/08", "10:00AM - 11:00AM"),
            Shift::new("Tuesday, 11/09", "2:00PM - 3:00PM"),
        ];
        let mut john = Schedule::new("John Smith", None);
        john.phonebank_shifts = vec![Shift::new("Wednesday, 11/10", "6PM")];
        let mut ana = Schedule::new("Ana Lopez", None);
        ana.walkthrough_shifts = vec![Shift::new("Tuesday, 11/09", "9AM")];
        ana.phonebank_shifts = vec![Shift::new("Monday, 11/08", "6PM")];
        Roster::from_schedules(&[jane, john, ana])
    }

    #[test]
    fn test_filter_by_date() {
        let source = roster();
        let daily = filter_by_date(&source, "11/08");

        assert_eq!(daily.len(), 2);
        let jane = daily.get("Jane Doe").unwrap();
        assert_eq!(
            jane.walkthrough_shifts,
            vec![Shift::new("Monday, 11/08", "10:00AM - 11:00AM")]
        );
        assert!(jane.phonebank_shifts.is_empty());
        assert!(daily.get("John Smith").is_none());

        let ana = daily.get("Ana Lopez").unwrap();
        assert!(ana.walkthrough_shifts.is_empty());
        assert_eq!(ana.phonebank_shifts.len(), 1);
    }

    #[test]
    fn test_filter_by_date_does_not_mutate_source() {
        let source = roster();
        let before = source.clone();
        let _ = filter_by_date(&source, "Monday");
        assert_eq!(source, before);
        assert_eq!(source.get("Jane Doe").unwrap().walkthrough_shifts.len(), 2);
    }

    #[test]
    fn test_filter_by_date_keeps_custom_columns() {
        let table: Vec<Vec<String>> = vec![
            vec![
                "Full name",
                "First name",
                "Last name",
                "cell",
                "Walkthrough shifts",
                "Phonebank shifts",
                "Email",
            ],
            vec![
                "Jane Doe",
                "Jane",
                "Doe",
                "",
                "Monday, 11/08 from 10AM",
                "",
                "jane@example.org",
            ],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect())
        .collect();
        let source = Roster::from_table(&table).unwrap();
        let daily = filter_by_date(&source, "Monday, 11/08");
        assert_eq!(daily.custom_headers(), &["Email".to_string()]);
        assert_eq!(daily.get("jane doe").unwrap().other("Email"), "jane@example.org");
    }

    #[test]
    fn test_filter_by_date_no_match() {
        assert!(filter_by_date(&roster(), "12/25").is_empty());
    }
}
