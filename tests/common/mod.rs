//! 統合テスト用のフィクスチャ

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// 平日: B=名前1, C=連絡先1, D=名前2, E=連絡先2, F=区域
/// 週末: G=名前1, H=連絡先1, I=名前2, J=連絡先2, K=区域
pub const LAYOUT_JSON: &str = r#"{
    "columns": { "2": "Monday, 11/08" },
    "weekend_columns": { "7": "Saturday, 11/13" },
    "rows": {
        "3": ["10AM - 11AM", "walkthrough"],
        "5": [null, null],
        "6": ["6PM - 8PM", "phonebank"]
    },
    "weekend_rows": { "3": ["9AM - 12PM", "walkthrough"] }
}"#;

pub const GRID_CSV: &str = "\
,MONDAY,,,,,SATURDAY
,Organizer 1,Contact,Organizer 2,Contact,Turf,Name,Contact,Name,Contact,Turf
10AM,Jane Doe,555-123-4567 jane@example.org,John Smith,(555)987-6543,North Campus // Union Hall,Ana Lopez,ana@example.org,,,Gym
,tbd,,,,,
BREAK,Lunch break!,,,,,
6PM,John Smith,,,,
";

/// Ana が抜けて Maria が電話かけに入ったグリッド
pub const GRID_CSV_NEXT: &str = "\
,MONDAY,,,,,SATURDAY
,Organizer 1,Contact,Organizer 2,Contact,Turf,Name,Contact,Name,Contact,Turf
10AM,Jane Doe,555-123-4567 jane@example.org,John Smith,(555)987-6543,North Campus // Union Hall,,,,,Gym
,tbd,,,,,
BREAK,Lunch break!,,,,,
6PM,John Smith,,Maria Garcia,maria@example.org,
";

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}
