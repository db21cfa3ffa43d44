//! Shift Roster Common Library
//!
//! シフト申込グリッドの解釈と名簿の更新を行うエンジン。
//! ファイルの読み書きやCLIは含まない（レイアウト設定ファイルの読み込みのみ）。
//!
//! ## 処理フロー
//! 1. scanner: グリッド → SignupRecord（resolver + cell を使用）
//! 2. aggregate: SignupRecord → 人ごとの Schedule
//! 3. roster / reconcile: 前回の名簿に反映
//! 4. daily: 名簿から指定日のシフトを抽出

pub mod types;
pub mod layout;
pub mod resolver;
pub mod cell;
pub mod scanner;
pub mod aggregate;
pub mod roster;
pub mod reconcile;
pub mod daily;
pub mod error;
pub mod export;

pub use types::{Schedule, Shift, ShiftType, SignupRecord};
pub use layout::{DayKind, LayoutConfig, RowBlock};
pub use resolver::{resolve, ResolvedSlot};
pub use cell::{
    extract_identity, format_shift_token, parse_shift_list, parse_shift_token,
    serialize_shift_list, split_turf_and_location,
};
pub use scanner::{scan_grid, Grid, GridScanner, DEFAULT_MIN_NAME_LEN};
pub use aggregate::aggregate;
pub use roster::{Roster, RosterEntry, STANDARD_HEADERS};
pub use reconcile::{pending_removals, reconcile, ReconcileSummary};
pub use daily::filter_by_date;
pub use error::{Error, Result};
