//! generate / update / daily の各処理

use crate::error::{Result, ShiftRosterError};
use crate::export::{self, daily_sheet_name, roster_sheet_name, OutputFormat};
use crate::grid::{read_table, SheetSelector};
use chrono::Local;
use shift_roster_common::{
    aggregate, filter_by_date, pending_removals, reconcile, GridScanner, LayoutConfig,
    ReconcileSummary, Roster, Schedule, SignupRecord,
};
use std::path::Path;

/// グリッド読み込みの設定
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub layout: LayoutConfig,
    pub sheet: SheetSelector,
    pub min_name_len: usize,
}

/// レイアウト設定ファイルを読み込む
pub fn load_layout(path: &Path) -> Result<LayoutConfig> {
    if !path.exists() {
        return Err(ShiftRosterError::FileNotFound(path.display().to_string()));
    }
    Ok(LayoutConfig::from_file(path)?)
}

/// グリッドを読み込み、人ごとのスケジュールに集計
pub fn collect_schedules(grid_path: &Path, options: &ScanOptions) -> Result<Vec<Schedule>> {
    println!("[1/3] Reading signup grid...");
    let grid = read_table(grid_path, &options.sheet)?;

    let scanner = GridScanner::new(&options.layout).with_min_name_len(options.min_name_len);
    let records: Vec<SignupRecord> = scanner.scan(&grid).collect::<std::result::Result<_, _>>()?;
    println!("✔ {} signups found\n", records.len());

    println!("[2/3] Building schedules...");
    let schedules = aggregate(records)?;
    println!("✔ {} people\n", schedules.len());
    Ok(schedules)
}

/// 既存の名簿を読み込む（ワークブックは既定で右端のシート）
pub fn load_roster(path: &Path, sheet: &SheetSelector) -> Result<Roster> {
    let table = read_table(path, sheet)?;
    if table.is_empty() {
        return Err(ShiftRosterError::EmptyRoster(path.display().to_string()));
    }
    Ok(Roster::from_table(&table)?)
}

/// グリッドから新しい名簿を作って書き出す
pub fn generate(grid_path: &Path, output: &Path, options: &ScanOptions) -> Result<Roster> {
    OutputFormat::from_path(output)?;
    let schedules = collect_schedules(grid_path, options)?;
    let roster = Roster::from_schedules(&schedules);

    println!("[3/3] Writing roster...");
    export::write_roster(&roster, output, &roster_sheet_name(Local::now()))?;
    println!("✔ Roster saved: {}", output.display());
    Ok(roster)
}

/// グリッドを再スキャンして既存の名簿に反映し、書き出す
///
/// 削除される人がいるときは `confirm` に名前の一覧を渡す。
/// false が返れば何も書き出さずに `Aborted` を返す。
pub fn update<F>(
    grid_path: &Path,
    output: &Path,
    existing: &Path,
    existing_sheet: &SheetSelector,
    options: &ScanOptions,
    confirm: F,
) -> Result<ReconcileSummary>
where
    F: FnOnce(&[String]) -> Result<bool>,
{
    OutputFormat::from_path(output)?;
    let schedules = collect_schedules(grid_path, options)?;
    let mut roster = load_roster(existing, existing_sheet)?;

    let removals = pending_removals(&roster, &schedules);
    if !removals.is_empty() {
        println!("The following people are no longer on the grid and will be removed:");
        for name in &removals {
            println!("  - {}", name);
        }
        if !confirm(&removals)? {
            return Err(ShiftRosterError::Aborted);
        }
    }

    let summary = reconcile(&mut roster, &schedules);

    println!("[3/3] Writing roster...");
    export::write_roster(&roster, output, &roster_sheet_name(Local::now()))?;
    println!("✔ Roster saved: {}", output.display());
    Ok(summary)
}

/// 名簿から指定日のシフトだけを抜き出して書き出す
pub fn daily(
    roster_path: &Path,
    output: &Path,
    date_token: &str,
    sheet: &SheetSelector,
) -> Result<Roster> {
    OutputFormat::from_path(output)?;
    println!("[1/2] Reading roster...");
    let roster = load_roster(roster_path, sheet)?;
    println!("✔ {} people\n", roster.len());

    let filtered = filter_by_date(&roster, date_token);
    if filtered.is_empty() {
        tracing::warn!(date = date_token, "no shifts match the date");
    }

    println!("[2/2] Writing shifts for '{}'...", date_token);
    export::write_roster(&filtered, output, &daily_sheet_name(date_token, Local::now()))?;
    println!("✔ {} people on {}: {}", filtered.len(), date_token, output.display());
    Ok(filtered)
}
