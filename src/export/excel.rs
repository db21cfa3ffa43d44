//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す

use crate::error::{Result, ShiftRosterError};
use crate::grid::workbook;
use shift_roster_common::export::excel_core::{
    generate_workbook_buffer, unique_sheet_name, SheetTable,
};
use std::path::Path;

/// 名簿シートを追加して保存
///
/// 出力先が既にあれば、既存シートの値を引き継いだうえで右端に追加する。
/// 既存シートの書式は引き継がない。
pub fn append_roster_sheet(
    table: &[Vec<String>],
    output_path: &Path,
    sheet_name: &str,
) -> Result<()> {
    let mut sheets: Vec<SheetTable> = if output_path.exists() {
        workbook::read_all_sheets(output_path)?
            .into_iter()
            .map(|(name, rows)| SheetTable {
                name,
                rows,
                roster_format: false,
            })
            .collect()
    } else {
        Vec::new()
    };

    let existing: Vec<String> = sheets.iter().map(|s| s.name.clone()).collect();
    let name = unique_sheet_name(&existing, sheet_name);
    tracing::debug!(
        path = %output_path.display(),
        carried_over = existing.len(),
        sheet = %name,
        "appending roster sheet"
    );

    sheets.push(SheetTable {
        name,
        rows: table.to_vec(),
        roster_format: true,
    });

    let buffer = generate_workbook_buffer(&sheets).map_err(ShiftRosterError::SpreadsheetWrite)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
