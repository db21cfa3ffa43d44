//! Excel生成（共通ライブラリ）
//!
//! 文字列の表をワークシートとして書き出す。名簿シートはヘッダー行を太字・固定し、
//! シフト列を折り返し表示にする。

use crate::roster::STANDARD_HEADERS;
use rust_xlsxwriter::*;

/// Excelのシート名の最大文字数
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// シフト列（0始まり）
const SHIFT_COLUMNS: [u16; 2] = [4, 5];

/// 書き出すシート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub name: String,
    pub rows: Vec<Vec<String>>,
    /// 名簿形式の書式を適用するか（既存シートの引き継ぎ時は false）
    pub roster_format: bool,
}

/// Excelで使えるシート名に変換
///
/// 使用禁止文字は '-' に置き換え、31文字に切り詰める。
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '-' } else { c })
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'');
    let truncated: String = cleaned.chars().take(MAX_SHEET_NAME_LEN).collect();
    let truncated = truncated.trim_end().to_string();
    if truncated.is_empty() {
        "Sheet".to_string()
    } else {
        truncated
    }
}

/// 既存のシート名と重ならない名前を作る（大文字小文字は区別しない）
pub fn unique_sheet_name(existing: &[String], desired: &str) -> String {
    let base = sanitize_sheet_name(desired);
    let taken = |name: &str| existing.iter().any(|e| e.eq_ignore_ascii_case(name));
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
        let head: String = base.chars().take(keep).collect();
        let candidate = format!("{}{}", head.trim_end(), suffix);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// ワークブックをバッファに生成
pub fn generate_workbook_buffer(sheets: &[SheetTable]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border_bottom(FormatBorder::Thin);

    let shift_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let plain_format = Format::new().set_align(FormatAlign::Top);

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| format!("シート名設定エラー ({}): {}", sheet.name, e))?;

        if sheet.roster_format {
            worksheet
                .set_freeze_panes(1, 0)
                .map_err(|e| format!("ヘッダー固定エラー: {}", e))?;
            for col in 0..STANDARD_HEADERS.len() as u16 {
                let width = if SHIFT_COLUMNS.contains(&col) { 60.0 } else { 16.0 };
                worksheet
                    .set_column_width(col, width)
                    .map_err(|e| format!("列幅設定エラー: {}", e))?;
            }
        }

        for (r, cells) in sheet.rows.iter().enumerate() {
            let row = u32::try_from(r).map_err(|_| format!("行数が多すぎます: {}", r))?;
            for (c, value) in cells.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let col = u16::try_from(c).map_err(|_| format!("列数が多すぎます: {}", c))?;
                let result = if !sheet.roster_format {
                    worksheet.write_string(row, col, value)
                } else if row == 0 {
                    worksheet.write_string_with_format(row, col, value, &header_format)
                } else if SHIFT_COLUMNS.contains(&col) {
                    worksheet.write_string_with_format(row, col, value, &shift_format)
                } else {
                    worksheet.write_string_with_format(row, col, value, &plain_format)
                };
                result.map_err(|e| {
                    format!("セル書き込みエラー ({}, {}): {}", row + 1, col + 1, e)
                })?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
