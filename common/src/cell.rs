//! セル文字列パーサー
//!
//! - 連絡先セルから電話番号・メールアドレスを抽出
//! - 担当区域セル（"区域 // 集合場所"）の分割
//! - 名簿で使うシフト文字列の相互変換
//!
//! シフト文字列の形式:
//! `<日付> from <時間>[ for <区域>][ [Report to: <集合場所>]]`

use crate::error::{Error, Result};
use crate::types::{non_blank, Shift};
use regex::Regex;

const FROM_SEPARATOR: &str = " from ";
const TURF_SEPARATOR: &str = " for ";
const REPORT_OPEN: &str = "[Report to: ";
const REPORT_CLAUSE: &str = " [Report to: ";
const TURF_LOCATION_SEPARATOR: &str = "//";

lazy_static::lazy_static! {
    // 10桁の数字（括弧・ハイフン・ドット区切りを許容）
    static ref PHONE_RE: Regex = Regex::new(r"(\(?[0-9]\)?[-.]?){10}").unwrap();
    // @ の前後に1文字以上の非空白
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+").unwrap();
}

/// 連絡先セルから (電話番号, メールアドレス) を抽出
///
/// 電話番号は数字のみに正規化する。どちらも見つからなければ None。
pub fn extract_identity(text: &str) -> (Option<String>, Option<String>) {
    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect::<String>());
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    (phone, email)
}

/// 担当区域セルを (区域, 集合場所) に分割
///
/// "North End // Union Hall" → (Some("North End"), Some("Union Hall"))
pub fn split_turf_and_location(text: &str) -> (Option<String>, Option<String>) {
    let mut parts = text.split(TURF_LOCATION_SEPARATOR);
    let clean = |s: Option<&str>| {
        s.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let turf = clean(parts.next());
    let location = clean(parts.next());
    (turf, location)
}

/// シフト文字列をパース
///
/// 日付と時間は必須。`for` 句と `[Report to: ...]` 句は任意。
pub fn parse_shift_token(token: &str) -> Result<Shift> {
    let parse_error = || Error::ShiftParse {
        token: token.to_string(),
    };

    let (date, rest) = token.split_once(FROM_SEPARATOR).ok_or_else(parse_error)?;

    let time_end = [rest.find(TURF_SEPARATOR), rest.find(REPORT_CLAUSE)]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());
    let time = &rest[..time_end];
    let tail = &rest[time_end..];

    if date.trim().is_empty() || time.trim().is_empty() {
        return Err(parse_error());
    }

    let turf = tail.strip_prefix(TURF_SEPARATOR).map(|t| match t.find(REPORT_CLAUSE) {
        Some(end) => &t[..end],
        None => t,
    });

    let report_location = tail.find(REPORT_OPEN).and_then(|start| {
        let inner = &tail[start + REPORT_OPEN.len()..];
        inner.rfind(']').map(|end| &inner[..end])
    });

    let keep = |s: Option<&str>| s.filter(|s| !s.trim().is_empty()).map(str::to_string);

    Ok(Shift::new(date, time).with_turf(keep(turf), keep(report_location)))
}

/// シフトを文字列化（parse_shift_token の逆変換）
pub fn format_shift_token(shift: &Shift) -> String {
    let mut token = format!("{}{}{}", shift.date, FROM_SEPARATOR, shift.time);
    if let Some(turf) = non_blank(&shift.turf) {
        token.push_str(TURF_SEPARATOR);
        token.push_str(turf);
    }
    if let Some(location) = non_blank(&shift.report_location) {
        token.push(' ');
        token.push_str(REPORT_OPEN);
        token.push_str(location);
        token.push(']');
    }
    token
}

/// シフト一覧を名簿セル用の文字列に変換
///
/// 日付ラベルの ", " 以降で昇順に並べ（同じキーは元の順序を維持）、改行で連結する。
pub fn serialize_shift_list(shifts: &[Shift]) -> String {
    let mut sorted: Vec<&Shift> = shifts.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
        .into_iter()
        .map(format_shift_token)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 名簿セルの文字列からシフト一覧を復元
///
/// 空セルは空の一覧。空行は無視する。
pub fn parse_shift_list(text: &str) -> Result<Vec<Shift>> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(parse_shift_token)
        .collect()
}
