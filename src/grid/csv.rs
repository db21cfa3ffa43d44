use crate::error::Result;
use shift_roster_common::Grid;
use std::io::Read;
use std::path::Path;

/// CSVを読み込む（ヘッダー行なし、行ごとに列数が違ってもよい）
pub fn read_csv(path: &Path) -> Result<Grid> {
    let file = std::fs::File::open(path)?;
    read_csv_from(file)
}

pub fn read_csv_from<R: Read>(reader: R) -> Result<Grid> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = Vec::new();
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}
