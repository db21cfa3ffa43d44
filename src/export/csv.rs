use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// 表をCSVとして書き出す（改行を含むセルは引用符で囲まれる）
pub fn write_csv(table: &[Vec<String>], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(table, file)
}

pub fn write_csv_to<W: Write>(table: &[Vec<String>], writer: W) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);
    for row in table {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
