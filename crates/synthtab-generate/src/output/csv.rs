use std::io::Write;

use crate::errors::GenerationError;
use crate::model::GeneratedTable;

/// Write a table as CSV: a header of column names, then one record per row.
///
/// Returns the number of bytes written. A table without columns is a
/// single empty line.
pub fn write_table_csv<W: Write>(
    writer: W,
    table: &GeneratedTable,
) -> Result<u64, GenerationError> {
    let mut counting = CountingWriter::new(writer);
    if table.is_empty() {
        counting.write_all(b"\n")?;
        counting.flush()?;
        return Ok(counting.bytes_written());
    }

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(table.column_names())?;

    let precisions: Vec<Option<u32>> = table
        .columns()
        .iter()
        .map(|column| column.precision)
        .collect();
    for row in table.rows() {
        let record: Vec<String> = row
            .iter()
            .zip(&precisions)
            .map(|(value, precision)| value.to_csv(*precision))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

pub fn table_to_csv_string(table: &GeneratedTable) -> Result<String, GenerationError> {
    let mut buffer = Vec::new();
    write_table_csv(&mut buffer, table)?;
    Ok(String::from_utf8(buffer)?)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
