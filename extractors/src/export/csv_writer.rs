use super::{ExportError, Table, TableWriter};
use csv::WriterBuilder;
use std::path::Path;

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWriter for CsvWriter {
    fn write(&self, table: &Table, output_path: &Path) -> Result<(), ExportError> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(output_path)?;

        writer.write_record(table.headers())?;
        for row in &table.rows {
            writer.write_record(row.values())?;
        }

        writer.flush()?;
        Ok(())
    }
}
