use super::{ExportError, Table, TableWriter};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub struct XlsxWriter {
    sheet_name: String,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
        }
    }
}

impl TableWriter for XlsxWriter {
    fn write(&self, table: &Table, output_path: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        // Header row, no index column
        for (col, header) in table.headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, value) in row.values().iter().enumerate() {
                worksheet.write_string(row_num, col as u16, *value)?;
            }
        }

        worksheet.autofit();
        workbook.save(output_path)?;

        Ok(())
    }
}
