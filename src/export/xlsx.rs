//! Spreadsheet export of a result table

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};

use crate::core::error::TallyError;
use crate::core::model::{ResultTable, TABLE_HEADER};

/// Default export file name
pub const DEFAULT_OUTPUT: &str = "result.xlsx";

/// Append `.xlsx` when the destination has no extension
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("xlsx")
    }
}

/// Write the table as a single-sheet workbook
pub fn write_table(table: &ResultTable, path: &Path) -> Result<(), TallyError> {
    build_workbook(table)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|source| TallyError::Export {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), rows = table.len(), "exported result table");
    Ok(())
}

fn build_workbook(table: &ResultTable) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, title) in TABLE_HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (idx, record) in table.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &record.document)?;
        worksheet.write_string(row, 1, &record.value)?;
        worksheet.write_number(row, 2, record.count as f64)?;
    }

    Ok(workbook)
}
