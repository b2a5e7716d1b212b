//! Spreadsheet flattening
//!
//! Every sheet of an `.xlsx` workbook is rendered as an aligned text grid
//! and the grids are joined with newlines in workbook order. Cell values are
//! taken as text; date cells are written as `YYYY-MM-DD HH:MM:SS` and
//! duration cells as `<days> days HH:MM:SS` rather than as serial numbers.

use calamine::{open_workbook, Data, ExcelDateTime, Range, Reader, Xlsx};
use std::path::Path;

use crate::core::error::ReadFailure;

const COLUMN_GAP: &str = "  ";

/// Read every sheet of a workbook into one text blob
pub fn extract_workbook_text(path: &Path) -> Result<String, ReadFailure> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names();

    let mut rendered = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = workbook.worksheet_range(sheet_name)?;
        tracing::trace!(sheet = %sheet_name, size = ?range.get_size(), "rendering sheet");
        rendered.push(render_sheet(&range));
    }

    Ok(rendered.join("\n"))
}

/// Render one sheet as a grid.
///
/// The first row becomes the column header (blank header cells are named
/// `Unnamed: <col>`), the remaining rows get a 0-based row index on the
/// left. Columns are right-aligned to their widest cell.
pub fn render_sheet(range: &Range<Data>) -> String {
    if range.is_empty() {
        return String::new();
    }

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let Some(header_row) = rows.next() else {
        return String::new();
    };
    let header: Vec<String> = header_row
        .into_iter()
        .enumerate()
        .map(|(col, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {col}")
            } else {
                name
            }
        })
        .collect();
    let body: Vec<Vec<String>> = rows.collect();

    let index_width = body
        .len()
        .checked_sub(1)
        .map(|last| last.to_string().len())
        .unwrap_or(0);

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (col, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(render_line("", index_width, &header, &widths));
    for (idx, row) in body.iter().enumerate() {
        lines.push(render_line(&idx.to_string(), index_width, row, &widths));
    }

    lines.join("\n")
}

/// Text of a single cell
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(value) => excel_datetime_text(value).unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        _ => cell.to_string(),
    }
}

fn excel_datetime_text(value: &ExcelDateTime) -> Option<String> {
    if value.is_duration() {
        let seconds = value.as_duration()?.num_seconds();
        let (days, rest) = (seconds.div_euclid(86_400), seconds.rem_euclid(86_400));
        return Some(format!(
            "{days} days {:02}:{:02}:{:02}",
            rest / 3600,
            rest % 3600 / 60,
            rest % 60
        ));
    }
    value.as_datetime().map(|datetime| datetime.to_string())
}

fn render_line(index: &str, index_width: usize, cells: &[String], widths: &[usize]) -> String {
    let mut line = format!("{index:<index_width$}");
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        line.push_str(COLUMN_GAP);
        line.push_str(&format!("{cell:>width$}"));
    }
    line
}
