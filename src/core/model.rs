//! Result model
//!
//! Documents go in, count records come out. Every output format (stdout
//! rendering and the spreadsheet export) is produced from these types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::TallyError;
use crate::core::paths::{file_label, normalized_extension};

/// Column titles of the result table: document, value, count
pub const TABLE_HEADER: [&str; 3] = ["Файл", "Значение", "Количество"];

/// Format of a document, derived from its extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Spreadsheet,
    Unsupported(String),
}

impl DocumentFormat {
    /// Detect the format from the lowercased file extension
    pub fn from_path(path: &Path) -> Self {
        match normalized_extension(path).as_deref() {
            Some("txt") => DocumentFormat::Text,
            Some("xlsx") => DocumentFormat::Spreadsheet,
            Some(other) => DocumentFormat::Unsupported(other.to_string()),
            None => DocumentFormat::Unsupported(String::new()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentFormat::Unsupported(_))
    }
}

/// One selected input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
    /// Base file name shown to the operator. Not unique across directories.
    pub label: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        let label = file_label(&path);
        Self {
            path,
            format,
            label,
        }
    }
}

/// A single (document, value, count) entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub document: String,
    pub value: String,
    pub count: usize,
}

impl CountRecord {
    pub fn new(document: impl Into<String>, value: impl Into<String>, count: usize) -> Self {
        Self {
            document: document.into(),
            value: value.into(),
            count,
        }
    }
}

/// Ordered count records of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    pub records: Vec<CountRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: CountRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a CountRecord;
    type IntoIter = std::slice::Iter<'a, CountRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CountRecord> for ResultTable {
    fn from_iter<T: IntoIterator<Item = CountRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// A document that could not be read during a run
#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub label: String,
    pub error: TallyError,
}

/// Everything a run produces: the table plus the per-document failures
#[derive(Debug, Default)]
pub struct RunReport {
    pub table: ResultTable,
    pub failures: Vec<DocumentFailure>,
    pub documents_read: usize,
}
