//! Document reading
//!
//! Turns one document into one searchable text blob:
//! - `.txt` files are decoded as UTF-8
//! - `.xlsx` workbooks are flattened sheet by sheet
//!
//! Any failure is returned as a single `DocumentRead` error carrying the path
//! and the underlying cause.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ReadFailure, TallyError};
use crate::core::model::{Document, DocumentFormat};
use crate::core::spreadsheet::extract_workbook_text;

/// Strategy for handling non-UTF-8 text files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Fail the document on invalid UTF-8
    #[default]
    Strict,
    /// Replace invalid bytes with U+FFFD
    Lossy,
}

/// Configuration for document reading
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReadConfig {
    /// How to handle non-UTF-8 content in text documents
    pub encoding: EncodingStrategy,
}

impl ReadConfig {
    pub fn with_encoding(encoding: EncodingStrategy) -> Self {
        Self { encoding }
    }
}

/// Read a document into its normalized text
pub fn read_document(document: &Document, config: &ReadConfig) -> Result<String, TallyError> {
    let result = match &document.format {
        DocumentFormat::Text => read_text(&document.path, config.encoding),
        DocumentFormat::Spreadsheet => extract_workbook_text(&document.path),
        DocumentFormat::Unsupported(ext) => Err(ReadFailure::UnsupportedFormat(ext.clone())),
    };

    result.map_err(|source| TallyError::DocumentRead {
        path: document.path.clone(),
        source,
    })
}

/// Read a whole text file with the given encoding strategy
pub fn read_text(path: &Path, encoding: EncodingStrategy) -> Result<String, ReadFailure> {
    let bytes = fs::read(path)?;

    match encoding {
        EncodingStrategy::Strict => Ok(String::from_utf8(bytes)?),
        EncodingStrategy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
