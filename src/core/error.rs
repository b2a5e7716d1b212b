//! Error types shared by the readers, the counting flow and the exporter

use std::path::PathBuf;

use thiserror::Error;

/// Underlying cause of a failed document read.
///
/// The run treats every variant the same way: the document is reported and
/// skipped. The variants only exist so the message names the real cause.
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("unsupported document format '{0}' (expected .txt or .xlsx)")]
    UnsupportedFormat(String),
}

/// Errors produced by a counting run
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("failed to read {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    #[error("no search values: enter or load at least one value")]
    NoSearchValues,

    #[error("no documents selected: pass at least one .txt or .xlsx file")]
    NoDocumentsSelected,

    #[error("no data to write: none of the selected documents could be read")]
    EmptyResult,

    #[error("failed to load value list {}: {source}", path.display())]
    ValueList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl TallyError {
    /// Stable machine-readable code, used in rendered output
    pub fn code(&self) -> &'static str {
        match self {
            TallyError::DocumentRead { .. } => "DOCUMENT_READ",
            TallyError::NoSearchValues => "NO_SEARCH_VALUES",
            TallyError::NoDocumentsSelected => "NO_DOCUMENTS_SELECTED",
            TallyError::EmptyResult => "EMPTY_RESULT",
            TallyError::ValueList { .. } => "VALUE_LIST",
            TallyError::Export { .. } => "EXPORT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_read_message_names_path_and_cause() {
        let err = TallyError::DocumentRead {
            path: PathBuf::from("/data/missing.txt"),
            source: ReadFailure::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        };
        let message = err.to_string();
        assert!(message.contains("/data/missing.txt"));
        assert!(message.contains("No such file or directory"));
        assert_eq!(err.code(), "DOCUMENT_READ");
    }

    #[test]
    fn test_unsupported_format_message() {
        let failure = ReadFailure::UnsupportedFormat("pdf".to_string());
        assert!(failure.to_string().contains("'pdf'"));
    }

    #[test]
    fn test_precondition_codes() {
        assert_eq!(TallyError::NoSearchValues.code(), "NO_SEARCH_VALUES");
        assert_eq!(TallyError::NoDocumentsSelected.code(), "NO_DOCUMENTS_SELECTED");
        assert_eq!(TallyError::EmptyResult.code(), "EMPTY_RESULT");
    }
}
