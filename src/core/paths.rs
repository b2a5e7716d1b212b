//! Path helpers and document selection
//!
//! Turns the paths given on the command line into an ordered, de-duplicated
//! list of documents. Directories are expanded to the supported files they
//! contain.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::model::{Document, DocumentFormat};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lowercased extension, if any
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Base file name used to label a document's records
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}

/// Collect documents from command-line inputs.
///
/// Selection order is kept and a path already selected is not added again.
/// A directory contributes every `.txt`/`.xlsx` file beneath it, sorted by
/// file name. Explicit files are kept whatever their extension so an
/// unsupported one fails loudly at read time.
pub fn collect_documents(inputs: &[PathBuf]) -> Vec<Document> {
    let mut seen = HashSet::new();
    let mut documents = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let document = Document::new(entry.into_path());
                if document.format.is_supported() && seen.insert(document.path.clone()) {
                    documents.push(document);
                }
            }
        } else if seen.insert(input.clone()) {
            documents.push(Document::new(input.clone()));
        }
    }

    documents
}

/// Whether any selected document has an extension the readers do not handle
pub fn unsupported_documents(documents: &[Document]) -> impl Iterator<Item = &Document> {
    documents
        .iter()
        .filter(|d| matches!(d.format, DocumentFormat::Unsupported(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("docs/a.txt");
        assert_eq!(normalize_path(path), "docs/a.txt");
    }

    #[test]
    fn test_normalized_extension() {
        assert_eq!(
            normalized_extension(Path::new("A.TXT")),
            Some("txt".to_string())
        );
        assert_eq!(normalized_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label(Path::new("/a/b/report.xlsx")), "report.xlsx");
        assert_eq!(file_label(Path::new("report.txt")), "report.txt");
    }

    #[test]
    fn test_collect_documents_dedupes_and_keeps_order() {
        let inputs = vec![
            PathBuf::from("b.txt"),
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
        ];
        let docs = collect_documents(&inputs);
        let labels: Vec<_> = docs.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_collect_documents_expands_directories() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("image.png"), "x").unwrap();
        fs::write(temp.path().join("sub/c.txt"), "c").unwrap();

        let docs = collect_documents(&[temp.path().to_path_buf()]);
        let labels: Vec<_> = docs.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_explicit_unsupported_file_is_kept() {
        let docs = collect_documents(&[PathBuf::from("scan.pdf")]);
        assert_eq!(docs.len(), 1);
        assert_eq!(unsupported_documents(&docs).count(), 1);
    }
}
