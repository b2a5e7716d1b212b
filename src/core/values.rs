//! Search value set
//!
//! Values come from two places: entries typed on the command line and a
//! value-list file with one value per line. Both are merged into a single
//! de-duplicated, ordered set before counting.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::error::TallyError;

/// Ordered set of literal values to count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchValues {
    values: Vec<String>,
}

impl SearchValues {
    /// Merge manual entries and value-list entries.
    ///
    /// Entries are trimmed, blanks dropped and exact duplicates removed,
    /// keeping the first occurrence.
    pub fn from_sources<M, L>(manual: M, listed: L) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let mut set = Self::default();
        let mut seen = HashSet::new();

        let manual = manual.into_iter().map(|v| v.as_ref().trim().to_string());
        let listed = listed.into_iter().map(|v| v.as_ref().trim().to_string());

        for value in manual.chain(listed) {
            if value.is_empty() {
                continue;
            }
            if seen.insert(value.clone()) {
                set.values.push(value);
            }
        }

        set
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

/// Parse a value list: one value per line, trimmed, blank lines skipped
pub fn parse_value_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a UTF-8 value-list file
pub fn load_value_list(path: &Path) -> Result<Vec<String>, TallyError> {
    let content = fs::read_to_string(path).map_err(|source| TallyError::ValueList {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_value_list(&content);
    tracing::debug!(path = %path.display(), count = values.len(), "loaded value list");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_sources_dedupes_keeping_first() {
        let values = SearchValues::from_sources(["cat", " dog ", "cat"], ["dog", "bird"]);
        let collected: Vec<_> = values.iter().collect();
        assert_eq!(collected, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_from_sources_drops_blanks() {
        let values = SearchValues::from_sources(["", "   "], Vec::<String>::new());
        assert!(values.is_empty());
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let values = SearchValues::from_sources(["Foo", "foo"], Vec::<String>::new());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_parse_value_list_skips_blank_lines() {
        let parsed = parse_value_list("  alpha \n\n\t\nbeta\r\n  gamma delta  \n");
        assert_eq!(parsed, vec!["alpha", "beta", "gamma delta"]);
    }

    #[test]
    fn test_load_value_list() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("values.txt");
        std::fs::write(&path, "Москва\n\nКиев\n").unwrap();

        let values = load_value_list(&path).unwrap();
        assert_eq!(values, vec!["Москва", "Киев"]);
    }

    #[test]
    fn test_load_value_list_missing_file() {
        let err = load_value_list(Path::new("/nonexistent/values.txt")).unwrap_err();
        assert!(matches!(err, TallyError::ValueList { .. }));
    }
}
