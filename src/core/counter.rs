//! Occurrence counting
//!
//! Values are literal text matched case-insensitively. Matches are counted
//! left to right without overlap, so "aa" occurs once in "aaa".

use crate::core::model::{CountRecord, ResultTable};
use crate::core::values::SearchValues;

/// Fold text to the common case used for matching.
///
/// Lowercases per character, so a word-final capital sigma does not turn
/// into `ς`, and final sigma itself folds to `σ`.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Count non-overlapping occurrences of an already folded needle
fn count_folded(folded_text: &str, folded_value: &str) -> usize {
    if folded_value.is_empty() {
        return 0;
    }
    folded_text.matches(folded_value).count()
}

/// Count non-overlapping, case-insensitive occurrences of `value` in `text`
#[cfg(test)]
fn count_occurrences(text: &str, value: &str) -> usize {
    count_folded(&fold_case(text), &fold_case(value))
}

/// Counts every search value against documents and accumulates the records
#[derive(Debug, Clone)]
pub struct CountingAggregator {
    /// (original value, folded value), in search order
    values: Vec<(String, String)>,
    table: ResultTable,
}

impl CountingAggregator {
    pub fn new(values: &SearchValues) -> Self {
        Self {
            values: values
                .iter()
                .map(|v| (v.to_string(), fold_case(v)))
                .collect(),
            table: ResultTable::new(),
        }
    }

    /// Count every value in one document's text and append the records.
    ///
    /// Returns the number of records added.
    pub fn add_document(&mut self, label: &str, text: &str) -> usize {
        let folded_text = fold_case(text);
        for (value, folded_value) in &self.values {
            let count = count_folded(&folded_text, folded_value);
            tracing::debug!(document = %label, value = %value, count, "counted");
            self.table.push(CountRecord::new(label, value.clone(), count));
        }
        self.values.len()
    }

    pub fn into_table(self) -> ResultTable {
        self.table
    }
}
