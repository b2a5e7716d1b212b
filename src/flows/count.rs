//! Count flow - Reads every selected document and counts every search value
//!
//! A document that cannot be read is reported and skipped; it never aborts
//! the run and contributes no records. The table is exported only when at
//! least one record was produced.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::counter::CountingAggregator;
use crate::core::error::TallyError;
use crate::core::file_reader::{read_document, ReadConfig};
use crate::core::model::{Document, DocumentFailure, RunReport};
use crate::core::paths::{collect_documents, unsupported_documents};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::values::{load_value_list, SearchValues};
use crate::export::xlsx::{with_default_extension, write_table};

/// Inputs of one counting run
#[derive(Debug, Clone)]
pub struct CountRequest {
    pub values: SearchValues,
    pub documents: Vec<Document>,
    pub read_config: ReadConfig,
}

/// Read and count every document, in selection order.
///
/// Fails before reading anything when there are no values or no documents.
pub fn count_documents(request: &CountRequest) -> Result<RunReport, TallyError> {
    if request.values.is_empty() {
        return Err(TallyError::NoSearchValues);
    }
    if request.documents.is_empty() {
        return Err(TallyError::NoDocumentsSelected);
    }

    let mut aggregator = CountingAggregator::new(&request.values);
    let mut failures = Vec::new();
    let mut documents_read = 0;

    for document in &request.documents {
        match read_document(document, &request.read_config) {
            Ok(text) => {
                tracing::debug!(
                    path = %document.path.display(),
                    chars = text.chars().count(),
                    "read document"
                );
                aggregator.add_document(&document.label, &text);
                documents_read += 1;
            }
            Err(error) => {
                tracing::warn!(path = %document.path.display(), %error, "skipping document");
                failures.push(DocumentFailure {
                    path: document.path.clone(),
                    label: document.label.clone(),
                    error,
                });
            }
        }
    }

    Ok(RunReport {
        table: aggregator.into_table(),
        failures,
        documents_read,
    })
}

/// Options of the count command, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub values: Vec<String>,
    pub values_file: Option<PathBuf>,
    pub documents: Vec<PathBuf>,
    pub output: PathBuf,
    pub read_config: ReadConfig,
    pub quiet: bool,
}

/// Run the count command
pub fn run_count(options: CountOptions, render_config: RenderConfig) -> Result<()> {
    let listed = match &options.values_file {
        Some(path) => load_value_list(path)?,
        None => Vec::new(),
    };
    let values = SearchValues::from_sources(&options.values, &listed);
    tracing::debug!(count = values.len(), "search values");

    let documents = collect_documents(&options.documents);
    for document in unsupported_documents(&documents) {
        tracing::warn!(path = %document.path.display(), "unsupported document extension");
    }

    let request = CountRequest {
        values,
        documents,
        read_config: options.read_config,
    };
    let report = count_documents(&request)?;

    for failure in &report.failures {
        eprintln!("{} {}", "read error:".red().bold(), failure.error);
    }

    if report.table.is_empty() {
        return Err(TallyError::EmptyResult.into());
    }

    let output = with_default_extension(&options.output);
    write_table(&report.table, &output)?;

    if !options.quiet {
        let renderer = Renderer::with_config(render_config);
        renderer.render_to(&report, std::io::stdout().lock())?;
        print_summary(&report, request.documents.len(), &output);
    }

    Ok(())
}

/// Run the values command: print the merged search values, one per line
pub fn run_values(values: &[String], values_file: Option<&Path>) -> Result<()> {
    let listed = match values_file {
        Some(path) => load_value_list(path)?,
        None => Vec::new(),
    };
    let merged = SearchValues::from_sources(values, &listed);
    if merged.is_empty() {
        return Err(TallyError::NoSearchValues.into());
    }

    let mut stdout = std::io::stdout().lock();
    for value in merged.iter() {
        writeln!(stdout, "{}", value)?;
    }
    Ok(())
}

fn print_summary(report: &RunReport, selected: usize, output: &Path) {
    eprintln!(
        "{} {} record(s) from {}/{} document(s) saved to {}",
        "done:".green().bold(),
        report.table.len(),
        report.documents_read,
        selected,
        output.display()
    );
}
