//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::file_reader::{EncodingStrategy, ReadConfig};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::export::xlsx::DEFAULT_OUTPUT;
use crate::flows::count::CountOptions;

/// doctally - count literal values across text and spreadsheet documents.
#[derive(Parser, Debug)]
#[command(name = "doctally")]
#[command(
    author,
    version,
    about,
    long_about = r#"doctally counts how many times each search value occurs in each document
and writes the counts to a spreadsheet with the columns Файл / Значение / Количество.

Documents may be plain text (.txt, UTF-8) or Excel workbooks (.xlsx, every sheet).
Matching is literal and case-insensitive; overlapping occurrences are not counted twice.

Output formats (stdout, alongside the exported .xlsx):
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: Markdown table
- table: aligned plain text

Examples:
    doctally count -s invoice -s total reports/a.txt reports/b.xlsx
    doctally count --values-file names.txt docs/ -o counts.xlsx
    doctally values --values-file names.txt
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/table).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the stdout format for the result table.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- table"
    )]
    pub format: OutputFormat,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Do not render the result table on stdout and skip the completion line.\n\
Read errors are still reported on stderr and the spreadsheet is still written."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr (per-document reads and per-value counts).\n\
RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count search values in documents and export the table.
    #[command(
        long_about = "Read every DOCUMENT in the given order and count every search value in it.\n\n\
Search values are the union of --value entries and the lines of --values-file, trimmed,\n\
with blanks and duplicates removed. A directory argument selects every .txt/.xlsx file\n\
beneath it. A document that cannot be read is reported and skipped.\n\n\
Examples:\n\
  doctally count -s hello a.txt\n\
  doctally count --values-file values.txt reports/ --output counts.xlsx\n"
    )]
    Count {
        /// Search value (repeatable or comma-separated).
        #[arg(short = 's', long = "value", value_name = "VALUE", value_delimiter = ',')]
        values: Vec<String>,

        /// File with one search value per line.
        #[arg(
            long,
            value_name = "PATH",
            long_help = "UTF-8 text file with one search value per line.\n\n\
Surrounding whitespace is stripped and blank lines are skipped."
        )]
        values_file: Option<PathBuf>,

        /// Destination spreadsheet.
        #[arg(
            short,
            long,
            default_value = DEFAULT_OUTPUT,
            value_name = "PATH",
            long_help = "Destination spreadsheet. `.xlsx` is appended when the path has no extension.\n\n\
Nothing is written when no document could be read."
        )]
        output: PathBuf,

        /// Replace invalid UTF-8 in text documents instead of failing them.
        #[arg(long)]
        lossy: bool,

        /// Documents (.txt/.xlsx) or directories to search.
        #[arg(value_name = "DOCUMENT", num_args = 0..)]
        documents: Vec<PathBuf>,
    },

    /// Show the search values that a value list and manual entries resolve to.
    #[command(
        long_about = "Load --values-file, merge it with --value entries the same way `count`\n\
does, and print the resulting values one per line.\n\n\
Example:\n\
  doctally values --values-file names.txt -s extra\n"
    )]
    Values {
        /// Search value (repeatable or comma-separated).
        #[arg(short = 's', long = "value", value_name = "VALUE", value_delimiter = ',')]
        values: Vec<String>,

        /// File with one search value per line.
        #[arg(long, value_name = "PATH")]
        values_file: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig::with_pretty(cli.format, cli.pretty);

    match cli.command {
        Commands::Count {
            values,
            values_file,
            output,
            lossy,
            documents,
        } => {
            let encoding = if lossy {
                EncodingStrategy::Lossy
            } else {
                EncodingStrategy::Strict
            };
            crate::flows::count::run_count(
                CountOptions {
                    values,
                    values_file,
                    documents,
                    output,
                    read_config: ReadConfig::with_encoding(encoding),
                    quiet: cli.quiet,
                },
                render_config,
            )
        }

        Commands::Values {
            values,
            values_file,
        } => crate::flows::count::run_values(&values, values_file.as_deref()),
    }
}
