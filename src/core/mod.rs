//! Core module - Contains the fundamental data structures and readers
//!
//! This module provides:
//! - Result model (Document, CountRecord, ResultTable)
//! - Error types
//! - Search value set and value-list loading
//! - Document reading (text and spreadsheet)
//! - Occurrence counting
//! - Rendering functions for different output formats
//! - Path utilities and document selection

pub mod counter;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod spreadsheet;
pub mod values;
