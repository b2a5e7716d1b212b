//! Flows module - Operations combining reading, counting and export
//!
//! Provides:
//! - count: Count search values across documents and export the table

pub mod count;
