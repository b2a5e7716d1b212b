//! Export module - Persists a result table for the operator

pub mod xlsx;
