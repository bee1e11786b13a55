//! Feature modules - Optional front ends for the table builder
//!
//! This module contains integrations that sit on top of the core engine:
//! - Loading columns from CSV
//! - Loading complete table descriptions from JSON, YAML or TOML

#[cfg(feature = "data-loading")]
pub mod loading;

// Re-export commonly used types
#[cfg(feature = "data-loading")]
pub use loading::{ColumnDefaults, DataFormat, DocumentColumn, TableDocument};
