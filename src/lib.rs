//! # tabtex
//!
//! Typeset columns of numbers as aligned LaTeX `tabular` markup.
//!
//! ## Features
//!
//! - **Per-column precision**: fixed decimal digits, significant figures, or both
//! - **Aligned cells**: every number in a column shares one field width and one
//!   decimal count
//! - **Integer columns**: columns of whole numbers always render without decimals
//! - **Ragged columns**: short columns and leading blanks are padded with a placeholder
//! - **Data loading**: CSV, JSON, YAML and TOML input (feature `data-loading`)
//!
//! ## Usage Examples
//!
//! ### Building a table
//!
//! ```rust
//! use tabtex::{ColumnSpec, TableBuilder, TableConfig};
//!
//! let mut table = TableBuilder::new(TableConfig::new().caption("Ohm's law"));
//! table.add_column([10, 20, 30], ColumnSpec::new("U").unit("V")).unwrap();
//! table.add_column([0.114, 0.206, 0.317], ColumnSpec::new("I").unit("A").digits(2)).unwrap();
//!
//! let latex = table.render();
//! assert!(latex.starts_with("\\begin{tabular}{cc}"));
//! assert!(latex.contains(" 20 & 0.21 \\\\"));
//! ```
//!
//! ### Significant figures
//!
//! ```rust
//! use tabtex::round_to_significant_figures;
//!
//! let rounded = round_to_significant_figures(&[123456.0, 0.0012345], 3).unwrap();
//! assert_eq!(rounded, vec![123000.0, 0.00123]);
//! ```

/// Core formatting and rendering modules
pub mod core;

/// Data layer - default symbols and constants
pub mod data;

/// Feature modules - optional front ends
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use crate::core::column::{format_column, Column, ColumnAlign, ColumnSpec, UnitStyle};
pub use crate::core::numeric::{
    default_decimals, is_integral, order_of_magnitude, round_to_significant_figures,
    round_value_to_significant_figures,
};
pub use crate::core::table::{RuleStyle, TableBuilder, TableConfig, TableRule};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
#[cfg(feature = "data-loading")]
pub use features::loading;

// Re-export utilities
pub use utils::error::{TableError, TableResult};

/// Render a single table from `(values, spec)` pairs
///
/// Shorthand for building a [`TableBuilder`] column by column and calling
/// [`TableBuilder::render`].
pub fn render_table<I>(config: TableConfig, columns: I) -> TableResult<String>
where
    I: IntoIterator<Item = (Vec<f64>, ColumnSpec)>,
{
    let mut table = TableBuilder::new(config);
    for (values, spec) in columns {
        table.add_column(values, spec)?;
    }
    Ok(table.render())
}
