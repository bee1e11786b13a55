//! Core table modules
//!
//! This module contains the formatting and rendering engine:
//! - `numeric`: significant figures, orders of magnitude, precision policies
//! - `column`: per-column normalization and cell formatting
//! - `table`: column accumulation and LaTeX rendering

pub mod column;
pub mod numeric;
pub mod table;

// Re-export main types and functions
pub use column::{format_column, Column, ColumnAlign, ColumnSpec, UnitStyle};
pub use numeric::{
    default_decimals, is_integral, order_of_magnitude, round_to_significant_figures,
    round_value_to_significant_figures,
};
pub use table::{RuleStyle, TableBuilder, TableConfig, TableRule};
