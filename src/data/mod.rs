//! Data layer - Static markup symbols and constants
//!
//! This module contains the static data used when rendering tables:
//! - Default separators, fences and rules
//! - Numeric policy limits

pub mod constants;

// Re-export commonly used items
pub use constants::{
    BOTTOM_RULE, COLUMN_SEPARATOR, EMPTY_FIELD, HLINE, MAX_DECIMALS, MAX_DEFAULT_DECIMALS,
    MID_RULE, ROW_TERMINATOR, TABLE_END, TABLE_START, TOP_RULE,
};
