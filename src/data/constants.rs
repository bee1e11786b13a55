//! Default markup symbols and numeric policy constants
//!
//! These are the values a fresh [`TableConfig`](crate::TableConfig) starts
//! from. Every one of them can be overridden per table.

// ============================================================================
// Markup Symbols
// ============================================================================

/// Text placed between two cells of a row
pub const COLUMN_SEPARATOR: &str = " & ";

/// Text terminating every header, unit and body row
pub const ROW_TERMINATOR: &str = " \\\\";

/// Placeholder for missing cells and leading blank fields
pub const EMPTY_FIELD: &str = "-";

/// Opening fence; the column spec is appended in braces
pub const TABLE_START: &str = "\\begin{tabular}";

/// Closing fence
pub const TABLE_END: &str = "\\end{tabular}";

/// Plain horizontal rule
pub const HLINE: &str = "\\hline";

/// Booktabs rules
pub const TOP_RULE: &str = "\\toprule";
pub const MID_RULE: &str = "\\midrule";
pub const BOTTOM_RULE: &str = "\\bottomrule";

// ============================================================================
// Numeric Policy
// ============================================================================

/// Upper bound for the decimals picked when a column gives no explicit
/// digit count
pub const MAX_DEFAULT_DECIMALS: usize = 6;

/// Largest decimal digit count a column may render with, explicit or
/// default
pub const MAX_DECIMALS: usize = 64;

/// Relative tolerance used when deciding whether a value is reproduced
/// exactly at a given number of decimals
pub const DECIMAL_TOLERANCE: f64 = 1e-9;
