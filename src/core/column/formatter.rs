//! Column formatter
//!
//! Turns a slice of numbers into a frozen [`Column`] of equal-width,
//! equal-precision cell strings.
//!
//! # Precision policies
//!
//! - **IntegerColumnPolicy: decimals_forced_to_zero.** When every value of
//!   the column (after significant-figure rounding) is integral, the column
//!   renders without decimals, even if the caller asked for some.
//! - **Default precision.** A non-integral column without an explicit digit
//!   count uses [`default_decimals`].

use tracing::{debug, trace};

use super::spec::ColumnSpec;
use super::style::{ColumnAlign, UnitStyle};
use crate::core::numeric::{
    default_decimals, is_integral, order_of_magnitude, round_to_significant_figures,
};
use crate::data::constants::MAX_DECIMALS;
use crate::utils::error::{TableError, TableResult};

/// A formatted table column
///
/// Built once by [`format_column`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    unit: String,
    align: ColumnAlign,
    cells: Vec<String>,
    width: usize,
    decimals: usize,
    blank_fields: usize,
}

impl Column {
    /// Header text
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-wrapped unit, empty when the column has none
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn align(&self) -> &ColumnAlign {
        &self.align
    }

    /// All cells, leading blank fields included
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell at `row`, if the column reaches that far
    pub fn cell(&self, row: usize) -> Option<&str> {
        self.cells.get(row).map(String::as_str)
    }

    /// Numeric cells only
    pub fn value_cells(&self) -> &[String] {
        &self.cells[self.blank_fields..]
    }

    /// Field width shared by every numeric cell
    pub fn width(&self) -> usize {
        self.width
    }

    /// Digits after the decimal point shared by every numeric cell
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn blank_fields(&self) -> usize {
        self.blank_fields
    }

    /// Number of rows this column occupies
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Normalize and format one column of values
///
/// `empty_field` fills the leading blank fields and `unit_style` wraps a
/// non-empty unit.
///
/// # Errors
///
/// - [`TableError::NonFiniteValue`] for NaN or infinite input
/// - [`TableError::InvalidArgument`] for a non-positive significant-figure
///   count or a digit count above [`MAX_DECIMALS`]
pub fn format_column(
    values: &[f64],
    spec: &ColumnSpec,
    empty_field: &str,
    unit_style: UnitStyle,
) -> TableResult<Column> {
    if let Some(digits) = spec.digits.filter(|&d| d > MAX_DECIMALS) {
        return Err(TableError::invalid(format!(
            "column '{}' asks for {} decimal digits, at most {} are supported",
            spec.name, digits, MAX_DECIMALS
        )));
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(TableError::NonFiniteValue {
            column: spec.name.clone(),
            index,
        });
    }

    let values = match spec.significant {
        Some(n) => round_to_significant_figures(values, n)?,
        None => values.to_vec(),
    };

    let decimals = resolve_decimals(&values, spec);
    let formatted: Vec<String> = values
        .iter()
        .map(|v| format!("{:.*}", decimals, v))
        .collect();
    let width = field_width(&values, decimals, &formatted);

    let mut cells = Vec::with_capacity(spec.blank_fields + formatted.len());
    cells.extend(std::iter::repeat(empty_field.to_string()).take(spec.blank_fields));
    cells.extend(formatted.iter().map(|text| format!("{:>1$}", text, width)));

    debug!(
        column = %spec.name,
        rows = values.len(),
        blank_fields = spec.blank_fields,
        width,
        decimals,
        "formatted column"
    );

    Ok(Column {
        name: spec.name.clone(),
        unit: unit_style.wrap(&spec.unit),
        align: spec.align.clone(),
        cells,
        width,
        decimals,
        blank_fields: spec.blank_fields,
    })
}

/// Decimal digit count for a column, after significant-figure rounding
fn resolve_decimals(values: &[f64], spec: &ColumnSpec) -> usize {
    if is_integral(values) {
        if let Some(requested) = spec.digits.filter(|&d| d > 0) {
            debug!(
                column = %spec.name,
                requested,
                "integral column, decimals forced to zero"
            );
        }
        return 0;
    }

    match spec.digits {
        Some(digits) => digits,
        None => {
            let digits = default_decimals(values);
            trace!(column = %spec.name, digits, "default precision");
            digits
        }
    }
}

/// Field width reserved for every numeric cell
///
/// One sign slot (when the largest value reaches the units place or any
/// cell is negative), the integer digits, and the decimal point plus
/// decimals. Widened to the longest formatted value so carries like
/// `9.996 -> 10.00` keep the column aligned.
fn field_width(values: &[f64], decimals: usize, formatted: &[String]) -> usize {
    if values.is_empty() {
        return 0;
    }

    let max_order = values
        .iter()
        .map(|&v| order_of_magnitude(v))
        .max()
        .unwrap_or(0);
    let negative = formatted.iter().any(|text| text.starts_with('-'));

    let mut width = 0;
    if max_order >= 0 || negative {
        width += 1;
    }
    width += if max_order >= 0 {
        max_order as usize + 1
    } else {
        1
    };
    if decimals > 0 {
        width += 1 + decimals;
    }

    let longest = formatted.iter().map(String::len).max().unwrap_or(0);
    width.max(longest)
}
