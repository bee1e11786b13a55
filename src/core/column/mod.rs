//! Column formatting
//!
//! Each column is normalized on its own: optional significant-figure
//! rounding, then a decimal count and a field width shared by all of its
//! cells.
//!
//! # Architecture
//!
//! ```text
//! values -> sig-fig rounding -> precision policy -> field width -> Column
//! ```
//!
//! # Example
//!
//! ```
//! use tabtex::{format_column, ColumnSpec, UnitStyle};
//!
//! let spec = ColumnSpec::new("I").unit("A").digits(2);
//! let column = format_column(&[0.114, 0.206, 0.317], &spec, "-", UnitStyle::default()).unwrap();
//! assert_eq!(column.cells(), ["0.11", "0.21", "0.32"]);
//! ```

mod formatter;
mod spec;
mod style;


// Re-export public API
pub use formatter::{format_column, Column};
pub use spec::ColumnSpec;
pub use style::{ColumnAlign, UnitStyle};
