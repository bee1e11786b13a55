//! Table building and LaTeX rendering
//!
//! Columns are formatted independently and combined row by row at render
//! time; short columns are padded with the empty-field placeholder.
//!
//! # Example
//!
//! ```
//! use tabtex::{ColumnSpec, TableBuilder, TableConfig};
//!
//! let mut table = TableBuilder::new(TableConfig::new().label("tab:ohm"));
//! table.add_column([10, 20, 30], ColumnSpec::new("U").unit("V")).unwrap();
//! table.add_column([0.114, 0.206, 0.317], ColumnSpec::new("I").unit("A").digits(2)).unwrap();
//!
//! let latex = table.render();
//! assert!(latex.contains(" 10 & 0.11 \\\\"));
//! ```

mod config;
mod generator;
mod rule;


// Re-export public API
pub use config::TableConfig;
pub use generator::TableBuilder;
pub use rule::{RuleStyle, TableRule};
