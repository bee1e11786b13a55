//! Table builder and LaTeX renderer

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::config::TableConfig;
use super::rule::TableRule;
use crate::core::column::{format_column, Column, ColumnSpec};
use crate::utils::error::TableResult;

/// Accumulates formatted columns and renders them as a `tabular`
///
/// Columns are appended with [`add_column`](Self::add_column) and rendered
/// left to right in insertion order. Rendering does not touch the builder,
/// so it can run any number of times.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    config: TableConfig,
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Create an empty table with the given configuration
    pub fn new(config: TableConfig) -> Self {
        TableBuilder {
            config,
            columns: Vec::new(),
        }
    }

    /// Normalize, format and append one column
    ///
    /// # Errors
    ///
    /// Fails on a non-positive significant-figure count, a digit count above
    /// [`MAX_DECIMALS`](crate::constants::MAX_DECIMALS) or a non-finite
    /// value; the table is left unchanged in that case.
    pub fn add_column<I, T>(&mut self, values: I, spec: ColumnSpec) -> TableResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let values: Vec<f64> = values.into_iter().map(Into::into).collect();
        let column = format_column(
            &values,
            &spec,
            &self.config.empty_field,
            self.config.unit_style,
        )?;
        self.columns.push(column);
        Ok(())
    }

    /// Chaining form of [`add_column`](Self::add_column)
    pub fn with_column<I, T>(mut self, values: I, spec: ColumnSpec) -> TableResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.add_column(values, spec)?;
        Ok(self)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Columns in render order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of body rows: the length of the longest column
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Whether any column carries a unit
    pub fn has_units(&self) -> bool {
        self.columns.iter().any(|c| !c.unit().is_empty())
    }

    /// Generate the complete LaTeX tabular code
    pub fn render(&self) -> String {
        let config = &self.config;
        let mut output = String::new();

        let col_spec: String = self.columns.iter().map(|c| c.align().tag()).collect();
        let _ = writeln!(output, "{}{{{}}}", config.table_start, col_spec);
        let _ = writeln!(output, "{}", config.rule_style.command(TableRule::Top));

        if !self.columns.is_empty() {
            self.push_row(&mut output, self.columns.iter().map(Column::name));
            if self.has_units() {
                // Columns without a unit stay blank here, not the placeholder
                self.push_row(&mut output, self.columns.iter().map(Column::unit));
            }
        }
        let _ = writeln!(output, "{}", config.rule_style.command(TableRule::Mid));

        let rows = self.row_count();
        for row in 0..rows {
            let cells = self
                .columns
                .iter()
                .map(|c| c.cell(row).unwrap_or(config.empty_field.as_str()));
            self.push_row(&mut output, cells);
        }
        let _ = writeln!(output, "{}", config.rule_style.command(TableRule::Bottom));

        if let Some(caption) = config.caption.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(output, "\\caption{{{}}}", caption);
        }
        if let Some(label) = config.label.as_deref().filter(|l| !l.is_empty()) {
            let _ = writeln!(output, "\\label{{{}}}", label);
        }
        let _ = writeln!(output, "{}", config.table_end);

        debug!(columns = self.columns.len(), rows, "rendered table");
        output
    }

    /// Render into a writer
    ///
    /// Write failures are returned as [`TableError::Io`](crate::TableError::Io).
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> TableResult<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render into a file, creating or truncating it
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> TableResult<()> {
        let mut file = BufWriter::new(File::create(path.as_ref())?);
        self.write_to(&mut file)?;
        debug!(path = %path.as_ref().display(), "wrote table");
        Ok(())
    }

    fn push_row<'a>(&self, output: &mut String, cells: impl Iterator<Item = &'a str>) {
        let mut first = true;
        for cell in cells {
            if !first {
                output.push_str(&self.config.column_separator);
            }
            first = false;
            output.push_str(cell);
        }
        output.push_str(&self.config.row_terminator);
        output.push('\n');
    }
}
