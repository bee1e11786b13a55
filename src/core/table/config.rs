//! Table output configuration

use super::rule::RuleStyle;
use crate::core::column::UnitStyle;
use crate::data::constants::{
    COLUMN_SEPARATOR, EMPTY_FIELD, ROW_TERMINATOR, TABLE_END, TABLE_START,
};

/// Separators, symbols and decorations of a rendered table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default))]
pub struct TableConfig {
    /// Text between two cells (default: " & ")
    pub column_separator: String,
    /// Text ending every row (default: " \\")
    pub row_terminator: String,
    /// Placeholder for missing cells and blank fields (default: "-")
    pub empty_field: String,
    /// Opening fence (default: "\begin{tabular}")
    pub table_start: String,
    /// Closing fence (default: "\end{tabular}")
    pub table_end: String,
    /// Table caption (optional)
    pub caption: Option<String>,
    /// Table label (optional)
    pub label: Option<String>,
    pub rule_style: RuleStyle,
    pub unit_style: UnitStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_separator: COLUMN_SEPARATOR.to_string(),
            row_terminator: ROW_TERMINATOR.to_string(),
            empty_field: EMPTY_FIELD.to_string(),
            table_start: TABLE_START.to_string(),
            table_end: TABLE_END.to_string(),
            caption: None,
            label: None,
            rule_style: RuleStyle::Hline,
            unit_style: UnitStyle::Monospace,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with booktabs rules
    pub fn booktabs() -> Self {
        Self {
            rule_style: RuleStyle::Booktabs,
            ..Default::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn row_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.row_terminator = terminator.into();
        self
    }

    pub fn empty_field(mut self, symbol: impl Into<String>) -> Self {
        self.empty_field = symbol.into();
        self
    }

    pub fn fences(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.table_start = start.into();
        self.table_end = end.into();
        self
    }

    pub fn rule_style(mut self, style: RuleStyle) -> Self {
        self.rule_style = style;
        self
    }

    pub fn unit_style(mut self, style: UnitStyle) -> Self {
        self.unit_style = style;
        self
    }
}
