//! Per-column formatting options

use super::style::ColumnAlign;

/// Everything `add_column` needs besides the values themselves
///
/// `significant` rounds first; `digits` then fixes the decimal count of the
/// rounded values. Both are optional.
///
/// ```
/// use tabtex::{ColumnAlign, ColumnSpec};
///
/// let spec = ColumnSpec::new("I").unit("A").digits(2).align(ColumnAlign::Right);
/// assert_eq!(spec.digits, Some(2));
/// assert_eq!(spec.blank_fields, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
pub struct ColumnSpec {
    /// Header text
    pub name: String,
    /// Unit text, wrapped for display when non-empty
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub unit: String,
    /// Column spec tag (default `c`)
    ///
    /// Documents carry it in `DocumentColumn::align` so an explicit `c` can
    /// be told apart from a missing one.
    #[cfg_attr(feature = "data-loading", serde(skip))]
    pub align: ColumnAlign,
    /// Fixed number of digits after the decimal point
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub digits: Option<usize>,
    /// Number of significant figures applied before formatting
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub significant: Option<i32>,
    /// Placeholder cells placed above the values
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub blank_fields: usize,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        ColumnSpec {
            name: name.into(),
            unit: String::new(),
            align: ColumnAlign::Center,
            digits: None,
            significant: None,
            blank_fields: 0,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn align(mut self, align: impl Into<ColumnAlign>) -> Self {
        self.align = align.into();
        self
    }

    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn significant(mut self, significant: i32) -> Self {
        self.significant = Some(significant);
        self
    }

    pub fn blank_fields(mut self, blank_fields: usize) -> Self {
        self.blank_fields = blank_fields;
        self
    }
}
