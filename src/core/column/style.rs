//! Column alignment and unit styling

/// Column alignment tag for the `tabular` column spec
///
/// The tag is passed through to the markup; the formatter never interprets
/// it. Anything other than `l`, `c` or `r` is kept verbatim as a [`Spec`].
///
/// [`Spec`]: ColumnAlign::Spec
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
#[cfg_attr(feature = "data-loading", serde(from = "String"))]
pub enum ColumnAlign {
    Left,
    #[default]
    Center,
    Right,
    /// Any other column spec, e.g. `S` or `p{3cm}`
    Spec(String),
}

impl ColumnAlign {
    /// Parse from a LaTeX column spec
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "l" => ColumnAlign::Left,
            "c" | "" => ColumnAlign::Center,
            "r" => ColumnAlign::Right,
            other => ColumnAlign::Spec(other.to_string()),
        }
    }

    /// The column spec text emitted after the opening fence
    pub fn tag(&self) -> &str {
        match self {
            ColumnAlign::Left => "l",
            ColumnAlign::Center => "c",
            ColumnAlign::Right => "r",
            ColumnAlign::Spec(spec) => spec,
        }
    }
}

impl From<char> for ColumnAlign {
    fn from(c: char) -> Self {
        ColumnAlign::from_tag(c.encode_utf8(&mut [0; 4]))
    }
}

impl From<&str> for ColumnAlign {
    fn from(tag: &str) -> Self {
        ColumnAlign::from_tag(tag)
    }
}

impl From<String> for ColumnAlign {
    fn from(tag: String) -> Self {
        ColumnAlign::from_tag(&tag)
    }
}

/// How a non-empty unit is wrapped in the unit row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
#[cfg_attr(feature = "data-loading", serde(rename_all = "lowercase"))]
pub enum UnitStyle {
    /// `\texttt{[V]}`
    #[default]
    Monospace,
    /// `[V]`
    Bracketed,
    /// `V`
    Plain,
}

impl UnitStyle {
    /// Wrap a unit for display; an empty unit stays empty
    pub fn wrap(&self, unit: &str) -> String {
        if unit.is_empty() {
            return String::new();
        }
        match self {
            UnitStyle::Monospace => format!("\\texttt{{[{}]}}", unit),
            UnitStyle::Bracketed => format!("[{}]", unit),
            UnitStyle::Plain => unit.to_string(),
        }
    }
}
