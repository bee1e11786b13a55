//! Data loading for tables
//!
//! Builds a [`TableDocument`] from delimited text or from a serialized
//! table description:
//! - CSV: one column per field, header cells written as `Name [unit]`
//! - JSON / YAML / TOML: a [`TableConfig`] plus a `columns` list
//!
//! ```
//! use tabtex::features::loading::TableDocument;
//!
//! let csv = "U [V],I [A]\n10,0.114\n20,0.206\n30,0.317\n";
//! let doc = TableDocument::from_csv(csv.as_bytes()).unwrap();
//! assert_eq!(doc.columns[1].spec.unit, "A");
//! assert_eq!(doc.columns[1].values, vec![0.114, 0.206, 0.317]);
//! ```

use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::core::column::{ColumnAlign, ColumnSpec};
use crate::core::table::{TableBuilder, TableConfig};
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    /// `Name [unit]` header cells
    static ref HEADER_WITH_UNIT: Regex = Regex::new(r"^\s*(.*?)\s*\[([^\]]*)\]\s*$").unwrap();
}

/// Input formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "txt" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataFormat::Csv => "CSV",
            DataFormat::Json => "JSON",
            DataFormat::Yaml => "YAML",
            DataFormat::Toml => "TOML",
        }
    }
}

/// Formatting defaults for columns that leave a setting unset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDefaults {
    pub digits: Option<usize>,
    pub significant: Option<i32>,
    /// Used by columns that do not state an alignment
    pub align: Option<ColumnAlign>,
}

/// One column of a table description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentColumn {
    #[serde(flatten)]
    pub spec: ColumnSpec,
    /// Alignment as written in the input, `None` when left out
    #[serde(default)]
    pub align: Option<ColumnAlign>,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl DocumentColumn {
    /// Formatting options with the alignment resolved (center when unset)
    pub fn resolved_spec(&self) -> ColumnSpec {
        let mut spec = self.spec.clone();
        if let Some(align) = &self.align {
            spec.align = align.clone();
        }
        spec
    }
}

/// A complete table description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableDocument {
    #[serde(flatten)]
    pub config: TableConfig,
    #[serde(default)]
    pub columns: Vec<DocumentColumn>,
}

impl TableDocument {
    /// Parse a document in the given format
    pub fn parse(input: &str, format: DataFormat) -> TableResult<Self> {
        match format {
            DataFormat::Csv => Self::from_csv(input.as_bytes()),
            DataFormat::Json => Self::from_json(input),
            DataFormat::Yaml => Self::from_yaml(input),
            DataFormat::Toml => Self::from_toml(input),
        }
    }

    pub fn from_json(input: &str) -> TableResult<Self> {
        serde_json::from_str(input).map_err(|e| TableError::parse("JSON", e))
    }

    pub fn from_yaml(input: &str) -> TableResult<Self> {
        serde_yaml::from_str(input).map_err(|e| TableError::parse("YAML", e))
    }

    pub fn from_toml(input: &str) -> TableResult<Self> {
        toml::from_str(input).map_err(|e| TableError::parse("TOML", e))
    }

    /// Read comma-separated columns
    pub fn from_csv<R: Read>(reader: R) -> TableResult<Self> {
        Self::from_csv_with_delimiter(reader, b',')
    }

    /// Read delimited columns
    ///
    /// The first record is the header. Empty fields above a column's first
    /// value become blank fields, empty fields after its last value shorten
    /// it, and an empty field between two values is an error.
    pub fn from_csv_with_delimiter<R: Read>(reader: R, delimiter: u8) -> TableResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?.clone();
        if headers.is_empty() {
            return Err(TableError::data("missing header row"));
        }

        let mut columns: Vec<CsvColumn> = headers.iter().map(CsvColumn::from_header).collect();

        for record in rdr.records() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map(|p| p.line() as usize);
            if record.len() > columns.len() {
                return Err(TableError::Data {
                    message: format!(
                        "record has {} fields but the header has {}",
                        record.len(),
                        columns.len()
                    ),
                    line,
                });
            }
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(record.get(idx).unwrap_or(""), line)?;
            }
        }

        debug!(columns = columns.len(), "loaded delimited columns");
        Ok(TableDocument {
            config: TableConfig::default(),
            columns: columns.into_iter().map(CsvColumn::finish).collect(),
        })
    }

    /// Fill unset column settings from `defaults`
    pub fn apply_defaults(&mut self, defaults: &ColumnDefaults) {
        for column in &mut self.columns {
            let spec = &mut column.spec;
            if spec.digits.is_none() {
                spec.digits = defaults.digits;
            }
            if spec.significant.is_none() {
                spec.significant = defaults.significant;
            }
            if column.align.is_none() {
                column.align = defaults.align.clone();
            }
        }
    }

    /// Format every column into a table builder
    pub fn into_builder(self) -> TableResult<TableBuilder> {
        let mut table = TableBuilder::new(self.config);
        for column in self.columns {
            let spec = column.resolved_spec();
            table.add_column(column.values, spec)?;
        }
        Ok(table)
    }
}

/// Split a header cell into name and unit
pub fn parse_header(header: &str) -> (String, String) {
    match HEADER_WITH_UNIT.captures(header) {
        Some(caps) => (caps[1].to_string(), caps[2].trim().to_string()),
        None => (header.trim().to_string(), String::new()),
    }
}

fn csv_error(err: csv::Error) -> TableError {
    let line = err.position().map(|p| p.line() as usize);
    TableError::Data {
        message: err.to_string(),
        line,
    }
}

/// Column state while reading records
struct CsvColumn {
    spec: ColumnSpec,
    values: Vec<f64>,
    ended: bool,
}

impl CsvColumn {
    fn from_header(header: &str) -> Self {
        let (name, unit) = parse_header(header);
        CsvColumn {
            spec: ColumnSpec::new(name).unit(unit),
            values: Vec::new(),
            ended: false,
        }
    }

    fn push(&mut self, field: &str, line: Option<usize>) -> TableResult<()> {
        if field.is_empty() {
            if self.values.is_empty() {
                self.spec.blank_fields += 1;
            } else {
                self.ended = true;
            }
            return Ok(());
        }

        if self.ended {
            return Err(TableError::Data {
                message: format!("gap in column '{}'", self.spec.name),
                line,
            });
        }

        let value = field.parse::<f64>().map_err(|_| TableError::Data {
            message: format!("not a number in column '{}': '{}'", self.spec.name, field),
            line,
        })?;
        self.values.push(value);
        Ok(())
    }

    fn finish(self) -> DocumentColumn {
        DocumentColumn {
            spec: self.spec,
            align: None,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::RuleStyle;

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("U [V]"), ("U".to_string(), "V".to_string()));
        assert_eq!(parse_header(" I[mA] "), ("I".to_string(), "mA".to_string()));
        assert_eq!(parse_header("n"), ("n".to_string(), String::new()));
        assert_eq!(parse_header("T []"), ("T".to_string(), String::new()));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("a.csv")), Some(DataFormat::Csv));
        assert_eq!(DataFormat::from_path(Path::new("a.JSON")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("a.yml")), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path(Path::new("a.toml")), Some(DataFormat::Toml));
        assert_eq!(DataFormat::from_path(Path::new("a.tex")), None);
        assert_eq!(DataFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_csv_blank_and_short_columns() {
        let csv = "a,b,c\n,1,5\n,2,\n3.5,3,\n";
        let doc = TableDocument::from_csv(csv.as_bytes()).unwrap();

        assert_eq!(doc.columns[0].spec.blank_fields, 2);
        assert_eq!(doc.columns[0].values, vec![3.5]);
        assert_eq!(doc.columns[1].values, vec![1.0, 2.0, 3.0]);
        assert_eq!(doc.columns[2].values, vec![5.0]);
        assert_eq!(doc.columns[2].spec.blank_fields, 0);
    }

    #[test]
    fn test_csv_gap_is_an_error() {
        let csv = "a,b\n1,1\n,2\n3,3\n";
        let err = TableDocument::from_csv(csv.as_bytes()).unwrap_err();
        match err {
            TableError::Data { message, line } => {
                assert!(message.contains("gap in column 'a'"));
                assert_eq!(line, Some(4));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_csv_not_a_number() {
        let csv = "x\n1.0\nabc\n";
        let err = TableDocument::from_csv(csv.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_csv_semicolon_delimiter() {
        let csv = "t [s];x [m]\n0.5;1\n1.0;4\n";
        let doc = TableDocument::from_csv_with_delimiter(csv.as_bytes(), b';').unwrap();
        assert_eq!(doc.columns.len(), 2);
        assert_eq!(doc.columns[0].spec.name, "t");
        assert_eq!(doc.columns[1].values, vec![1.0, 4.0]);
    }

    #[test]
    fn test_json_document() {
        let json = r#"{
            "caption": "Pendulum",
            "label": "tab:pendulum",
            "rule_style": "booktabs",
            "columns": [
                {"name": "n", "values": [20, 18, 14]},
                {"name": "t", "unit": "s", "align": "r", "significant": 3, "blank_fields": 1,
                 "values": [9.32, 9.84, 9.44]}
            ]
        }"#;
        let doc = TableDocument::from_json(json).unwrap();
        assert_eq!(doc.config.caption.as_deref(), Some("Pendulum"));
        assert_eq!(doc.config.rule_style, RuleStyle::Booktabs);
        assert_eq!(doc.config.column_separator, " & ");
        assert_eq!(doc.columns[0].align, None);
        assert_eq!(doc.columns[1].align, Some(ColumnAlign::Right));
        assert_eq!(doc.columns[1].resolved_spec().align, ColumnAlign::Right);
        assert_eq!(doc.columns[1].spec.significant, Some(3));

        let table = doc.into_builder().unwrap();
        assert_eq!(table.row_count(), 4);
        assert!(table.render().contains("\\caption{Pendulum}"));
    }

    #[test]
    fn test_yaml_document() {
        let yaml = "
label: tab:iv
columns:
  - name: U
    unit: V
    values: [10, 20, 30]
  - name: I
    unit: A
    digits: 2
    values: [0.114, 0.206, 0.317]
";
        let doc = TableDocument::from_yaml(yaml).unwrap();
        let latex = doc.into_builder().unwrap().render();
        assert!(latex.contains(" 10 & 0.11 \\\\"));
        assert!(latex.contains("\\label{tab:iv}"));
    }

    #[test]
    fn test_toml_document() {
        let toml = r#"
caption = "Masses"
unit_style = "bracketed"

[[columns]]
name = "m"
unit = "kg"
values = [0.15, 0.2, 0.3]
"#;
        let doc = TableDocument::parse(toml, DataFormat::Toml).unwrap();
        assert_eq!(doc.columns[0].spec.digits, None);
        let latex = doc.into_builder().unwrap().render();
        assert!(latex.contains("m \\\\\n[kg] \\\\\n"));
        assert!(latex.contains("0.15 \\\\"));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = TableDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TableError::Parse { format: "JSON", .. }));
    }

    #[test]
    fn test_apply_defaults() {
        let json = r#"{"columns": [
            {"name": "a", "values": [1.234]},
            {"name": "b", "digits": 1, "align": "l", "values": [1.234]}
        ]}"#;
        let mut doc = TableDocument::from_json(json).unwrap();
        doc.apply_defaults(&ColumnDefaults {
            digits: Some(2),
            significant: None,
            align: Some(ColumnAlign::Right),
        });

        assert_eq!(doc.columns[0].spec.digits, Some(2));
        assert_eq!(doc.columns[0].align, Some(ColumnAlign::Right));
        assert_eq!(doc.columns[1].spec.digits, Some(1));
        assert_eq!(doc.columns[1].align, Some(ColumnAlign::Left));
    }

    #[test]
    fn test_explicit_center_survives_default_align() {
        let yaml = "
columns:
  - name: a
    align: c
    values: [1]
  - name: b
    values: [2]
";
        let mut doc = TableDocument::from_yaml(yaml).unwrap();
        doc.apply_defaults(&ColumnDefaults {
            align: Some(ColumnAlign::Right),
            ..ColumnDefaults::default()
        });

        assert_eq!(doc.columns[0].align, Some(ColumnAlign::Center));
        assert_eq!(doc.columns[1].align, Some(ColumnAlign::Right));
        let latex = doc.into_builder().unwrap().render();
        assert!(latex.starts_with("\\begin{tabular}{cr}\n"));
    }

    #[test]
    fn test_csv_columns_take_default_align() {
        let mut doc = TableDocument::from_csv("x,y\n1,2\n".as_bytes()).unwrap();
        assert!(doc.columns.iter().all(|c| c.align.is_none()));

        doc.apply_defaults(&ColumnDefaults {
            align: Some(ColumnAlign::Left),
            ..ColumnDefaults::default()
        });
        let latex = doc.into_builder().unwrap().render();
        assert!(latex.starts_with("\\begin{tabular}{ll}\n"));
    }

    #[test]
    fn test_invalid_column_propagates() {
        let json = r#"{"columns": [{"name": "a", "significant": 0, "values": [1.5]}]}"#;
        let doc = TableDocument::from_json(json).unwrap();
        assert!(matches!(
            doc.into_builder().unwrap_err(),
            TableError::InvalidArgument { .. }
        ));
    }
}
