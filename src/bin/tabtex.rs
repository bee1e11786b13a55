//! tabtex CLI - Typeset numeric columns as LaTeX tabular markup

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tabtex::loading::{ColumnDefaults, DataFormat, TableDocument};
use tabtex::{ColumnAlign, RuleStyle, UnitStyle};

#[derive(Parser)]
#[command(name = "tabtex")]
#[command(version)]
#[command(about = "Typeset numeric columns as aligned LaTeX tabular markup", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Field delimiter for CSV input
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Digits after the decimal point for columns that set none
    #[arg(short, long)]
    digits: Option<usize>,

    /// Significant figures for columns that set none
    #[arg(short, long, allow_negative_numbers = true)]
    significant: Option<i32>,

    /// Column spec for columns that do not state an alignment
    #[arg(short, long)]
    align: Option<String>,

    /// Table caption
    #[arg(long)]
    caption: Option<String>,

    /// Table label
    #[arg(long)]
    label: Option<String>,

    /// Use booktabs rules instead of \hline
    #[arg(long)]
    booktabs: bool,

    /// Placeholder for missing cells
    #[arg(long)]
    empty_field: Option<String>,

    /// How units are wrapped in the unit row
    #[arg(long, value_enum)]
    unit_style: Option<UnitStyleArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Detect from the file extension, CSV otherwise
    Auto,
    Csv,
    Json,
    Yaml,
    Toml,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitStyleArg {
    /// \texttt{[unit]}
    Monospace,
    /// [unit]
    Bracketed,
    /// unit
    Plain,
}

impl From<UnitStyleArg> for UnitStyle {
    fn from(arg: UnitStyleArg) -> Self {
        match arg {
            UnitStyleArg::Monospace => UnitStyle::Monospace,
            UnitStyleArg::Bracketed => UnitStyle::Bracketed,
            UnitStyleArg::Plain => UnitStyle::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let format = resolve_format(cli.format, cli.input_file.as_deref());
    debug!(format = format.name(), "reading table");

    let mut doc = match format {
        DataFormat::Csv => {
            if !cli.delimiter.is_ascii() {
                bail!("delimiter must be an ASCII character, got '{}'", cli.delimiter);
            }
            TableDocument::from_csv_with_delimiter(input.as_bytes(), cli.delimiter as u8)
        }
        other => TableDocument::parse(&input, other),
    }
    .with_context(|| format!("invalid {} input", format.name()))?;

    doc.apply_defaults(&ColumnDefaults {
        digits: cli.digits,
        significant: cli.significant,
        align: cli.align.as_deref().map(ColumnAlign::from_tag),
    });

    if let Some(caption) = cli.caption {
        doc.config.caption = Some(caption);
    }
    if let Some(label) = cli.label {
        doc.config.label = Some(label);
    }
    if cli.booktabs {
        doc.config.rule_style = RuleStyle::Booktabs;
    }
    if let Some(symbol) = cli.empty_field {
        doc.config.empty_field = symbol;
    }
    if let Some(style) = cli.unit_style {
        doc.config.unit_style = style.into();
    }

    let table = doc.into_builder().context("failed to format columns")?;

    match cli.output {
        Some(path) => {
            table
                .write_to_path(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                columns = table.len(),
                rows = table.row_count(),
                "output written to {}",
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            table.write_to(&mut handle).context("failed to write stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn resolve_format(format: Format, path: Option<&Path>) -> DataFormat {
    match format {
        Format::Auto => path
            .and_then(DataFormat::from_path)
            .unwrap_or(DataFormat::Csv),
        Format::Csv => DataFormat::Csv,
        Format::Json => DataFormat::Json,
        Format::Yaml => DataFormat::Yaml,
        Format::Toml => DataFormat::Toml,
    }
}
