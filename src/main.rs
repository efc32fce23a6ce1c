use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};

use trendchart::backend;
use trendchart::{
    numeric_fields, records_from_csv, records_from_json, ChartConfig, ChartKind, ChartView,
    OutputFormat, RenderOptions, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "trendchart")]
#[command(about = "Render bar/line/scatter/area charts from labeled records", long_about = None)]
struct Args {
    /// Input file (JSON array of objects, or CSV with a header row); '-' reads stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Force CSV parsing regardless of the file extension
    #[arg(long)]
    csv: bool,

    /// Comma-separated fields to plot (default: every numeric field)
    #[arg(short, long)]
    fields: Option<String>,

    /// Comma-separated record names to keep (default: all)
    #[arg(short, long)]
    records: Option<String>,

    /// Chart kind: bar, line, scatter, or area
    #[arg(short, long, default_value = "bar")]
    kind: String,

    /// Color theme: light or dark
    #[arg(short, long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output format: png or svg
    #[arg(long, default_value = "png")]
    format: String,

    /// Output file; omit to write to stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = read_input(&args.input)?;
    let records = if args.csv || args.input.to_ascii_lowercase().ends_with(".csv") {
        records_from_csv(raw.as_bytes()).context("Failed to parse CSV input")?
    } else {
        let value = serde_json::from_str(&raw).context("Failed to parse JSON input")?;
        records_from_json(&value).context("Failed to parse JSON input")?
    };

    let available = numeric_fields(&records);
    let fields = match &args.fields {
        Some(list) => {
            let selected = split_list(list);
            for field in &selected {
                if !available.iter().any(|f| f == field) {
                    eprintln!("Warning: field '{}' not found in input, skipping", field);
                }
            }
            selected
                .into_iter()
                .filter(|f| available.iter().any(|a| a == f))
                .collect()
        }
        None => available,
    };

    let kind = ChartKind::from_name(&args.kind);
    if kind.name() != args.kind.trim().to_ascii_lowercase() {
        eprintln!("Warning: unknown kind '{}', using '{}'", args.kind, kind.name());
    }
    let theme = Theme::from_name(&args.theme);
    if theme.name() != args.theme.trim().to_ascii_lowercase() {
        eprintln!(
            "Warning: unknown theme '{}', using '{}'",
            args.theme,
            theme.name()
        );
    }
    let format = OutputFormat::from_name(&args.format);

    let config = ChartConfig::new(fields.clone())
        .with_records(args.records.as_deref().map(split_list).unwrap_or_default())
        .with_kind(kind)
        .with_theme(theme);
    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        format,
        ..RenderOptions::default()
    };

    let mut view = ChartView::new(opts);
    view.render(&records, &config);
    let bytes = backend::encode(view.scene(), format, &records, &fields)
        .context("Failed to render chart")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&bytes)
                .context("Failed to write output to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
