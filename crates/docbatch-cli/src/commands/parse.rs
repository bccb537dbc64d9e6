//! Parse command - parse and summarize a single batch file.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use docbatch_core::DocumentParser;

use super::{FileReport, load_config, parse_file};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input batch file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Count documents with more than this many items
    #[arg(short = 'x', long)]
    items_over: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Documents and summary as JSON
    Json,
    /// One CSV row per item
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let parser = DocumentParser::from_config(&config.parser);
    let x = args.items_over.unwrap_or(config.summary.item_threshold);
    let report = parse_file(&args.input, &parser, x)?;

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_report(report: &FileReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => format_text(report),
    }
}

fn format_csv(report: &FileReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "document_number",
        "type_code",
        "operation_date",
        "counterparty_code",
        "product_code",
        "product_name",
        "quantity",
        "unit_net_price",
        "net_value",
        "vat",
        "group_code",
    ])?;

    for document in &report.documents {
        let header = document.header();
        for item in document.items() {
            wtr.write_record([
                &header.document_number.to_string(),
                &header.type_code,
                &header.operation_date.to_string(),
                &header.counterparty_code,
                &item.product_code,
                &item.product_name,
                &item.quantity.to_string(),
                &item.unit_net_price.to_string(),
                &item.net_value.to_string(),
                &item.vat.to_string(),
                &item.group_code,
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &FileReport) -> anyhow::Result<String> {
    let summary = &report.summary;
    let mut output = String::new();

    writeln!(output, "Documents: {}", report.documents.len())?;
    writeln!(output, "Items: {}", report.documents.items().count())?;
    writeln!(output, "Lines: {}", summary.line_count)?;
    writeln!(output, "Characters: {}", summary.char_count)?;
    writeln!(output, "Gross sum: {}", summary.sum)?;
    writeln!(
        output,
        "Documents with more than {} items: {}",
        summary.x, summary.x_count
    )?;
    writeln!(
        output,
        "Max item net value: {} ({})",
        summary.max_net_value, summary.product_with_max_net_value
    )?;
    output.push('\n');

    for document in &report.documents {
        let header = document.header();
        writeln!(
            output,
            "{:>8}  {:<4} {}  {:<24} items: {:>3}  items net: {}  gross: {}",
            header.document_number,
            header.type_code,
            header.operation_date,
            header.counterparty_name,
            document.items().len(),
            document.items_net_total(),
            header.gross
        )?;
    }

    Ok(output)
}
