//! Batch command - parse many batch files and report totals.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use tracing::{error, warn};

use docbatch_core::{DocumentParser, collect_all, partition_results};

use super::{FileReport, load_config, parse_file};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Count documents with more than this many items
    #[arg(short = 'x', long)]
    items_over: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Failure of a single file.
struct FileFailure {
    path: PathBuf,
    error: anyhow::Error,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = DocumentParser::from_config(&config.parser);
    let x = args.items_over.unwrap_or(config.summary.item_threshold);

    let results: Vec<Result<(PathBuf, FileReport), FileFailure>> = files
        .into_iter()
        .map(|path| {
            let result = match parse_file(&path, &parser, x) {
                Ok(report) => Ok((path, report)),
                Err(error) => Err(FileFailure { path, error }),
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let reports = if args.continue_on_error {
        let (reports, failures) = partition_results(results);
        for failure in &failures {
            warn!("Failed to process {}: {:#}", failure.path.display(), failure.error);
            println!(
                "{} {}: {:#}",
                style("✗").red(),
                failure.path.display(),
                failure.error
            );
        }
        reports
    } else {
        match collect_all(results) {
            Ok(reports) => reports,
            Err(failures) => {
                for failure in &failures {
                    error!("Failed to process {}: {:#}", failure.path.display(), failure.error);
                    eprintln!(
                        "{} {}: {:#}",
                        style("✗").red(),
                        failure.path.display(),
                        failure.error
                    );
                }
                anyhow::bail!("Processing failed for {} file(s)", failures.len());
            }
        }
    };

    print_totals(&reports, x);

    println!(
        "{} Processed {} files in {:.2}s",
        style("✓").green(),
        reports.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_totals(reports: &[(PathBuf, FileReport)], x: usize) {
    let mut documents = 0;
    let mut items = 0;
    let mut x_count = 0;
    let mut sum = Decimal::ZERO;

    for (path, report) in reports {
        let item_count = report.documents.items().count();
        println!(
            "{} {}: {} documents, {} items, gross {}",
            style("✓").green(),
            path.display(),
            report.documents.len(),
            item_count,
            report.summary.sum
        );

        documents += report.documents.len();
        items += item_count;
        x_count += report.summary.x_count;
        sum += report.summary.sum;
    }

    println!();
    println!("Total documents: {}", documents);
    println!("Total items: {}", items);
    println!("Documents with more than {} items: {}", x, x_count);
    println!("Total gross: {}", sum);
}
