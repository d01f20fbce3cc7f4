//! Generate command CLI handler.

use crate::config::{parse_delimiter, DatagenConfig};
use crate::generate::{self, GenerateConfig};
use crate::input;
use anyhow::Context;
use chrono::NaiveDate;
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    rows: Option<u64>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    today: Option<NaiveDate>,
    config: Option<PathBuf>,
    delimiter: Option<char>,
    progress: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    let file_config = DatagenConfig::load_or_default(config.as_deref())?;

    // Reject a bad config before asking the operator for anything
    file_config
        .profile
        .validate(&file_config.master)
        .context("Invalid generation profile")?;
    let delimiter = parse_delimiter(delimiter.or(file_config.delimiter).unwrap_or(','))?;

    let rows = match rows {
        Some(r) => r,
        None => input::prompt_row_count()?,
    };

    let seed = seed
        .or(file_config.seed)
        .unwrap_or_else(rand::random);
    let today = today
        .or(file_config.today)
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let output_dir = output
        .or(file_config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::info!(seed, "using seed (pass --seed {} to reproduce)", seed);

    let generate_config = GenerateConfig {
        output_dir,
        rows,
        seed,
        today,
        master: file_config.master,
        profile: file_config.profile,
        files: file_config.files,
        delimiter,
        progress,
        dry_run,
    };

    let stats = generate::run(generate_config)?;

    if dry_run {
        println!("Dry run, no files written:");
        for ds in &stats.datasets {
            println!("- {} ({} rows)", ds.path.display(), ds.rows);
        }
        return Ok(());
    }

    println!("CSV files generated successfully:");
    for name in stats.file_names() {
        println!("- {}", name);
    }

    if progress {
        eprintln!();
        eprintln!("Generation Statistics:");
        for ds in &stats.datasets {
            eprintln!("  {}: {} rows -> {}", ds.dataset, ds.rows, ds.path.display());
        }
        eprintln!("  Total rows: {}", stats.total_rows());
        eprintln!("  Seed: {}", stats.seed);
    }

    Ok(())
}
