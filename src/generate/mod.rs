//! End-to-end generation of the sales, production and inventory files.
//!
//! Datasets are produced strictly in sequence from one seeded generator. Each
//! file is written through its own [`CsvSink`] and committed before the next
//! dataset starts; the first failure aborts the run.

use crate::config::FileNames;
use crate::progress::row_progress_bar;
use crate::writer::CsvSink;
use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use synth_data::{Dataset, GenerationProfile, Generator, MasterData, Sampler};
use tracing::{debug, info};

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory the three files are written to
    pub output_dir: PathBuf,
    /// Number of sales rows
    pub rows: u64,
    pub seed: u64,
    /// End of every date window
    pub today: NaiveDate,
    pub master: MasterData,
    pub profile: GenerationProfile,
    pub files: FileNames,
    pub delimiter: u8,
    /// Show a progress bar while writing sales rows
    pub progress: bool,
    /// Generate and count rows without writing anything
    pub dry_run: bool,
}

impl GenerateConfig {
    pub fn new(output_dir: PathBuf, rows: u64, seed: u64, today: NaiveDate) -> Self {
        Self {
            output_dir,
            rows,
            seed,
            today,
            master: MasterData::default(),
            profile: GenerationProfile::default(),
            files: FileNames::default(),
            delimiter: b',',
            progress: false,
            dry_run: false,
        }
    }

    pub fn path_for(&self, dataset: Dataset) -> PathBuf {
        self.output_dir.join(self.files.get(dataset))
    }
}

/// Outcome for a single dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub dataset: Dataset,
    pub path: PathBuf,
    /// Data rows, header excluded
    pub rows: u64,
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    pub seed: u64,
    pub datasets: Vec<DatasetStats>,
}

impl GenerateStats {
    pub fn total_rows(&self) -> u64 {
        self.datasets.iter().map(|d| d.rows).sum()
    }

    /// File names in write order
    pub fn file_names(&self) -> Vec<String> {
        self.datasets.iter().map(|d| file_label(&d.path)).collect()
    }
}

/// Final component of `path`, or the whole path when it has none
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Generate all three datasets
pub fn run(config: GenerateConfig) -> anyhow::Result<GenerateStats> {
    let mut gen = Generator::with_parts(
        Sampler::seeded(config.seed, config.today),
        config.profile.clone(),
        config.master.clone(),
    )
    .context("Invalid generation profile")?;

    if !config.dry_run {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                config.output_dir.display()
            )
        })?;
    }

    info!(
        seed = config.seed,
        today = %config.today,
        rows = config.rows,
        output = %config.output_dir.display(),
        "generating datasets"
    );

    let mut stats = GenerateStats {
        seed: config.seed,
        datasets: Vec::with_capacity(3),
    };

    let sales_path = config.path_for(Dataset::Sales);
    let rows = emit(
        &config,
        Dataset::Sales,
        &sales_path,
        gen.sales(config.rows),
        config.progress.then_some(config.rows),
    )?;
    stats.datasets.push(DatasetStats {
        dataset: Dataset::Sales,
        path: sales_path,
        rows,
    });

    let production_path = config.path_for(Dataset::Production);
    let rows = emit(
        &config,
        Dataset::Production,
        &production_path,
        gen.production(),
        None,
    )?;
    stats.datasets.push(DatasetStats {
        dataset: Dataset::Production,
        path: production_path,
        rows,
    });

    let inventory_path = config.path_for(Dataset::Inventory);
    let rows = emit(
        &config,
        Dataset::Inventory,
        &inventory_path,
        gen.inventory(),
        None,
    )?;
    stats.datasets.push(DatasetStats {
        dataset: Dataset::Inventory,
        path: inventory_path,
        rows,
    });

    Ok(stats)
}

/// Write (or, in dry-run mode, count) one dataset
fn emit<T, I>(
    config: &GenerateConfig,
    dataset: Dataset,
    path: &Path,
    rows: I,
    progress_total: Option<u64>,
) -> anyhow::Result<u64>
where
    T: Serialize,
    I: Iterator<Item = T>,
{
    if config.dry_run {
        let count = rows.count() as u64;
        info!(%dataset, rows = count, path = %path.display(), "dry run, not written");
        return Ok(count);
    }

    debug!(%dataset, path = %path.display(), "opening sink");
    let mut sink = CsvSink::create(path, config.delimiter)
        .with_context(|| format!("Failed to create {} file: {}", dataset, path.display()))?;

    let pb = progress_total.map(|total| row_progress_bar(total, &file_label(path)));
    if let Some(ref pb) = pb {
        let pb = pb.clone();
        sink = sink.with_progress(move |n| pb.set_position(n));
    }

    sink.write_header(dataset.header())
        .and_then(|_| sink.write_all(rows))
        .with_context(|| format!("Failed to write {} file: {}", dataset, path.display()))?;

    let count = sink
        .finish()
        .with_context(|| format!("Failed to save {} file: {}", dataset, path.display()))?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    info!(%dataset, rows = count, path = %path.display(), "dataset written");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_label_uses_configured_name() {
        assert_eq!(file_label(Path::new("out/sales_2025.csv")), "sales_2025.csv");
        assert_eq!(file_label(Path::new("ventas.csv")), "ventas.csv");
        assert_eq!(file_label(Path::new("/")), "/");
    }
}
