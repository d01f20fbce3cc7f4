mod check_connection;
mod generate;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate as generate_completions, Shell};
use std::io;
use std::path::PathBuf;

pub use check_connection::CheckConnectionArgs;

#[derive(Parser)]
#[command(name = "plant-datagen")]
#[command(version)]
#[command(about = "Generate synthetic sales, production and inventory CSV files")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ventas.csv, produccion.csv and inventario.csv
    #[command(after_help = "Examples:
  plant-datagen generate --rows 1000
  plant-datagen generate --rows 10 --seed 42 --today 2025-01-31 -o data/
  plant-datagen generate -c datagen.yaml --progress")]
    Generate {
        /// Number of sales rows (prompted for when omitted)
        #[arg(short, long)]
        rows: Option<u64>,

        /// Output directory for the CSV files [default: .]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Date every date window ends at, as YYYY-MM-DD [default: current date]
        #[arg(long, value_name = "DATE")]
        today: Option<chrono::NaiveDate>,

        /// YAML config file (reference data, ranges, file names)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Field delimiter [default: ,]
        #[arg(long, value_name = "CHAR")]
        delimiter: Option<char>,

        /// Show progress while writing sales rows
        #[arg(short, long)]
        progress: bool,

        /// Generate and count rows without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Open a warehouse session, run one diagnostic query and print the result
    CheckConnection(CheckConnectionArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            rows,
            output,
            seed,
            today,
            config,
            delimiter,
            progress,
            dry_run,
        } => generate::run(
            rows,
            output,
            seed,
            today,
            config,
            delimiter,
            progress,
            dry_run,
        ),
        Commands::CheckConnection(args) => check_connection::run(args),
        Commands::Completions { shell } => {
            generate_completions(
                shell,
                &mut Cli::command(),
                "plant-datagen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
