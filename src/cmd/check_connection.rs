//! Warehouse connectivity check.

use crate::config::DatagenConfig;
use crate::warehouse::{self, ConnectionSettings, EmbeddedWarehouse, WarehouseError};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Run one diagnostic query against the warehouse
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  plant-datagen check-connection --host :memory:
  plant-datagen check-connection --host analytics.duckdb --query \"SELECT count(*) FROM ventas\"
  plant-datagen check-connection -c datagen.yaml")]
pub struct CheckConnectionArgs {
    /// Account or host address (a database path or :memory: for the embedded engine)
    #[arg(long, visible_alias = "account")]
    pub host: Option<String>,

    /// Principal (user) name
    #[arg(short, long)]
    pub user: Option<String>,

    /// Secret (password)
    #[arg(long)]
    pub password: Option<String>,

    /// Diagnostic query [default: SELECT version()]
    #[arg(long)]
    pub query: Option<String>,

    /// YAML config file with a `warehouse:` section
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckConnectionArgs) -> anyhow::Result<()> {
    let section = DatagenConfig::load_or_default(args.config.as_deref())?.warehouse;

    let host = args
        .host
        .or(section.host)
        .ok_or(WarehouseError::MissingSetting("host"))
        .context("Error connecting to warehouse")?;
    let settings = ConnectionSettings::new(host).with_credentials(
        args.user.or(section.user),
        args.password.or(section.password),
    );
    let query = args
        .query
        .or(section.query)
        .unwrap_or_else(|| warehouse::DEFAULT_QUERY.to_string());

    let version = warehouse::check_connectivity(&EmbeddedWarehouse, &settings, &query)
        .context("Error connecting to warehouse")?;

    println!("Connection successful. Warehouse version: {}", version);
    Ok(())
}
