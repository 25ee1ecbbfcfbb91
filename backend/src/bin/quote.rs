//! Quotation runner.
//!
//! Reads a quotation request (the form's JSON) and prints the resolved
//! summary as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quote -- request.json [reference.toml]
//! ```
//!
//! # Environment Variables
//!
//! - `QUOTE_REFERENCE`: Reference data file, used when no path is given
//!   (otherwise `reference.toml` is searched in the usual places)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;

use anyhow::{bail, Context};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use paint_quote::db::{ReferenceConfig, RepositoryFactory};
use paint_quote::models::QuotationInput;
use paint_quote::services::{compute_quotation_summary, load_reference_data};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("usage: quote <request.json> [reference.toml]");
    };

    let config = match args.next() {
        Some(path) => ReferenceConfig::from_file(&path),
        None => ReferenceConfig::from_default_location(),
    }
    .context("Failed to load reference configuration")?;

    let input_json = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read request {}", input_path))?;
    let input = QuotationInput::from_json_str(&input_json)
        .with_context(|| format!("Invalid quotation request in {}", input_path))?;
    info!("Quoting '{}' ({} m²)", input.quotation_name, input.total_area);

    let repository = RepositoryFactory::from_config(&config)?;
    let reference = load_reference_data(repository.as_ref()).await?;

    let summary = compute_quotation_summary(&input, &reference)?;
    let checksum = summary.checksum()?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!("Quotation checksum {}", checksum);

    Ok(())
}
