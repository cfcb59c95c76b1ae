use analytics::{AnalysisOptions, RankedResult, SalesAnalyzer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use configuration::{Config, OutputFormat, StrategySettings, load_config};
use core_types::SalesData;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the sales report application.
fn main() -> anyhow::Result<()> {
    // Load environment overrides from .env file, if there is one
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller revenue, profit, top products and bonus from sales data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the seller report for a dataset.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// JSON file with `purchase_records`, `products` and `sellers`.
    #[arg(long)]
    data: PathBuf,

    /// TOML configuration file.
    #[arg(long, default_value = "report.toml")]
    config: PathBuf,

    /// Revenue strategy name, overriding `strategies.calculate_revenue`.
    #[arg(long)]
    revenue: Option<String>,

    /// Bonus strategy name, overriding `strategies.calculate_bonus`.
    #[arg(long)]
    bonus: Option<String>,

    /// Output format, overriding `report.format`.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles loading, analysis and output of one report.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    apply_overrides(&mut config, &args);

    let file = File::open(&args.data)
        .with_context(|| format!("opening dataset {}", args.data.display()))?;
    let data = SalesData::from_reader(BufReader::new(file))
        .with_context(|| format!("reading dataset {}", args.data.display()))?;

    let options = AnalysisOptions::from_config(&config);
    let results = SalesAnalyzer::new()
        .analyze(&data, options.as_ref())
        .context("computing sales report")?;

    match args.format.unwrap_or(config.report.format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => println!("{}", render_table(&results)),
    }
    Ok(())
}

/// Command-line strategy names take precedence over the configuration file.
fn apply_overrides(config: &mut Config, args: &ReportArgs) {
    if args.revenue.is_none() && args.bonus.is_none() {
        return;
    }

    let strategies = config.strategies.get_or_insert_with(StrategySettings::default);
    if let Some(name) = &args.revenue {
        strategies.calculate_revenue = Some(name.clone());
    }
    if let Some(name) = &args.bonus {
        strategies.calculate_bonus = Some(name.clone());
    }
}

fn render_table(results: &[RankedResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Rank",
        "Seller",
        "Name",
        "Revenue",
        "Profit",
        "Sales",
        "Bonus",
        "Top products",
    ]);

    for (rank, result) in results.iter().enumerate() {
        let top_products = result
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&result.seller_id),
            Cell::new(&result.name),
            Cell::new(format!("{:.2}", result.revenue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", result.profit)).set_alignment(CellAlignment::Right),
            Cell::new(result.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", result.bonus)).set_alignment(CellAlignment::Right),
            Cell::new(top_products),
        ]);
    }
    table
}
