use anyhow::Context;
use clap::{Parser, Subcommand};
use quote_engine::utils::{init_logger_with_file, load_request};
use quote_engine::{compute_request, simulate_price_matrix, validate_request, Config};
use std::path::PathBuf;

/// Quote calculator for archived or hand-written order requests
#[derive(Parser)]
#[command(name = "quote", version, about)]
struct Cli {
    /// Validate the request before computing
    #[arg(long, global = true)]
    validate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cost breakdown of a request as JSON
    Cost {
        /// Request file (JSON)
        request: PathBuf,
    },
    /// Print a per-garment price matrix using the request's first line and design
    Matrix {
        /// Request file (JSON)
        request: PathBuf,
        /// Quantities to simulate, comma separated
        #[arg(long, value_delimiter = ',')]
        quantities: Vec<u32>,
        /// Highest color count to simulate
        #[arg(long)]
        max_colors: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Cost { request } => {
            let request = load_request(&request)?;
            if cli.validate {
                validate_request(&request)?;
            }
            let breakdown = compute_request(&request);
            tracing::info!(total = breakdown.total_with_tax, "Quote computed");
            serde_json::to_string_pretty(&breakdown)?
        }
        Command::Matrix {
            request,
            quantities,
            max_colors,
        } => {
            let request = load_request(&request)?;
            if cli.validate {
                validate_request(&request)?;
            }
            let line = request
                .order_lines
                .first()
                .context("Request has no order line to use as matrix template")?;
            let design = request
                .print_designs
                .iter()
                .find(|d| !d.location.trim().is_empty())
                .context("Request has no placed print design to use as matrix template")?;

            let quantities = if quantities.is_empty() {
                config.matrix_quantities.clone()
            } else {
                quantities
            };

            let matrix = simulate_price_matrix(
                line,
                design,
                &request.customer,
                &request.pricing,
                &request.catalog,
                &quantities,
                max_colors.unwrap_or(config.matrix_max_colors),
                &request.options,
            );
            tracing::info!(cells = matrix.cells.len(), "Price matrix simulated");
            serde_json::to_string_pretty(&matrix)?
        }
    };

    println!("{}", output);
    Ok(())
}
