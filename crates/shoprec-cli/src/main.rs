//! shoprec - storefront recommendation CLI
//!
//! Usage:
//!   shoprec populate -o store.json             # Write a seeded sample store
//!   shoprec recommend -d store.json -u 1       # Recommend for user 1
//!   shoprec recommend -d store.json -u 1 -n 3 --order support
//!   shoprec matrix -d store.json               # Show the interaction matrix

use clap::{Parser, Subcommand};
use shoprec::synthetic::PopulateConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// shoprec - collaborative-filtering product recommendations
#[derive(Parser)]
#[command(name = "shoprec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seeded sample store
    Populate {
        /// Output JSON file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of users
        #[arg(long, default_value = "5")]
        users: usize,

        /// Number of products
        #[arg(long, default_value = "10")]
        products: usize,

        /// Distinct products each user interacts with
        #[arg(long, default_value = "5")]
        per_user: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Recommend products for a user
    Recommend {
        /// Store JSON file
        #[arg(short, long, value_name = "FILE")]
        data: PathBuf,

        /// User id
        #[arg(short, long)]
        user: u64,

        /// Number of products (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Candidate order: ascending or support
        #[arg(long)]
        order: Option<String>,

        /// Recommender configuration JSON file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the user × product interaction matrix
    Matrix {
        /// Store JSON file
        #[arg(short, long, value_name = "FILE")]
        data: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Populate {
            output,
            users,
            products,
            per_user,
            seed,
        } => {
            let config = PopulateConfig::default()
                .with_users(users)
                .with_products(products)
                .with_per_user(per_user)
                .with_seed(seed);
            commands::populate::run(&output, &config)
        }

        Commands::Recommend {
            data,
            user,
            count,
            order,
            config,
        } => commands::recommend::run(&data, user, count, order.as_deref(), config.as_deref()),

        Commands::Matrix { data } => commands::matrix::run(&data),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
