//! Database seeding tool for the technique encyclopedia.
//!
//! Inserts the built-in catalog of techniques and relationships into the
//! database configured via `DATABASE_URL`, creating the schema first if
//! needed. A database that already contains techniques is left untouched
//! unless `--force` is passed.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seed
//!
//! # Insert the catalog even into a non-empty database
//! cargo run --bin seed -- --force
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use dojo_services::config;
use dojo_services::infrastructure::persistence::{SqliteTechniqueRepository, db};
use dojo_services::seed::{self, SeedOutcome};

/// CLI tool for seeding the technique encyclopedia.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Insert the catalog even if the database already contains techniques
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;

    let repository = SqliteTechniqueRepository::new(Arc::new(pool));

    match seed::run(&repository, cli.force).await? {
        SeedOutcome::Seeded {
            techniques,
            relationships,
        } => {
            println!(
                "{}",
                format!("Seeded {techniques} techniques and {relationships} relationships.")
                    .green()
            );
        }
        SeedOutcome::AlreadySeeded => {
            println!(
                "{}",
                "Database already seeded. Skipping (use --force to override).".yellow()
            );
        }
    }

    Ok(())
}
