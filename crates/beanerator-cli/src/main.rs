//! beanerator CLI - Java bean generator for records
//!
//! Commands:
//! - `beanerator generate` - Write a bean for every marked record in a catalog
//! - `beanerator check` - Validate a catalog without writing anything
//! - `beanerator preview` - Print the bean of one record to stdout

use clap::{Parser, Subcommand};
use tracing::debug;

mod check;
mod generate;
mod logging;
mod preview;
mod settings;

#[derive(Parser)]
#[command(name = "beanerator")]
#[command(author, version, about = "Generates mutable Java beans for records", long_about = None)]
struct Cli {
    /// Log filter (overrides the config file), e.g. `debug` or `beanerator_core=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate beans for every marked record
    Generate {
        /// Path to the host type catalog (.toml or .json)
        #[arg(short, long)]
        input: String,

        /// Output directory for generated sources (overrides the config file)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to beanerator.toml (default: ./beanerator.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        /// Generate independent records in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Extract and render every marked record without writing files
    Check {
        /// Path to the host type catalog (.toml or .json)
        #[arg(short, long)]
        input: String,

        /// Path to beanerator.toml (default: ./beanerator.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the bean generated for one record
    Preview {
        /// Path to the host type catalog (.toml or .json)
        #[arg(short, long)]
        input: String,

        /// Qualified name of the record
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Path to beanerator.toml (default: ./beanerator.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            parallel,
        } => {
            let mut resolved = settings::load(config.as_deref())?;
            if let Some(output) = output {
                resolved.output_dir = output.into();
            }
            resolved.parallel |= parallel;
            init_logging(cli.log_level.as_deref(), config.as_deref(), &resolved.log_level);
            generate::run(&input, resolved)?;
        }
        Commands::Check { input, config } => {
            let resolved = settings::load(config.as_deref())?;
            init_logging(cli.log_level.as_deref(), config.as_deref(), &resolved.log_level);
            check::run(&input, resolved)?;
        }
        Commands::Preview {
            input,
            type_name,
            config,
        } => {
            let resolved = settings::load(config.as_deref())?;
            init_logging(cli.log_level.as_deref(), config.as_deref(), &resolved.log_level);
            preview::run(&input, &type_name, resolved)?;
        }
    }

    Ok(())
}

/// Install the subscriber, then record where the settings came from.
fn init_logging(flag: Option<&str>, config: Option<&str>, configured: &str) {
    logging::init(flag.unwrap_or(configured));
    debug!(source = settings::describe(config), "loaded configuration");
}
