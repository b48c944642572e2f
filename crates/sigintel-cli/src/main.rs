mod analyze;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sigintel")]
#[command(about = "Signal intelligence analysis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a batch of signals and print the intelligence report
    Analyze {
        /// JSON file holding an array of signals, or an object with a `signals` array
        #[arg(long)]
        signals: PathBuf,

        /// Organization profile YAML (defaults to `SIGINTEL_ORG_PATH`)
        #[arg(long)]
        org: Option<PathBuf>,

        /// Reference time as RFC 3339; defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the credibility score for a source name
    Score {
        #[arg(long)]
        source: String,
    },
    /// Load and validate the organization profile
    ValidateOrg {
        /// Organization profile YAML (defaults to `SIGINTEL_ORG_PATH`)
        #[arg(long)]
        org: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

/// Initialize tracing to stderr, preferring `RUST_LOG` over the configured level.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = sigintel_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    match cli.command {
        Some(Commands::Analyze {
            signals,
            org,
            now,
            format,
        }) => analyze::run_analyze(&config, &signals, org.as_deref(), now.as_deref(), format)?,
        Some(Commands::Score { source }) => {
            println!(
                "{source}: {}",
                sigintel_engine::credibility_score(&source)
            );
        }
        Some(Commands::ValidateOrg { org }) => {
            let path = org.unwrap_or_else(|| config.org_path.clone());
            let loaded = analyze::load_org(&path)?;
            println!(
                "organization profile ok: {} ({} keywords)",
                loaded.name,
                loaded.keywords.len()
            );
        }
        None => println!("sigintel ready; run `sigintel --help` for commands"),
    }

    Ok(())
}
