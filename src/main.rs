use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// careweave - CareWeave corporate site
#[derive(Parser)]
#[command(name = "careweave")]
#[command(about = "CareWeave corporate site and contact API", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = careweave::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    careweave::observability::init_observability(
        "careweave",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
