//! ribstree - RIBs architecture tree to PlantUML mindmap

mod console;
mod mindmap_cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ribstree")]
#[command(about = "Build a RIBs tree mindmap from Swift sources", version)]
struct Cli {
    #[command(subcommand)]
    command: mindmap_cli::Commands,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    mindmap_cli::run(cli.command)
}
