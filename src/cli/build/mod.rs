//! Build command - assembles a request and emits the platform wire JSON

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Profile to assemble (defaults to the configured default profile)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Write the descriptor to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: BuildArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = super::load_config();
    logging::init_logging(&config.logging);

    let request = crate::assemble_request(&config, args.profile.as_deref()).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            info!(path = %path.display(), "Request descriptor written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
