use clap::Parser;
use functions_request_config::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => cli::build::run(args).await,
        Command::Validate(args) => cli::validate::run(args).await,
        Command::Profiles => cli::profiles::run().await,
    }
}
