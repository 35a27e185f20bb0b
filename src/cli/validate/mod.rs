//! Validate command - assembles a profile and reports problems

use clap::Args;

use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Profile to validate (defaults to the configured default profile)
    #[arg(short, long)]
    pub profile: Option<String>,
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = super::load_config();
    logging::init_logging(&config.logging);

    let (name, _) = config.resolve_profile(args.profile.as_deref())?;
    let request = crate::assemble_request(&config, Some(name)).await?;

    println!("profile '{name}': ok");
    println!(
        "  source: {} bytes, {} secret(s), {} arg(s), return type {}",
        request.source.len(),
        request.secrets.len(),
        request.args.len(),
        request.expected_return_type
    );

    let empty = request.secrets.empty_names();
    if !empty.is_empty() {
        println!("  warning: secrets resolved empty: {}", empty.join(", "));
    }

    Ok(())
}
