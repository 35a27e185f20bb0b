//! Profiles command - lists configured request profiles

use crate::infrastructure::logging;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = super::load_config();
    logging::init_logging(&config.logging);

    for (name, profile) in &config.profiles {
        let marker = if *name == config.default_profile {
            " (default)"
        } else {
            ""
        };

        println!("{name}{marker}");
        println!("  source: {}", profile.source_path.display());
        println!("  return type: {}", profile.expected_return_type);
        if !profile.secrets.is_empty() {
            let names: Vec<&str> = profile.secrets.keys().map(String::as_str).collect();
            println!("  secrets: {}", names.join(", "));
        }
    }

    Ok(())
}
