//! CLI module for the request config tool
//!
//! Provides subcommands for working with request profiles:
//! - `build`: assemble a profile and emit the wire JSON
//! - `validate`: assemble a profile and report problems
//! - `profiles`: list configured profiles

pub mod build;
pub mod profiles;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Functions Request Config - request descriptors for DON function execution
#[derive(Parser)]
#[command(name = "functions-request-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble a profile's request and emit the platform wire JSON
    Build(build::BuildArgs),

    /// Assemble a profile and report problems without emitting the descriptor
    Validate(validate::ValidateArgs),

    /// List configured request profiles
    Profiles,
}

/// Load configuration, falling back to the built-in defaults when no usable
/// configuration is found
pub(crate) fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: failed to load configuration, using defaults: {e}");
            AppConfig::default()
        }
    }
}
