use clap::{Parser, Subcommand};
use std::path::PathBuf;

use verdant_engines::remote::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

#[derive(Debug, Parser)]
#[command(name = "verdant", version, about = "Construction project environmental impact estimator")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate the impact of a project described by a JSON input file.
    Estimate {
        input: PathBuf,
        /// Skip the AI-backed path even when a credential is configured.
        #[arg(long, default_value_t = false)]
        deterministic: bool,
        #[arg(long, env = "VERDANT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long, env = "VERDANT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        #[arg(long, env = "VERDANT_MODEL", default_value = DEFAULT_MODEL)]
        model: String,
        /// Inference request timeout; expiry falls back to the deterministic engine.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        /// Pretty-print the result JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print a template project-input JSON to stdout.
    Sample,
}
