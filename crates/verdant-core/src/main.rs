use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use verdant_broker::{service, Broker};
use verdant_engines::{ProjectInput, RemoteConfig};

mod cli;
use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("VERDANT_LOG").unwrap_or_else(|_| "verdant=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(target: "verdant", version = env!("CARGO_PKG_VERSION"), "Verdant starting");

    match args.command {
        cli::Command::Estimate {
            input,
            deterministic,
            api_key,
            endpoint,
            model,
            timeout_secs,
            pretty,
        } => {
            let remote = match api_key {
                Some(key) if !deterministic && !key.trim().is_empty() => Some(RemoteConfig {
                    endpoint,
                    model,
                    api_key: key,
                    timeout: Duration::from_secs(timeout_secs),
                }),
                _ => None,
            };
            estimate(input, remote, pretty).await
        }
        cli::Command::Sample => sample(),
    }
}

async fn estimate(path: PathBuf, remote: Option<RemoteConfig>, pretty: bool) -> Result<()> {
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading project input {}", path.display()))?;
    let input: ProjectInput =
        serde_json::from_str(&raw).context("project input is not valid JSON")?;

    if remote.is_none() {
        tracing::info!(target: "verdant", "no inference credential; deterministic-only mode");
    }

    let handle = service::spawn(Broker::new(remote)?);
    let outcome = handle.submit(input).await?;

    tracing::info!(
        target: "verdant",
        engine = %outcome.engine,
        fell_back = outcome.fallback.is_some(),
        "estimate complete"
    );

    let rendered = if pretty {
        serde_json::to_string_pretty(&outcome.result)?
    } else {
        serde_json::to_string(&outcome.result)?
    };
    println!("{rendered}");

    handle.shutdown().await?;
    Ok(())
}

fn sample() -> Result<()> {
    let input = ProjectInput {
        project_type: "residential".to_string(),
        size: "medium".to_string(),
        location: Some("Oslo, Norway".to_string()),
        materials: vec!["wood".to_string(), "recycled".to_string()],
        energy_sources: vec!["solar".to_string(), "grid".to_string()],
        description: None,
    };
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(())
}
