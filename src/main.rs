// src/main.rs

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use verbsheet::config::ConvertConfig;

fn main() -> Result<()> {
    // ─── 1) init logging (stderr, stdout carries the summary line) ───
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) fixed paths, pronouns stripped from German forms ─────────
    let config = ConvertConfig::default();

    // ─── 3) convert ──────────────────────────────────────────────────
    let count = verbsheet::run(&config)?;

    println!(
        "Successfully parsed {} verbs and saved to {}",
        count,
        config.output.display()
    );
    Ok(())
}
