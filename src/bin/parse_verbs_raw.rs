//! Same conversion as the main binary, but German forms keep their leading
//! pronouns ("ich gehe" stays "ich gehe").

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};
use verbsheet::config::ConvertConfig;

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = ConvertConfig::plain();
    let count = verbsheet::run(&config)?;

    println!(
        "Successfully parsed {} verbs and saved to {}",
        count,
        config.output.display()
    );
    Ok(())
}
