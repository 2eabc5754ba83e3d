// Sanity-check a generated verbs.json.

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;
use verbsheet::{config::DEFAULT_OUTPUT, schema::verify_file};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let report = verify_file(DEFAULT_OUTPUT)?;

    println!("{: <28} {:>8}", "Check", "Count");
    println!("{:-<37}", "");
    println!("{: <28} {:>8}", "records", report.records);
    println!(
        "{: <28} {:>8}",
        "blank infinitives",
        report.blank_infinitives.len()
    );
    for (tense, empty) in &report.empty_german {
        println!(
            "{: <28} {:>8}",
            format!("empty german ({})", tense.key()),
            empty
        );
    }
    println!(
        "{: <28} {:>8}",
        "pronoun-prefixed german",
        report.pronoun_prefixed.len()
    );
    for (infinitive, tense, pronoun) in &report.pronoun_prefixed {
        println!("  {} / {} / {}", infinitive, tense.key(), pronoun.key());
    }

    if !report.is_ok() {
        bail!(
            "{} record(s) in {} have a blank infinitive: {:?}",
            report.blank_infinitives.len(),
            DEFAULT_OUTPUT,
            report.blank_infinitives
        );
    }
    Ok(())
}
