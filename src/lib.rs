//! Converts the hand-laid-out `verbs.xlsx` conjugation sheet into
//! `verbs.json`: one record per verb, each with present, perfekt and
//! imperfekt forms for the six subject pronouns.

pub mod config;
pub mod process;
pub mod schema;

use anyhow::Result;
use tracing::info;

use config::ConvertConfig;

/// Load, convert and write in one pass. Returns the number of verbs written.
#[tracing::instrument(level = "info", skip_all, fields(input = %config.input.display()))]
pub fn run(config: &ConvertConfig) -> Result<usize> {
    let table = process::load_verb_workbook(&config.input, config.header_rows)?;
    let verbs = process::convert_table(&table, config.normalization);
    schema::write_verbs(&config.output, &verbs)?;
    info!(verbs = verbs.len(), output = %config.output.display(), "done");
    Ok(verbs.len())
}
