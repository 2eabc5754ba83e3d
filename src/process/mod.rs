// src/process/mod.rs
use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use tracing::{debug, info};

use crate::config::Normalization;
use crate::schema::VerbRecord;

pub mod layout;
pub mod normalize;
pub mod pairs;
pub mod raw_table;
pub mod utils;

pub use raw_table::RawTable;

/// Open the workbook at `path`, take its first worksheet and return the rows
/// below the first `header_rows` rows.
///
/// Layout is not checked here; a sheet that doesn't follow the verb layout
/// just produces odd records downstream.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_verb_workbook<P: AsRef<Path>>(path: P, header_rows: usize) -> Result<RawTable> {
    // 1) Open the workbook, format picked from the extension
    let mut workbook = open_workbook_auto(&path)
        .with_context(|| format!("Failed to open workbook: {:?}", path.as_ref()))?;

    let sheet_names = workbook.sheet_names();
    debug!(?sheet_names, "opened workbook");

    // 2) First worksheet only
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range
            .with_context(|| format!("Failed to read first worksheet of {:?}", path.as_ref()))?,
        None => bail!("workbook {:?} has no worksheets", path.as_ref()),
    };
    // drop the workbook (and its file handle) now that the range is in memory
    drop(workbook);

    // 3) Flatten into text rows, header rows removed
    let table = RawTable::from_range(&range, header_rows);
    info!(rows = table.len(), "loaded sheet");
    Ok(table)
}

/// Turn a loaded table into verb records.
pub fn convert_table(table: &RawTable, normalization: Normalization) -> Vec<VerbRecord> {
    let verbs = pairs::reduce_pairs(table, normalization);
    info!(
        verbs = verbs.len(),
        pairs = table.len() / 2,
        ?normalization,
        "converted table"
    );
    verbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,verbsheet::process=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn missing_workbook_is_an_error() {
        init_test_logging();
        let err = load_verb_workbook("does/not/exist/verbs.xlsx", 3).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open workbook"));
    }

    #[test]
    fn garbage_xlsx_is_an_error() -> Result<()> {
        init_test_logging();
        let mut tmp = Builder::new().suffix(".xlsx").tempfile()?;
        tmp.write_all(b"this is not a zip archive")?;
        assert!(load_verb_workbook(tmp.path(), 3).is_err());
        Ok(())
    }

    #[test]
    fn unknown_extension_is_an_error() -> Result<()> {
        init_test_logging();
        let tmp = NamedTempFile::new()?;
        assert!(load_verb_workbook(tmp.path(), 3).is_err());
        Ok(())
    }

    #[test]
    fn convert_table_counts_retained_pairs() {
        init_test_logging();
        let cell = |s: &str| Some(s.to_string());
        let table = RawTable {
            rows: vec![
                vec![cell("sein"), None, cell("ich bin")],
                vec![cell("to be")],
                vec![None],
                vec![cell("trailing english")],
            ],
            first_sheet_row: 3,
        };
        let verbs = convert_table(&table, Normalization::StripPronouns);
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].present.ich.german, "bin");
    }
}
