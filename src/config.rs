use std::path::PathBuf;

use crate::process::layout::HEADER_ROWS;

pub const DEFAULT_INPUT: &str = "verbs.xlsx";
pub const DEFAULT_OUTPUT: &str = "verbs.json";

/// What happens to German forms after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Trim only.
    Plain,
    /// Also drop a leading subject pronoun ("ich gehe" → "gehe").
    #[default]
    StripPronouns,
}

/// Everything a conversion run needs. The binaries take no flags and use
/// the defaults, relative to the working directory.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub header_rows: usize,
    pub normalization: Normalization,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            header_rows: HEADER_ROWS,
            normalization: Normalization::default(),
        }
    }
}

impl ConvertConfig {
    /// Defaults, but German forms keep their pronouns.
    pub fn plain() -> Self {
        Self {
            normalization: Normalization::Plain,
            ..Self::default()
        }
    }
}
