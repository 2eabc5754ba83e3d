use anyhow::{Context, Result};
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};
use tracing::{debug, warn};

use super::{Pronoun, Tense, VerbRecord};
use crate::process::normalize::has_pronoun_prefix;

/// Summary of a `verbs.json` check.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub records: usize,
    /// Array indices of records whose infinitive is blank.
    pub blank_infinitives: Vec<usize>,
    /// Empty German forms, per tense.
    pub empty_german: BTreeMap<Tense, usize>,
    /// German forms that still open with a subject pronoun.
    pub pronoun_prefixed: Vec<(String, Tense, Pronoun)>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.blank_infinitives.is_empty()
    }
}

pub fn verify_verbs(verbs: &[VerbRecord]) -> VerifyReport {
    let mut report = VerifyReport {
        records: verbs.len(),
        ..Default::default()
    };
    for tense in Tense::ALL {
        report.empty_german.insert(tense, 0);
    }

    for (idx, verb) in verbs.iter().enumerate() {
        if verb.infinitive.trim().is_empty() {
            warn!(idx, "record with blank infinitive");
            report.blank_infinitives.push(idx);
        }
        for tense in Tense::ALL {
            for (pronoun, form) in verb.tense(tense).iter() {
                if form.german.is_empty() {
                    *report.empty_german.entry(tense).or_default() += 1;
                } else if has_pronoun_prefix(&form.german) {
                    report
                        .pronoun_prefixed
                        .push((verb.infinitive.clone(), tense, pronoun));
                }
            }
        }
    }

    debug!(?report, "verified");
    report
}

/// Load a written `verbs.json` and check it. A file that does not parse as
/// an array of complete records is an error, not a report.
pub fn verify_file<P: AsRef<Path>>(path: P) -> Result<VerifyReport> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {:?}", path))?;
    let verbs: Vec<VerbRecord> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {:?}", path))?;
    Ok(verify_verbs(&verbs))
}
