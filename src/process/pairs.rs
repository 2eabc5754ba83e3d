use tracing::{debug, trace};

use crate::config::Normalization;
use crate::process::{layout, normalize::strip_pronoun, utils, RawTable};
use crate::schema::{FormPair, Pronoun, Tense, TenseMap, VerbRecord};

/// Walk `table` two rows at a time (German, then English) and build one
/// record per pair whose infinitive cell is not blank.
///
/// Blank-infinitive pairs are skipped wherever they occur. A trailing row
/// without an English partner is ignored.
pub fn reduce_pairs(table: &RawTable, normalization: Normalization) -> Vec<VerbRecord> {
    let mut verbs = Vec::with_capacity(table.len() / 2);

    for (i, pair) in table.rows.chunks_exact(2).enumerate() {
        let (german, english) = (&pair[0], &pair[1]);
        let sheet_row = table.first_sheet_row + i * 2 + 1;

        if utils::is_blank(german, layout::INFINITIVE_COL) {
            debug!(sheet_row, "skipping pair with blank infinitive");
            continue;
        }

        let verb = VerbRecord {
            infinitive: utils::cell_text(german, layout::INFINITIVE_COL),
            translation: utils::cell_text(english, layout::TRANSLATION_COL),
            present: tense_map(german, english, Tense::Present, normalization),
            perfekt: tense_map(german, english, Tense::Perfekt, normalization),
            imperfekt: tense_map(german, english, Tense::Imperfekt, normalization),
        };
        trace!(sheet_row, infinitive = %verb.infinitive, "parsed verb");
        verbs.push(verb);
    }

    verbs
}

fn tense_map(
    german: &[Option<String>],
    english: &[Option<String>],
    tense: Tense,
    normalization: Normalization,
) -> TenseMap {
    let mut map = TenseMap::default();
    for pronoun in Pronoun::ALL {
        let col = layout::column(tense, pronoun);
        let raw = utils::cell_text(german, col);
        let german = match normalization {
            Normalization::Plain => raw,
            Normalization::StripPronouns => strip_pronoun(&raw),
        };
        *map.get_mut(pronoun) = FormPair {
            german,
            english: utils::cell_text(english, col),
        };
    }
    map
}
