//! Column layout of `verbs.xlsx`, as inspected by hand.
//!
//! | col   | German row              | English row   |
//! |-------|-------------------------|---------------|
//! | 0     | infinitive              | translation   |
//! | 1     | stem                    | (blank)       |
//! | 2–7   | present, ich…sie/Sie    | glosses       |
//! | 8     | Partizip II             | (blank)       |
//! | 9–14  | perfekt, ich…sie/Sie    | glosses       |
//! | 15    | (blank)                 | participle    |
//! | 16–21 | imperfekt, ich…sie/Sie  | glosses       |
//!
//! Columns 1, 8 and 15 are never emitted.

use crate::schema::{Pronoun, Tense};

/// Title and header rows above the first German row.
pub const HEADER_ROWS: usize = 3;

pub const INFINITIVE_COL: usize = 0;
pub const TRANSLATION_COL: usize = 0;

pub const PRESENT_COL: usize = 2;
pub const PERFEKT_COL: usize = 9;
pub const IMPERFEKT_COL: usize = 16;

/// First column of a tense block.
pub fn first_column(tense: Tense) -> usize {
    match tense {
        Tense::Present => PRESENT_COL,
        Tense::Perfekt => PERFEKT_COL,
        Tense::Imperfekt => IMPERFEKT_COL,
    }
}

/// Sheet column holding `pronoun`'s form of `tense`.
pub fn column(tense: Tense, pronoun: Pronoun) -> usize {
    first_column(tense) + pronoun.offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_cover_the_inspected_ranges() {
        let cols = |t| -> Vec<usize> { Pronoun::ALL.iter().map(|p| column(t, *p)).collect() };
        assert_eq!(cols(Tense::Present), (2..=7).collect::<Vec<_>>());
        assert_eq!(cols(Tense::Perfekt), (9..=14).collect::<Vec<_>>());
        assert_eq!(cols(Tense::Imperfekt), (16..=21).collect::<Vec<_>>());
    }

    #[test]
    fn skipped_columns_are_not_in_any_block() {
        for skipped in [1, 8, 15] {
            for t in Tense::ALL {
                assert!(Pronoun::ALL.iter().all(|p| column(t, *p) != skipped));
            }
        }
    }
}
