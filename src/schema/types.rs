// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// Subject pronouns, in the order the sheet lays out each tense block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pronoun {
    Ich,
    Du,
    ErSieEs,
    Wir,
    Ihr,
    SieFormal,
}

impl Pronoun {
    pub const ALL: [Pronoun; 6] = [
        Pronoun::Ich,
        Pronoun::Du,
        Pronoun::ErSieEs,
        Pronoun::Wir,
        Pronoun::Ihr,
        Pronoun::SieFormal,
    ];

    /// JSON key used in the output file.
    pub fn key(self) -> &'static str {
        match self {
            Pronoun::Ich => "ich",
            Pronoun::Du => "du",
            Pronoun::ErSieEs => "er/sie/es",
            Pronoun::Wir => "wir",
            Pronoun::Ihr => "ihr",
            Pronoun::SieFormal => "sie/Sie",
        }
    }

    /// Position within a tense block (0..6).
    pub fn offset(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tense {
    Present,
    Perfekt,
    Imperfekt,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Perfekt, Tense::Imperfekt];

    pub fn key(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Perfekt => "perfekt",
            Tense::Imperfekt => "imperfekt",
        }
    }
}

/// One conjugated form and its English gloss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPair {
    pub german: String,
    pub english: String,
}

/// All six pronoun slots of one tense. Every slot is always present in the
/// output; a missing cell is an empty `FormPair`, never an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenseMap {
    pub ich: FormPair,
    pub du: FormPair,
    #[serde(rename = "er/sie/es")]
    pub er_sie_es: FormPair,
    pub wir: FormPair,
    pub ihr: FormPair,
    #[serde(rename = "sie/Sie")]
    pub sie_formal: FormPair,
}

impl TenseMap {
    pub fn get(&self, pronoun: Pronoun) -> &FormPair {
        match pronoun {
            Pronoun::Ich => &self.ich,
            Pronoun::Du => &self.du,
            Pronoun::ErSieEs => &self.er_sie_es,
            Pronoun::Wir => &self.wir,
            Pronoun::Ihr => &self.ihr,
            Pronoun::SieFormal => &self.sie_formal,
        }
    }

    pub fn get_mut(&mut self, pronoun: Pronoun) -> &mut FormPair {
        match pronoun {
            Pronoun::Ich => &mut self.ich,
            Pronoun::Du => &mut self.du,
            Pronoun::ErSieEs => &mut self.er_sie_es,
            Pronoun::Wir => &mut self.wir,
            Pronoun::Ihr => &mut self.ihr,
            Pronoun::SieFormal => &mut self.sie_formal,
        }
    }

    /// Slots in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Pronoun, &FormPair)> + '_ {
        Pronoun::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// A single verb as emitted into `verbs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub infinitive: String,
    pub translation: String,
    pub present: TenseMap,
    pub perfekt: TenseMap,
    pub imperfekt: TenseMap,
}

impl VerbRecord {
    pub fn tense(&self, tense: Tense) -> &TenseMap {
        match tense {
            Tense::Present => &self.present,
            Tense::Perfekt => &self.perfekt,
            Tense::Imperfekt => &self.imperfekt,
        }
    }
}
