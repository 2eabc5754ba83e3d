pub mod types;
pub mod verify;
pub mod write;

pub use types::{FormPair, Pronoun, Tense, TenseMap, VerbRecord};
pub use verify::{verify_file, verify_verbs, VerifyReport};
pub use write::{to_json_bytes, write_verbs};
