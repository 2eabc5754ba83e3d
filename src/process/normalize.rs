use once_cell::sync::Lazy;
use regex::Regex;

/// Pronoun tokens stripped from German forms, tried in this order.
/// `er/si/es` is a misspelling that occurs in the sheet.
pub const PRONOUN_TOKENS: [&str; 7] = [
    "ich",
    "du",
    "er/sie/es",
    "er/si/es",
    "wir",
    "ihr",
    "sie/Sie",
];

// A token only counts when followed by whitespace or the end of the cell, so
// forms like "durfte" or "wird" keep their first letters.
static PRONOUN_PREFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    PRONOUN_TOKENS
        .iter()
        .map(|t| {
            Regex::new(&format!(r"(?i)^{}(?:\s+|$)", regex::escape(t)))
                .expect("pronoun pattern is valid")
        })
        .collect()
});

/// Remove a leading subject pronoun from a German form, then trim.
///
/// Every pattern is applied in turn to the result of the previous one, so
/// `"ich du gehe"` loses both tokens. Text without a pronoun comes back
/// trimmed and otherwise unchanged.
pub fn strip_pronoun(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    for re in PRONOUN_PREFIXES.iter() {
        let stripped = re.replace(&s, "").into_owned();
        s = stripped;
    }
    s.trim().to_string()
}

/// Whether `s` still opens with one of the pronoun tokens.
pub fn has_pronoun_prefix(s: &str) -> bool {
    let s = s.trim();
    PRONOUN_PREFIXES.iter().any(|re| re.is_match(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_each_token() {
        for token in PRONOUN_TOKENS {
            assert_eq!(strip_pronoun(&format!("{} gehen", token)), "gehen", "{}", token);
        }
    }

    #[test]
    fn strip_is_case_insensitive() {
        assert_eq!(strip_pronoun("Ich gehe"), "gehe");
        assert_eq!(strip_pronoun("ER/SIE/ES geht"), "geht");
        assert_eq!(strip_pronoun("SIE/sie gehen"), "gehen");
    }

    #[test]
    fn perfekt_keeps_auxiliary() {
        assert_eq!(strip_pronoun("ich bin gegangen"), "bin gegangen");
        assert_eq!(strip_pronoun("wir  haben\tgesehen "), "haben\tgesehen");
    }

    #[test]
    fn typo_variant_only() {
        assert_eq!(strip_pronoun("er/si/es ging"), "ging");
        // not generalized beyond the one known misspelling
        assert_eq!(strip_pronoun("er/sie/is ging"), "er/sie/is ging");
    }

    #[test]
    fn no_pronoun_is_unchanged() {
        assert_eq!(strip_pronoun("  gehe "), "gehe");
        assert_eq!(strip_pronoun("durfte"), "durfte");
        assert_eq!(strip_pronoun("wird"), "wird");
        assert_eq!(strip_pronoun("ihrer"), "ihrer");
        assert_eq!(strip_pronoun(""), "");
    }

    #[test]
    fn pronoun_alone_becomes_empty() {
        assert_eq!(strip_pronoun("ich"), "");
        assert_eq!(strip_pronoun("du   "), "");
    }

    #[test]
    fn later_patterns_see_earlier_output() {
        assert_eq!(strip_pronoun("ich du gehe"), "gehe");
        // earlier pattern does not get a second chance
        assert_eq!(strip_pronoun("du ich gehe"), "ich gehe");
    }

    #[test]
    fn prefix_detection() {
        assert!(has_pronoun_prefix("ich gehe"));
        assert!(has_pronoun_prefix(" sie/Sie gehen"));
        assert!(!has_pronoun_prefix("gehe"));
        assert!(!has_pronoun_prefix("durfte"));
    }
}
