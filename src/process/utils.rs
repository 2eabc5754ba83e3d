/// Trimmed text of `row[col]`; empty when the cell is blank or the row is
/// narrower than `col`.
pub fn cell_text(row: &[Option<String>], col: usize) -> String {
    row.get(col)
        .and_then(|c| c.as_deref())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// True when the cell is missing, empty or whitespace only.
pub fn is_blank(row: &[Option<String>], col: usize) -> bool {
    row.get(col)
        .and_then(|c| c.as_deref())
        .map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Vec<Option<String>> {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn cell_text_defaults_to_empty() {
        let r = row(&[Some("  gehen "), None]);
        assert_eq!(cell_text(&r, 0), "gehen");
        assert_eq!(cell_text(&r, 1), "");
        assert_eq!(cell_text(&r, 40), "");
    }

    #[test]
    fn blank_covers_whitespace_and_out_of_range() {
        let r = row(&[Some("   "), Some("x")]);
        assert!(is_blank(&r, 0));
        assert!(!is_blank(&r, 1));
        assert!(is_blank(&r, 2));
        assert!(is_blank(&[], 0));
    }
}
