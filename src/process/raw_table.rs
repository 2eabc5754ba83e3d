use calamine::{Data, Range};

/// The data rows of the first worksheet, header rows already dropped.
///
/// Each row is a variable-width sequence of optional cell text; `None` is an
/// empty or error cell. Rows keep their trailing blanks trimmed off, so a
/// row's width says nothing about the sheet's width.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<Option<String>>>,
    /// Zero-based sheet row of `rows[0]`, for log messages.
    pub first_sheet_row: usize,
}

impl RawTable {
    /// Lay `range` out from A1 (not from the range's first used cell, which
    /// is where calamine starts it) and drop the first `header_rows` rows.
    pub fn from_range(range: &Range<Data>, header_rows: usize) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self {
                rows: Vec::new(),
                first_sheet_row: header_rows,
            };
        };

        let rows = (header_rows as u32..=end_row)
            .map(|r| {
                let mut row: Vec<Option<String>> = (0..=end_col)
                    .map(|c| range.get_value((r, c)).and_then(cell_to_text))
                    .collect();
                while matches!(row.last(), Some(None)) {
                    row.pop();
                }
                row
            })
            .collect();

        Self {
            rows,
            first_sheet_row: header_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text of a single cell; `None` for the cells a dataframe would read as NaN.
pub fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
