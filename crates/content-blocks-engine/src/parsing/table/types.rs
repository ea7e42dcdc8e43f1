use serde::{Deserialize, Serialize};

/// Column headers for a parsed table.
///
/// Headers are never inferred from pasted content; the consuming editor
/// may rename them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeaders {
    pub col1: String,
    pub col2: String,
    pub col3: Option<String>,
}

impl TableHeaders {
    pub(crate) fn generic(column_count: u8) -> Self {
        Self {
            col1: "Item".to_string(),
            col2: "Value".to_string(),
            col3: (column_count == 3).then(|| "Detail".to_string()),
        }
    }
}

/// One parsed data row, raw trimmed strings without coercion.
///
/// `col3` is present only in three-column tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub col1: String,
    pub col2: String,
    pub col3: Option<String>,
}

/// Structured result of a smart paste.
///
/// Invariants: `column_count` is 3 only when every row yielded a non-empty
/// third field, else 2; `title` is present only when the first input line
/// had no delimiter at all; `rows` preserves input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartTable {
    pub column_count: u8,
    pub title: Option<String>,
    pub headers: TableHeaders,
    pub rows: Vec<TableRow>,
}
