//! Smart-paste table parsing.
//!
//! Turns tabular text pasted from spreadsheets, `.env` files, or
//! colon-separated lists into rows. Delimiter inference is per line, never
//! global, so mixed-format pastes (an env file with one tab-separated line
//! among equals-separated ones) still parse line-by-line.

pub mod types;

pub use types::{SmartTable, TableHeaders, TableRow};

use std::sync::LazyLock;

use regex::Regex;

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("multi-space pattern"));

/// Field separator inferred for a single line. Priority is fixed: tab
/// beats `=` beats `:` beats a run of two or more spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Tab,
    Equals,
    Colon,
    Spaces,
}

fn infer_delimiter(line: &str) -> Option<Delimiter> {
    if line.contains('\t') {
        Some(Delimiter::Tab)
    } else if line.contains('=') {
        Some(Delimiter::Equals)
    } else if line.contains(':') {
        Some(Delimiter::Colon)
    } else if MULTI_SPACE.is_match(line) {
        Some(Delimiter::Spaces)
    } else {
        None
    }
}

/// Splits on the inferred delimiter, trims each field, and drops fields
/// beyond the third.
fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    let fields: Vec<String> = match delimiter {
        Delimiter::Tab => line.split('\t').map(|f| f.trim().to_string()).collect(),
        Delimiter::Equals => line.split('=').map(|f| f.trim().to_string()).collect(),
        Delimiter::Colon => line.split(':').map(|f| f.trim().to_string()).collect(),
        Delimiter::Spaces => MULTI_SPACE
            .split(line)
            .map(|f| f.trim().to_string())
            .collect(),
    };
    fields.into_iter().take(3).collect()
}

/// Parses pasted tabular text into a [`SmartTable`].
///
/// Returns `None` when `raw` is blank or no line yields a
/// delimiter-separated pair. A first line without any delimiter becomes
/// the table title rather than a data row; later delimiterless lines are
/// skipped as unparseable.
pub fn parse_smart_table(raw: &str) -> Option<SmartTable> {
    let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    let first = lines.next()?;
    let (title, data_lines): (Option<String>, Vec<&str>) = if infer_delimiter(first).is_none() {
        (Some(first.to_string()), lines.collect())
    } else {
        (None, std::iter::once(first).chain(lines).collect())
    };

    let mut rows = Vec::new();
    for line in data_lines {
        let Some(delimiter) = infer_delimiter(line) else {
            continue;
        };
        let fields = split_fields(line, delimiter);
        rows.push(TableRow {
            col1: fields.first().cloned().unwrap_or_default(),
            col2: fields.get(1).cloned().unwrap_or_default(),
            col3: fields.get(2).filter(|f| !f.is_empty()).cloned(),
        });
    }
    if rows.is_empty() {
        return None;
    }

    let column_count = if rows.iter().all(|row| row.col3.is_some()) {
        3
    } else {
        2
    };
    if column_count == 2 {
        for row in &mut rows {
            row.col3 = None;
        }
    }

    Some(SmartTable {
        column_count,
        title,
        headers: TableHeaders::generic(column_count),
        rows,
    })
}
