//! Pipe-table parsing.

use crate::model::Table;

/// Check if a line is a table-row candidate: after trimming it starts and
/// ends with `|`.
pub fn is_table_row(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 2 && t.starts_with('|') && t.ends_with('|')
}

/// Check if a line is an alignment/separator row (`|---|:---:|`).
pub fn is_separator_row(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty()
        && t.contains('-')
        && t.chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a row into trimmed, non-empty cells.
///
/// Empty cells are dropped, so an empty value and a missing cell look the
/// same to every later stage.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a run of pipe-delimited lines into a table.
///
/// Separator and blank lines are ignored. Returns `None` when fewer than two
/// lines remain or the header line holds no cells. Lines that yield no cells
/// after the header are skipped.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    let content: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|l| !l.trim().is_empty() && !is_separator_row(l))
        .collect();

    if content.len() < 2 {
        log::debug!(
            "Table: dropping run with {} usable line(s), need at least 2",
            content.len()
        );
        return None;
    }

    let headers = split_cells(content[0]);
    if headers.is_empty() {
        log::debug!("Table: dropping run with an empty header line");
        return None;
    }

    let mut table = Table::new(headers);
    for line in &content[1..] {
        let cells = split_cells(line);
        if cells.is_empty() {
            continue;
        }
        table.add_row(cells);
    }

    log::trace!(
        "Table: parsed {} column(s), {} row(s)",
        table.column_count(),
        table.row_count()
    );
    Some(table)
}
