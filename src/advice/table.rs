//! Pipe-delimited schedule table parser

use tracing::debug;

use super::model::ScheduleEntry;

/// Title of the date column in the header row
const HEADER_TITLE: &str = "Date (Relative)";

/// Parse the rows of a `| Date (Relative) | Task | Details |` table.
///
/// Only lines that start and end with `|` and hold exactly three cells are
/// rows; an escaped `\|` does not split a cell. Header and separator rows are skipped; everything else is kept in
/// the order it appears. Malformed lines are dropped without error.
pub fn parse_rows(text: &str) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();

    for line in text.lines() {
        let Some(cells) = split_row(line) else {
            continue;
        };

        let [date, task, details] = cells;
        if date.contains(HEADER_TITLE) || is_separator(&date) {
            continue;
        }

        entries.push(ScheduleEntry {
            relative_date: date,
            task,
            details,
        });
    }

    entries
}

/// Split a table line into three cleaned cells
fn split_row(line: &str) -> Option<[String; 3]> {
    let line = line.trim();
    let inner = line.strip_prefix('|')?.strip_suffix('|')?;

    let cells = split_cells(inner);
    match <[String; 3]>::try_from(cells) {
        Ok(cells) => Some(cells),
        Err(cells) => {
            debug!("Dropping table row with {} cells: {:?}", cells.len(), line);
            None
        }
    }
}

/// Split on unescaped pipes; `\|` is a literal pipe inside a cell
fn split_cells(inner: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => cells.push(clean_cell(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    cells.push(clean_cell(&current));
    cells
}

/// A delimiter cell such as `---`, `:--` or `:-:`
fn is_separator(cell: &str) -> bool {
    cell.contains('-')
        && cell
            .chars()
            .all(|c| c == '-' || c == ':' || c.is_whitespace())
}

fn clean_cell(cell: &str) -> String {
    cell.trim().replace("**", "").trim().to_string()
}
