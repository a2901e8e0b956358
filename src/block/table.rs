//! Pipe table sub-parser.
//!
//! Works on a region of consecutive table-like lines already cut out by
//! the block parser. The first separator row fixes the header (the line
//! just above it) and the column alignments; everything below it is data.

use memchr::memchr;
use smallvec::SmallVec;

use super::node::{Alignment, Table};
use crate::limits::MAX_TABLE_COLUMNS;

/// Outcome of analyzing a candidate region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRegion {
    /// A table whose header is region line `header`. Lines before it are
    /// not part of the table.
    Table { header: usize, table: Table },
    /// No header could be established.
    Rejected,
}

/// Split a row into trimmed cells.
///
/// One leading and one trailing `|` are dropped before splitting.
pub fn split_cells(line: &str) -> SmallVec<[&str; 8]> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Row made only of `|`, `-`, `:` and spaces, with at least one `-`.
///
/// Any other byte, tabs included, disqualifies the row.
pub fn is_separator_row(line: &str) -> bool {
    let bytes = line.as_bytes();
    memchr(b'-', bytes).is_some()
        && bytes
            .iter()
            .all(|b| matches!(b, b'|' | b'-' | b':' | b' '))
}

/// Alignment declared by one separator cell.
pub fn alignment_of(cell: &str) -> Alignment {
    let leading = cell.starts_with(':');
    let trailing = cell.len() > 1 && cell.ends_with(':');
    match (leading, trailing) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

/// Analyze a region of at least two table-like lines.
pub fn parse_region(lines: &[&str]) -> TableRegion {
    let separator = lines.iter().position(|line| is_separator_row(line));

    let (header, table) = match separator {
        Some(k) if k > 0 => (Some(k - 1), headed_table(&lines[k - 1], &lines[k], &lines[k + 1..])),
        _ => (None, headerless_table(lines, separator)),
    };

    match header {
        Some(header) if !table.headers.is_empty() => TableRegion::Table { header, table },
        _ => {
            log::debug!(
                "rejecting table candidate of {} lines: no header row ({} data rows, {} columns)",
                lines.len(),
                table.rows.len(),
                table.column_count()
            );
            TableRegion::Rejected
        }
    }
}

fn headed_table(header: &str, separator: &str, body: &[&str]) -> Table {
    let headers: Vec<String> = split_cells(header)
        .into_iter()
        .take(MAX_TABLE_COLUMNS)
        .map(str::to_owned)
        .collect();
    let columns = headers.len();

    let separator_cells = split_cells(separator);
    let alignments = (0..columns)
        .map(|i| separator_cells.get(i).map_or(Alignment::Left, |c| alignment_of(c)))
        .collect();

    let rows = body.iter().map(|line| row_cells(line)).collect();

    Table {
        headers,
        rows,
        alignments,
    }
}

/// Every line except a leading separator is data; all columns align left.
fn headerless_table(lines: &[&str], separator: Option<usize>) -> Table {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != separator)
        .map(|(_, line)| row_cells(line))
        .collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    Table {
        headers: Vec::new(),
        rows,
        alignments: vec![Alignment::Left; columns],
    }
}

/// Cells as written. Cells past the header's column count are kept; the
/// column count comes from the header alone.
fn row_cells(line: &str) -> Vec<String> {
    split_cells(line)
        .into_iter()
        .take(MAX_TABLE_COLUMNS)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| a | b |").as_slice(), &["a", "b"]);
        assert_eq!(split_cells("a | b").as_slice(), &["a", "b"]);
        assert_eq!(split_cells("  |a|b|c|  ").as_slice(), &["a", "b", "c"]);
        assert_eq!(split_cells("| a || c |").as_slice(), &["a", "", "c"]);
        assert_eq!(split_cells("|").as_slice(), &[""]);
    }

    #[test]
    fn test_separator_row() {
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :--- | ---: | :-: |"));
        assert!(is_separator_row("---|---"));
        assert!(!is_separator_row("| : | : |"));
        assert!(!is_separator_row("| a | --- |"));
        assert!(!is_separator_row("|   |"));
        assert!(!is_separator_row("\t|---|"));
        assert!(!is_separator_row("|---|\u{a0}"));
        assert!(is_separator_row("  |---|  "));
    }

    #[test]
    fn test_alignment_of() {
        assert_eq!(alignment_of("---"), Alignment::Left);
        assert_eq!(alignment_of(":---"), Alignment::Left);
        assert_eq!(alignment_of("---:"), Alignment::Right);
        assert_eq!(alignment_of(":---:"), Alignment::Center);
        assert_eq!(alignment_of(":"), Alignment::Left);
    }

    #[test]
    fn test_basic_region() {
        let region = parse_region(&["| a | b |", "|---|---|", "| 1 | 2 |"]);
        assert_eq!(
            region,
            TableRegion::Table {
                header: 0,
                table: Table {
                    headers: strings(&["a", "b"]),
                    rows: vec![strings(&["1", "2"])],
                    alignments: vec![Alignment::Left, Alignment::Left],
                },
            }
        );
    }

    #[test]
    fn test_alignments_follow_separator() {
        let TableRegion::Table { table, .. } =
            parse_region(&["| l | c | r |", "|:--|:-:|--:|"])
        else {
            panic!("expected table");
        };
        assert_eq!(
            table.alignments,
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_short_separator_pads_left() {
        let TableRegion::Table { table, .. } = parse_region(&["| a | b | c |", "|--:|"]) else {
            panic!("expected table");
        };
        assert_eq!(
            table.alignments,
            vec![Alignment::Right, Alignment::Left, Alignment::Left]
        );
    }

    #[test]
    fn test_row_lengths() {
        let TableRegion::Table { table, .. } =
            parse_region(&["| a | b |", "|---|---|", "| 1 |", "| 1 | 2 | 3 |"])
        else {
            panic!("expected table");
        };
        assert_eq!(table.rows, vec![strings(&["1"]), strings(&["1", "2", "3"])]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(1, 2), "3");
    }

    #[test]
    fn test_header_is_line_above_separator() {
        let region = parse_region(&["x | y", "| a | b |", "|---|---|"]);
        let TableRegion::Table { header, table } = region else {
            panic!("expected table");
        };
        assert_eq!(header, 1);
        assert_eq!(table.headers, strings(&["a", "b"]));
    }

    #[test]
    fn test_no_separator_rejected() {
        assert_eq!(parse_region(&["a | b", "c | d"]), TableRegion::Rejected);
    }

    #[test]
    fn test_leading_separator_rejected() {
        assert_eq!(parse_region(&["|---|---|", "| 1 | 2 |"]), TableRegion::Rejected);
    }

    #[test]
    fn test_column_limit() {
        let header = format!("|{}", "h|".repeat(MAX_TABLE_COLUMNS + 10));
        let separator = format!("|{}", "-|".repeat(MAX_TABLE_COLUMNS + 10));
        let TableRegion::Table { table, .. } = parse_region(&[header.as_str(), separator.as_str()]) else {
            panic!("expected table");
        };
        assert_eq!(table.column_count(), MAX_TABLE_COLUMNS);
    }
}
