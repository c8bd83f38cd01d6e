//! Parser for dependency table rows
//!
//! A row has the shape `[name](url)|description|license`. The line is split on
//! `|`, and the first column must be exactly one markdown link. Lines that do
//! not match are not rows; that is the common case (prose, the header and
//! separator lines) and not an error.
//!
//! Names containing `]` and urls containing `)` cannot be represented: the
//! first `]` ends the name and the first `)` ends the url, so such a row is
//! not recognized at all.

use super::DependencyRecord;

/// Parse a table row, returning `None` if the line is not one.
pub fn parse_row(line: &str) -> Option<DependencyRecord> {
    if !line.starts_with('[') {
        return None;
    }

    let mut columns = line.split('|');
    let link = columns.next()?;
    let description = columns.next()?;
    let license = columns.next()?;

    let (name, url) = parse_link(link)?;

    Some(DependencyRecord::new(name, url, description, license))
}

/// Split `[name](url)` into its parts.
///
/// The first `]` closes the name and must be directly followed by `(`; the
/// first `)` after that closes the url and must end the column.
fn parse_link(column: &str) -> Option<(&str, &str)> {
    let rest = column.strip_prefix('[')?;
    let name_end = rest.find(']')?;
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }

    let after_name = rest[name_end + 1..].strip_prefix('(')?;
    let url_end = after_name.find(')')?;
    let url = &after_name[..url_end];

    if !after_name[url_end + 1..].is_empty() {
        return None;
    }

    Some((name, url))
}
