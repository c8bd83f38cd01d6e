//! Extraction of the records already present in a document

use super::heading::is_dependency_heading;
use super::row::parse_row;
use super::DependencyMapping;

/// Where the reader is relative to a dependency table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Outside any dependency section
    Idle,
    /// Below a heading, no data row seen yet
    ConsumingNoRowsYet,
    /// Inside a table body; the next empty line ends it
    ConsumingWithRows,
}

impl ReaderState {
    fn next(self, line: &str, found: &mut DependencyMapping) -> Self {
        let state = match self {
            ReaderState::Idle if is_dependency_heading(line) => ReaderState::ConsumingNoRowsYet,
            other => other,
        };

        match state {
            ReaderState::Idle => ReaderState::Idle,
            ReaderState::ConsumingNoRowsYet | ReaderState::ConsumingWithRows => {
                if let Some(record) = parse_row(line) {
                    found.insert(record.name.clone(), record);
                    ReaderState::ConsumingWithRows
                } else if state == ReaderState::ConsumingWithRows && line.is_empty() {
                    ReaderState::Idle
                } else {
                    state
                }
            }
        }
    }
}

/// Collect every row found under a runtime or development heading.
///
/// Rows are consumed from the first heading until an empty line follows at
/// least one data row. Lines before the first row (the blank line, the header
/// and separator) are skipped. A document without headings, or with headings
/// but no rows, yields an empty mapping.
pub fn read_tables<I, S>(lines: I) -> DependencyMapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = DependencyMapping::new();
    let mut state = ReaderState::Idle;

    for line in lines {
        state = state.next(line.as_ref(), &mut found);
    }

    tracing::debug!("Found {} existing dependency rows", found.len());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::DependencyRecord;

    fn read(content: &str) -> DependencyMapping {
        read_tables(content.lines())
    }

    #[test]
    fn test_no_headings_yields_empty_mapping() {
        let content = "# Project\n\n[foo](http://x)|desc|MIT\n\nSome text\n";
        assert!(read(content).is_empty());
    }

    #[test]
    fn test_single_row_table() {
        let content = "### Runtime Dependencies\n\n[A](u)|d|l\n\n";
        let found = read(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found["A"], DependencyRecord::new("A", "u", "d", "l"));
    }

    #[test]
    fn test_both_tables() {
        let content = "\
# Project

## Dependencies

### Runtime Dependencies

Name | Description | License
---- | ----------- | -------
[express](https://www.npmjs.com/package/express)|Fast web framework|MIT
[lodash](https://www.npmjs.com/package/lodash)|Lodash modular utilities.|MIT

### Development Dependencies

Name | Description | License
---- | ----------- | -------
[jest](https://www.npmjs.com/package/jest)|Delightful JavaScript Testing.|MIT

";
        let found = read(content);
        assert_eq!(found.len(), 3);
        assert_eq!(found["express"].description, "Fast web framework");
        assert_eq!(found["lodash"].license, "MIT");
        assert_eq!(found["jest"].npm_link, "https://www.npmjs.com/package/jest");
    }

    #[test]
    fn test_rows_after_table_end_are_ignored() {
        let content = "\
### Runtime Dependencies

[a](u)|d|l

[b](u)|d|l
";
        let found = read(content);
        assert_eq!(found.len(), 1);
        assert!(found.contains_key("a"));
    }

    #[test]
    fn test_blank_lines_before_first_row_keep_consuming() {
        let content = "### Development Dependencies\n\n\n\nName | Description | License \n\n[a](u)|d|l\n";
        let found = read(content);
        assert!(found.contains_key("a"));
    }

    #[test]
    fn test_heading_without_rows_is_not_an_error() {
        let content = "### Runtime Dependencies\n\nNothing here yet.\n";
        assert!(read(content).is_empty());
    }

    #[test]
    fn test_whitespace_only_line_does_not_end_table() {
        let content = "### Runtime Dependencies\n[a](u)|d|l\n   \n[b](u)|d|l\n";
        let found = read(content);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_duplicate_names_keep_last_row() {
        let content = "### Runtime Dependencies\n[a](u)|first|l\n[a](u)|second|l\n";
        let found = read(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found["a"].description, "second");
    }

    #[test]
    fn test_reader_state_is_local_to_each_call() {
        let unterminated = "### Runtime Dependencies\n[a](u)|d|l";
        assert_eq!(read(unterminated).len(), 1);
        // A previous unterminated table must not leak into the next document.
        assert!(read("[b](u)|d|l\n").is_empty());
    }
}
