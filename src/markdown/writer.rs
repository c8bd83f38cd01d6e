//! Regeneration of a document with replacement tables

use super::heading::{HeadingKind, classify};

/// Number of empty lines that bound an old table section: the one after the
/// heading and the one after the last row.
pub const SECTION_BLANK_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Copying document lines unchanged
    Passthrough,
    /// Dropping the old table below a heading
    SkippingOldTable { blank_lines: usize },
}

/// Rewrite a document, replacing the body of each dependency table.
///
/// Every runtime or development heading is re-emitted followed by an empty
/// line, the matching replacement table and another empty line. The old
/// table below it is dropped up to the end of its section, which is reached
/// once [`SECTION_BLANK_LINES`] empty lines have been consumed. Everything
/// else is copied verbatim, one `\n`-terminated line at a time.
///
/// Writing a document with the tables it already contains returns the same
/// text, and an empty replacement leaves a bare heading that the next run
/// still rewrites in place.
pub fn write_tables<I, S>(lines: I, runtime_table: &str, dev_table: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    let mut state = WriterState::Passthrough;

    for line in lines {
        let line = line.as_ref();

        let table = match classify(line) {
            HeadingKind::Runtime => Some(runtime_table),
            HeadingKind::Development => Some(dev_table),
            HeadingKind::None => None,
        };
        if let Some(table) = table {
            output.push_str(line);
            output.push_str("\n\n");
            output.push_str(table);
            output.push('\n');
            state = WriterState::SkippingOldTable { blank_lines: 0 };
            continue;
        }

        if let WriterState::SkippingOldTable { blank_lines } = state {
            if blank_lines >= SECTION_BLANK_LINES {
                state = WriterState::Passthrough;
            } else {
                if line.is_empty() {
                    state = WriterState::SkippingOldTable {
                        blank_lines: blank_lines + 1,
                    };
                }
                continue;
            }
        }

        output.push_str(line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{DependencyRecord, read_tables, render_table};

    const CANONICAL: &str = concat!(
        "# My Project\n\nIntro paragraph.\n\n## Dependencies\n\n",
        "### Runtime Dependencies\n\n",
        "Name | Description | License \n---- | ----------- | ------- \n",
        "[foo](http://x)|old desc|MIT\n\n",
        "### Development Dependencies\n\n",
        "Name | Description | License \n---- | ----------- | ------- \n",
        "[jest](http://j)|Delightful JavaScript Testing.|MIT\n\n",
        "## License\n\nMIT\n",
    );

    fn write(content: &str, runtime: &str, dev: &str) -> String {
        write_tables(content.lines(), runtime, dev)
    }

    #[test]
    fn test_canonical_document_is_reproduced() {
        let existing = read_tables(CANONICAL.lines());
        let runtime = render_table(&[existing["foo"].clone()]);
        let dev = render_table(&[existing["jest"].clone()]);

        assert_eq!(write(CANONICAL, &runtime, &dev), CANONICAL);
    }

    #[test]
    fn test_replaces_row_without_duplicates() {
        let runtime = render_table(&[DependencyRecord::new("foo", "http://x", "new desc", "MIT")]);
        let dev = render_table(&[DependencyRecord::new("jest", "http://j", "Testing", "MIT")]);

        let output = write(CANONICAL, &runtime, &dev);

        assert!(output.contains("[foo](http://x)|new desc|MIT\n"));
        assert!(!output.contains("old desc"));
        assert_eq!(output.matches("[foo](").count(), 1);
        assert!(output.starts_with("# My Project\n\nIntro paragraph.\n"));
        assert!(output.ends_with("## License\n\nMIT\n"));
    }

    #[test]
    fn test_empty_replacement_keeps_heading_without_rows() {
        let runtime = render_table(&[DependencyRecord::new("foo", "http://x", "d", "MIT")]);
        let output = write(CANONICAL, &runtime, "");

        assert!(output.contains("### Development Dependencies\n\n\n## License\n"));
        assert!(!output.contains("jest"));
        assert_eq!(output.matches("Name | Description").count(), 1);
    }

    #[test]
    fn test_empty_replacement_is_stable_across_runs() {
        let runtime = render_table(&[DependencyRecord::new("foo", "http://x", "d", "MIT")]);
        let first = write(CANONICAL, "", &runtime);
        let second = write(&first, "", &runtime);

        assert_eq!(first, second);
        assert!(second.contains("Intro paragraph."));
        assert!(second.contains("## License\n\nMIT\n"));
    }

    #[test]
    fn test_content_after_two_blank_lines_is_kept() {
        let content = "\
### Runtime Dependencies

Name | Description | License
---- | ----------- | -------
[a](u)|d|l

Unrelated paragraph.
Second line.
";
        let runtime = render_table(&[DependencyRecord::new("b", "v", "e", "m")]);
        let output = write(content, &runtime, "");

        assert_eq!(
            output,
            format!("### Runtime Dependencies\n\n{runtime}\nUnrelated paragraph.\nSecond line.\n")
        );
    }

    #[test]
    fn test_resumes_after_two_blank_lines_below_rows() {
        let content = "### Runtime Dependencies\n\nName | Description | License \n---- | ----------- | ------- \n[a](u)|d|l\n\n\nAfter.\n";
        let runtime = render_table(&[DependencyRecord::new("a", "u", "d", "l")]);

        let first = write(content, &runtime, "");
        assert_eq!(
            first,
            format!("### Runtime Dependencies\n\n{runtime}\n\nAfter.\n")
        );
        assert_eq!(first.matches("After.").count(), 1);

        let second = write(&first, &runtime, "");
        assert_eq!(second, first);
    }

    #[test]
    fn test_document_without_headings_is_copied() {
        let content = "# Title\n\nSome text.\n\n[x](y)|z|w\n";
        assert_eq!(write(content, "ignored", "ignored"), content);
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        let content = "# Title\r\n\r\n### Runtime Dependencies\r\n\r\n[a](u)|d|l\r\n\r\nEnd\r\n";
        let output = write(content, "", "");
        assert_eq!(output, "# Title\n\n### Runtime Dependencies\n\n\nEnd\n");
    }

    #[test]
    fn test_round_trip_is_a_fixed_point() {
        let first_read = read_tables(CANONICAL.lines());
        let mut records: Vec<_> = first_read.values().cloned().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        let table = render_table(&records);

        let rewritten = write(CANONICAL, &table, &table);

        assert_eq!(read_tables(rewritten.lines()), first_read);
    }
}
