//! Markdown rendering of dependency tables

use super::{
    DEPENDENCY_SECTION_HEADING, DEVELOPMENT_DEPENDENCY_HEADING, DependencyRecord,
    RUNTIME_DEPENDENCY_HEADING, TABLE_HEADER,
};

/// Render records as a table, in the given order.
///
/// An empty slice renders as an empty string so that callers emit a bare
/// heading rather than a header with no rows. Descriptions are written as-is:
/// a `|` inside one will split the row on the next read.
pub fn render_table(records: &[DependencyRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut table = String::from(TABLE_HEADER);
    for record in records {
        table.push_str(&format!(
            "[{}]({})|{}|{}\n",
            record.name, record.npm_link, record.description, record.license
        ));
    }
    table
}

/// Render the whole `## Dependencies` section for a document that has none.
///
/// Each table is laid out the same way [`write_tables`](super::write_tables)
/// lays it out, so a later run recognizes and rewrites it in place.
pub fn render_section(runtime_table: &str, dev_table: &str) -> String {
    format!(
        "\n{DEPENDENCY_SECTION_HEADING}\n\n\
         The source of truth for this list is [package.json](./package.json)\n\n\
         {RUNTIME_DEPENDENCY_HEADING}\n\n{runtime_table}\n\
         {DEVELOPMENT_DEPENDENCY_HEADING}\n\n{dev_table}\n"
    )
}
