//! Dependency heading detection

use super::{DEVELOPMENT_DEPENDENCY_HEADING, RUNTIME_DEPENDENCY_HEADING};

/// Classification of a single document line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    /// `### Runtime Dependencies`
    Runtime,
    /// `### Development Dependencies`
    Development,
    /// Anything else
    None,
}

/// Classify a line by exact comparison with the two table headings.
///
/// No trimming or case folding is applied: the writer must find the very
/// headings it emitted on a previous run, so `"### Runtime Dependencies "`
/// (trailing space) is [`HeadingKind::None`].
pub fn classify(line: &str) -> HeadingKind {
    if line == RUNTIME_DEPENDENCY_HEADING {
        HeadingKind::Runtime
    } else if line == DEVELOPMENT_DEPENDENCY_HEADING {
        HeadingKind::Development
    } else {
        HeadingKind::None
    }
}

pub fn is_dependency_heading(line: &str) -> bool {
    classify(line) != HeadingKind::None
}

/// Whether any line of the document is one of the table headings
pub fn has_dependency_headings<I, S>(lines: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .any(|line| is_dependency_heading(line.as_ref()))
}
